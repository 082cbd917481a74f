pub mod assembler;
pub mod reconciliation;
pub mod summary;


pub use assembler::assemble_month;
pub use reconciliation::{Thresholds, reconcile};
pub use summary::{count_time_off_by_label, summarize};
