use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid schedule: {0}")]
    InvalidSchedule(String),

    #[error("Invalid time off request: {0}")]
    InvalidTimeOff(String),

    #[error("Invalid punch event: {0}")]
    InvalidPunch(String),

    #[error("Invalid status transition: {0}")]
    InvalidTransition(String),

    #[error("Invalid period: {0}")]
    InvalidPeriod(String),
}

impl CoreError {
    pub fn invalid_schedule(message: impl Into<String>) -> Self {
        CoreError::InvalidSchedule(message.into())
    }

    pub fn invalid_time_off(message: impl Into<String>) -> Self {
        CoreError::InvalidTimeOff(message.into())
    }
}
