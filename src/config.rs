use anyhow::Result;
use std::env;

use crate::services::reconciliation::Thresholds;

#[derive(Debug, Clone)]
pub struct Config {
    pub min_behind_minutes: i64,
    pub min_early_minutes: i64,
    pub min_overtime_minutes: i64,
    pub year_first_month: u32,
    pub hour_precision: i64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();

        Ok(Config {
            min_behind_minutes: env::var("MIN_BEHIND_MIN")
                .unwrap_or_else(|_| "0".to_string())
                .parse()
                .unwrap_or(0)
                .max(0),
            min_early_minutes: env::var("MIN_EARLY_MIN")
                .unwrap_or_else(|_| "0".to_string())
                .parse()
                .unwrap_or(0)
                .max(0),
            min_overtime_minutes: env::var("MIN_OVERTIME_MIN")
                .unwrap_or_else(|_| "0".to_string())
                .parse()
                .unwrap_or(0)
                .max(0),
            year_first_month: match env::var("YEAR_FIRST_MONTH")
                .unwrap_or_else(|_| "4".to_string())
                .parse()
            {
                Ok(month @ 1..=12) => month,
                _ => 4,
            },
            hour_precision: env::var("HOUR_PRECISION")
                .unwrap_or_else(|_| "1".to_string())
                .parse()
                .unwrap_or(1)
                .max(0),
        })
    }

    /// Load configuration from environment variables only (without loading .env files)
    /// This is useful for testing where you want to control the environment directly
    pub fn from_env_only() -> Result<Self> {
        Ok(Config {
            min_behind_minutes: env::var("MIN_BEHIND_MIN")
                .unwrap_or_else(|_| "0".to_string())
                .parse()
                .unwrap_or(0)
                .max(0),
            min_early_minutes: env::var("MIN_EARLY_MIN")
                .unwrap_or_else(|_| "0".to_string())
                .parse()
                .unwrap_or(0)
                .max(0),
            min_overtime_minutes: env::var("MIN_OVERTIME_MIN")
                .unwrap_or_else(|_| "0".to_string())
                .parse()
                .unwrap_or(0)
                .max(0),
            year_first_month: match env::var("YEAR_FIRST_MONTH")
                .unwrap_or_else(|_| "4".to_string())
                .parse()
            {
                Ok(month @ 1..=12) => month,
                _ => 4,
            },
            hour_precision: env::var("HOUR_PRECISION")
                .unwrap_or_else(|_| "1".to_string())
                .parse()
                .unwrap_or(1)
                .max(0),
        })
    }

    pub fn thresholds(&self) -> Thresholds {
        Thresholds {
            behind: self.min_behind_minutes,
            early: self.min_early_minutes,
            overtime: self.min_overtime_minutes,
        }
    }
}
