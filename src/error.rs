//! Error type shared by the grid engine and the command-line front end.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CalError {
    /// A date derived from grid arithmetic is outside chrono's range.
    #[error("cannot represent date {year:04}-{month:02} day {day}")]
    DateArithmetic { year: i32, month: u32, day: i64 },

    #[error("invalid month format: {0}")]
    InvalidFormat(String),

    #[error("{0}")]
    InvalidArgument(String),

    #[error("cannot read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config: {0}")]
    Config(#[from] toml::de::Error),
}
