use thiserror::Error;

pub type CalendarResult<T> = Result<T, CalendarError>;

/// Programmer errors raised by the calendar engine.
///
/// Malformed lesson data is never reported here: records with a bad date are
/// skipped while bucketing, see [`crate::calendar::invalid_records`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalendarError {
    #[error("month index {0} is out of range 0..=11")]
    InvalidMonth(u32),
    #[error("year {0} is outside the supported range 1..=9999")]
    InvalidYear(i32),
    #[error("navigation offset {0} must be -1 or +1")]
    InvalidDirection(i32),
    #[error("unknown lesson status `{0}`")]
    UnknownStatus(String),
}
