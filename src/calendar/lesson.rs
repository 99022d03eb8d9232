use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::status::LessonStatus;

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATETIME_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"];
const TIME_FORMATS: [&str; 4] = ["%H:%M:%S", "%H:%M", "%I:%M %p", "%I:%M%p"];

/// A lesson as delivered by the scheduling API.
///
/// `date` and `time` are kept exactly as received; [`LessonRecord::day`] and
/// [`LessonRecord::time_key`] interpret them. A `date` that is missing, `null`
/// or not a string is kept as an empty string so the record still loads and is
/// skipped when bucketing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonRecord {
    #[serde(default)]
    pub id: u64,
    #[serde(default, deserialize_with = "lenient_string")]
    pub date: String,
    #[serde(default)]
    pub time: String,
    pub status: LessonStatus,
    pub student_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructor_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vehicle: Option<String>,
}

/// Ordering key for lessons within a day.
///
/// Parsed times come first in chronological order, anything unparseable
/// follows, ordered by its raw text.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum TimeKey {
    At(NaiveTime),
    Raw(String),
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        _ => Ok(String::new()),
    }
}

impl LessonRecord {
    /// Calendar day of the lesson, ignoring any time-of-day component.
    ///
    /// Accepts `YYYY-MM-DD` and ISO timestamps; for timestamps carrying an
    /// offset the date is taken as written, not converted to local time.
    pub fn day(&self) -> Option<NaiveDate> {
        let raw = self.date.trim();
        if let Ok(date) = NaiveDate::parse_from_str(raw, DATE_FORMAT) {
            return Some(date);
        }
        if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
            return Some(timestamp.date_naive());
        }
        DATETIME_FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
            .map(|timestamp| timestamp.date())
    }

    pub fn time_of_day(&self) -> Option<NaiveTime> {
        let raw = self.time.trim();
        TIME_FORMATS
            .iter()
            .find_map(|format| NaiveTime::parse_from_str(raw, format).ok())
    }

    pub fn time_key(&self) -> TimeKey {
        match self.time_of_day() {
            Some(time) => TimeKey::At(time),
            None => TimeKey::Raw(self.time.trim().to_string()),
        }
    }
}
