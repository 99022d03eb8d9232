use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::CalendarError;

/// Lifecycle state of a lesson as reported by the scheduling API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LessonStatus {
    Scheduled,
    InProgress,
    Completed,
    Cancelled,
    NoShow,
}

/// Plain RGB triple so the engine stays independent of any GUI toolkit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl LessonStatus {
    pub const ALL: [LessonStatus; 5] = [
        LessonStatus::Scheduled,
        LessonStatus::InProgress,
        LessonStatus::Completed,
        LessonStatus::Cancelled,
        LessonStatus::NoShow,
    ];

    /// Wire name, as used in the JSON feed.
    pub fn as_str(self) -> &'static str {
        match self {
            LessonStatus::Scheduled => "scheduled",
            LessonStatus::InProgress => "in-progress",
            LessonStatus::Completed => "completed",
            LessonStatus::Cancelled => "cancelled",
            LessonStatus::NoShow => "no-show",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            LessonStatus::Scheduled => "Scheduled",
            LessonStatus::InProgress => "In progress",
            LessonStatus::Completed => "Completed",
            LessonStatus::Cancelled => "Cancelled",
            LessonStatus::NoShow => "No-show",
        }
    }

    pub fn color(self) -> StatusColor {
        let (r, g, b) = match self {
            LessonStatus::Scheduled => (59, 130, 246),
            LessonStatus::InProgress => (234, 179, 8),
            LessonStatus::Completed => (34, 197, 94),
            LessonStatus::Cancelled => (239, 68, 68),
            LessonStatus::NoShow => (107, 114, 128),
        };
        StatusColor { r, g, b }
    }
}

impl fmt::Display for LessonStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for LessonStatus {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        LessonStatus::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CalendarError::UnknownStatus(s.to_string()))
    }
}
