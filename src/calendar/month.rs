use std::fmt;

use chrono::{Datelike, NaiveDate};

use super::error::{CalendarError, CalendarResult};

pub const MIN_YEAR: i32 = 1;
pub const MAX_YEAR: i32 = 9999;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// The month shown by the calendar grid.
///
/// Months are indexed from 0 (January) to 11 (December). The value is only
/// constructible through validated paths, so the first day always exists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct YearMonth {
    first: NaiveDate,
}

impl YearMonth {
    pub fn new(year: i32, month0: u32) -> CalendarResult<Self> {
        if month0 > 11 {
            return Err(CalendarError::InvalidMonth(month0));
        }
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(CalendarError::InvalidYear(year));
        }
        NaiveDate::from_ymd_opt(year, month0 + 1, 1)
            .map(|first| Self { first })
            .ok_or(CalendarError::InvalidYear(year))
    }

    /// Month containing `date`.
    pub fn from_date(date: NaiveDate) -> CalendarResult<Self> {
        Self::new(date.year(), date.month0())
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    pub fn month0(&self) -> u32 {
        self.first.month0()
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first
    }

    pub fn days_in_month(&self) -> u32 {
        match self.first.month() {
            1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
            4 | 6 | 9 | 11 => 30,
            _ if NaiveDate::from_ymd_opt(self.year(), 2, 29).is_some() => 29,
            _ => 28,
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year() && date.month0() == self.month0()
    }

    pub fn name(&self) -> &'static str {
        MONTH_NAMES[self.month0() as usize]
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name(), self.year())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

impl Direction {
    /// Accepts the `-1` / `+1` offsets used by navigation buttons.
    pub fn from_offset(offset: i32) -> CalendarResult<Self> {
        match offset {
            -1 => Ok(Direction::Previous),
            1 => Ok(Direction::Next),
            other => Err(CalendarError::InvalidDirection(other)),
        }
    }

    pub fn offset(self) -> i32 {
        match self {
            Direction::Previous => -1,
            Direction::Next => 1,
        }
    }
}

/// Where a navigation request should land.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTarget {
    Step(Direction),
    /// Jump back to the month of the host-supplied "today".
    Today(NaiveDate),
    /// Jump to the month of an arbitrary date (month picker).
    Date(NaiveDate),
}

/// Month before or after `month`, wrapping across year boundaries.
///
/// Stepping past [`MIN_YEAR`] / [`MAX_YEAR`] leaves the month unchanged.
pub fn navigate(month: YearMonth, direction: Direction) -> YearMonth {
    let index = i64::from(month.year()) * 12 + i64::from(month.month0()) + i64::from(direction.offset());
    let year = index.div_euclid(12);
    let month0 = index.rem_euclid(12);

    match i32::try_from(year) {
        Ok(year) => YearMonth::new(year, month0 as u32).unwrap_or(month),
        Err(_) => month,
    }
}

pub fn jump(month: YearMonth, target: NavTarget) -> CalendarResult<YearMonth> {
    match target {
        NavTarget::Step(direction) => Ok(navigate(month, direction)),
        NavTarget::Today(date) | NavTarget::Date(date) => YearMonth::from_date(date),
    }
}
