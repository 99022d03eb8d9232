//! Month-grid engine for the lesson-scheduling view.
//!
//! Everything here is a pure function of its inputs: the host keeps the
//! reference month and the lesson list, supplies "today", and rebuilds the
//! [`CalendarMonthView`] whenever one of them changes.

pub mod error;
pub mod grid;
pub mod lesson;
pub mod month;
pub mod status;

pub use error::{CalendarError, CalendarResult};
pub use grid::{
    CalendarDay, CalendarMonthView, DAYS_IN_WEEK, DateBuckets, GRID_DAYS, bucket_by_date,
    build_month_view, invalid_records,
};
pub use lesson::{LessonRecord, TimeKey};
pub use month::{Direction, MAX_YEAR, MIN_YEAR, NavTarget, YearMonth, jump, navigate};
pub use status::{LessonStatus, StatusColor};
