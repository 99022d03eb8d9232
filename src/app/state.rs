use std::borrow::Cow;
use std::fmt;
use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use iced::{Task, Theme};
use tracing::warn;

use driving_school_app::calendar::{
    CalendarMonthView, LessonRecord, LessonStatus, YearMonth, build_month_view,
};
use driving_school_app::config::{self, CONFIG_FILE, Config};
use driving_school_app::feed::LessonFilter;

use crate::screens::settings::theme_from_str;
use super::Message;

pub struct App {
    pub current_screen: Screen,
    pub theme: Theme,
    pub config: Config,
    pub config_path: PathBuf,
    //
    pub today: NaiveDate,
    pub reference_month: YearMonth,
    pub show_month_picker: bool,
    //
    pub lessons: Vec<LessonRecord>,
    pub filter: LessonFilter,
    pub selected_day: Option<NaiveDate>,
    pub selected_lesson: Option<LessonRecord>,
    //
    pub is_loading: bool,
    pub status_message: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Calendar,
    Settings,
}

impl App {
    pub fn new() -> (Self, Task<Message>) {
        let mut app = Self::from_config(
            config::load_config(),
            PathBuf::from(CONFIG_FILE),
            Local::now().date_naive(),
        );
        let task = app.reload_lessons();
        (app, task)
    }

    pub fn from_config(config: Config, config_path: PathBuf, today: NaiveDate) -> Self {
        let theme = theme_from_str(&config.theme_name).unwrap_or(Theme::Light);
        let reference_month = YearMonth::from_date(today).unwrap_or_else(|e| {
            warn!(error = %e, "system date outside calendar range");
            YearMonth::default()
        });

        Self {
            current_screen: Screen::default(),
            theme,
            config,
            config_path,
            today,
            reference_month,
            show_month_picker: false,
            lessons: Vec::new(),
            filter: LessonFilter::default(),
            selected_day: Some(today),
            selected_lesson: None,
            is_loading: false,
            status_message: None,
        }
    }

    /// Recomputed on every render from the filtered lessons.
    pub fn month_view(&self) -> CalendarMonthView {
        let lessons: Cow<'_, [LessonRecord]> = if self.filter.is_active() {
            Cow::Owned(self.filter.apply(&self.lessons))
        } else {
            Cow::Borrowed(&self.lessons)
        };
        build_month_view(self.reference_month, &lessons, self.today)
    }
}

/// Pick-list entry for the status filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilterOption {
    All,
    Only(LessonStatus),
}

impl StatusFilterOption {
    pub const ALL: [StatusFilterOption; 6] = [
        StatusFilterOption::All,
        StatusFilterOption::Only(LessonStatus::Scheduled),
        StatusFilterOption::Only(LessonStatus::InProgress),
        StatusFilterOption::Only(LessonStatus::Completed),
        StatusFilterOption::Only(LessonStatus::Cancelled),
        StatusFilterOption::Only(LessonStatus::NoShow),
    ];

    pub fn status(self) -> Option<LessonStatus> {
        match self {
            StatusFilterOption::All => None,
            StatusFilterOption::Only(status) => Some(status),
        }
    }
}

impl From<Option<LessonStatus>> for StatusFilterOption {
    fn from(status: Option<LessonStatus>) -> Self {
        status.map_or(StatusFilterOption::All, StatusFilterOption::Only)
    }
}

impl fmt::Display for StatusFilterOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusFilterOption::All => write!(f, "All statuses"),
            StatusFilterOption::Only(status) => write!(f, "{status}"),
        }
    }
}
