use chrono::NaiveDate;
use iced::Task;
use tracing::{debug, error, info, warn};

use driving_school_app::calendar::{Direction, NavTarget, invalid_records, jump};
use driving_school_app::config;
use driving_school_app::feed;

use crate::app::state::Screen;
use super::{App, Message};

impl App {
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::GoToCalendar => {
                self.current_screen = Screen::Calendar;
                Task::none()
            }
            Message::GoToSettings => {
                self.current_screen = Screen::Settings;
                Task::none()
            }
            Message::PreviousMonth => self.navigate_to(NavTarget::Step(Direction::Previous)),
            Message::NextMonth => self.navigate_to(NavTarget::Step(Direction::Next)),
            Message::GoToToday => {
                self.selected_day = Some(self.today);
                self.navigate_to(NavTarget::Today(self.today))
            }
            Message::ChooseMonth => {
                self.show_month_picker = true;
                Task::none()
            }
            Message::SubmitMonth(date) => {
                self.show_month_picker = false;
                match NaiveDate::from_ymd_opt(date.year, date.month, date.day) {
                    Some(picked) => {
                        self.selected_day = Some(picked);
                        self.navigate_to(NavTarget::Date(picked))
                    }
                    None => {
                        warn!(?date, "date picker returned an invalid date");
                        Task::none()
                    }
                }
            }
            Message::CancelMonthPicker => {
                self.show_month_picker = false;
                Task::none()
            }
            Message::DaySelected(date) => {
                self.selected_day = Some(date);
                self.selected_lesson = None;
                Task::none()
            }
            Message::LessonSelected(lesson) => {
                if let Some(day) = lesson.day() {
                    self.selected_day = Some(day);
                }
                self.selected_lesson = Some(lesson);
                Task::none()
            }
            Message::CloseLessonDetails => {
                self.selected_lesson = None;
                Task::none()
            }
            Message::StatusFilterSelected(option) => {
                self.filter.status = option.status();
                Task::none()
            }
            Message::StudentFilterChanged(value) => {
                self.filter.student = value;
                Task::none()
            }
            Message::ClearFilters => {
                self.filter = Default::default();
                Task::none()
            }
            Message::ReloadLessons => self.reload_lessons(),
            Message::LessonsLoaded(Ok(lessons)) => {
                self.is_loading = false;
                let skipped = invalid_records(&lessons);
                for lesson in &skipped {
                    warn!(id = lesson.id, date = %lesson.date, "lesson has an unreadable date, not shown");
                }
                info!(count = lessons.len(), skipped = skipped.len(), "lessons loaded");

                self.status_message = if skipped.is_empty() {
                    None
                } else {
                    Some(format!("{} lesson(s) skipped: unreadable date", skipped.len()))
                };
                self.lessons = lessons;
                if self
                    .selected_lesson
                    .as_ref()
                    .is_some_and(|selected| !self.lessons.contains(selected))
                {
                    self.selected_lesson = None;
                }
                Task::none()
            }
            Message::LessonsLoaded(Err(e)) => {
                self.is_loading = false;
                error!(error = %e, "failed to load lessons");
                self.status_message = Some(e);
                Task::none()
            }
            Message::ThemeSelected(theme) => {
                self.config.theme_name = theme.to_string();
                self.theme = theme;
                if let Err(e) = config::save_config_to(&self.config_path, &self.config) {
                    warn!(error = %e, path = %self.config_path.display(), "could not persist theme");
                }
                Task::none()
            }
        }
    }

    pub fn reload_lessons(&mut self) -> Task<Message> {
        self.is_loading = true;
        let path = self.config.lessons_file.clone();
        info!(path = %path.display(), "loading lessons");

        Task::perform(
            async move { feed::load_lessons(path).await.map_err(|e| e.to_string()) },
            Message::LessonsLoaded,
        )
    }

    fn navigate_to(&mut self, target: NavTarget) -> Task<Message> {
        match jump(self.reference_month, target) {
            Ok(month) => {
                debug!(from = %self.reference_month, to = %month, "calendar navigated");
                self.reference_month = month;
                self.selected_day = self.selected_day.filter(|day| month.contains(*day));
                self.selected_lesson = None;
            }
            Err(e) => {
                warn!(error = %e, "navigation rejected");
                self.status_message = Some(e.to_string());
            }
        }
        Task::none()
    }
}
