use std::path::PathBuf;

use chrono::NaiveDate;
use iced::Theme;

use driving_school_app::calendar::{LessonStatus, YearMonth};
use driving_school_app::config::{Config, load_config_from};
use driving_school_app::feed::parse_lessons;

use super::{App, Message};
use crate::app::state::StatusFilterOption;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn app_at(today: NaiveDate, config_path: PathBuf) -> App {
    App::from_config(Config::default(), config_path, today)
}

/// Two records sharing the serde default id of 0.
const FEED_WITHOUT_IDS: &str = r#"[
    {"date": "2025-11-07", "time": "09:00", "status": "scheduled", "studentName": "A"},
    {"date": "2025-11-10", "time": "11:00", "status": "completed", "studentName": "B"}
]"#;

fn loaded_app() -> App {
    let mut app = app_at(date(2025, 11, 7), PathBuf::from("unused.json"));
    let lessons = parse_lessons(FEED_WITHOUT_IDS).unwrap();
    let _ = app.update(Message::LessonsLoaded(Ok(lessons)));
    app
}

#[test]
fn clicked_lesson_is_selected_even_when_ids_collide() {
    let mut app = loaded_app();
    let second = app.lessons[1].clone();
    assert_eq!(app.lessons[0].id, second.id);

    let _ = app.update(Message::LessonSelected(second));

    let selected = app.selected_lesson.as_ref().unwrap();
    assert_eq!(selected.student_name, "B");
    assert_eq!(app.selected_day, Some(date(2025, 11, 10)));
}

#[test]
fn reload_drops_selection_that_no_longer_exists() {
    let mut app = loaded_app();
    let _ = app.update(Message::LessonSelected(app.lessons[0].clone()));

    let same = parse_lessons(FEED_WITHOUT_IDS).unwrap();
    let _ = app.update(Message::LessonsLoaded(Ok(same)));
    assert_eq!(app.selected_lesson.as_ref().map(|l| l.student_name.as_str()), Some("A"));

    let changed = parse_lessons(
        r#"[{"date": "2025-11-07", "time": "09:00", "status": "cancelled", "studentName": "A"}]"#,
    )
    .unwrap();
    let _ = app.update(Message::LessonsLoaded(Ok(changed)));
    assert!(app.selected_lesson.is_none());
}

#[test]
fn unreadable_dates_are_reported_not_fatal() {
    let mut app = app_at(date(2025, 11, 7), PathBuf::from("unused.json"));
    let lessons = parse_lessons(
        r#"[
            {"date": "2025-11-07", "status": "scheduled", "studentName": "A"},
            {"date": null, "status": "scheduled", "studentName": "B"}
        ]"#,
    )
    .unwrap();
    let _ = app.update(Message::LessonsLoaded(Ok(lessons)));

    assert_eq!(app.lessons.len(), 2);
    assert_eq!(app.month_view().lesson_count(), 1);
    assert_eq!(app.status_message.as_deref(), Some("1 lesson(s) skipped: unreadable date"));
}

#[test]
fn month_change_clears_selection_outside_new_month() {
    let mut app = loaded_app();
    let _ = app.update(Message::LessonSelected(app.lessons[0].clone()));
    assert_eq!(app.selected_day, Some(date(2025, 11, 7)));

    let _ = app.update(Message::NextMonth);
    assert_eq!(app.reference_month, YearMonth::new(2025, 11).unwrap());
    assert_eq!(app.selected_day, None);
    assert!(app.selected_lesson.is_none());

    let _ = app.update(Message::GoToToday);
    assert_eq!(app.reference_month, YearMonth::new(2025, 10).unwrap());
    assert_eq!(app.selected_day, Some(date(2025, 11, 7)));
}

#[test]
fn previous_month_wraps_into_prior_year() {
    let mut app = app_at(date(2025, 1, 15), PathBuf::from("unused.json"));
    let _ = app.update(Message::DaySelected(date(2025, 1, 20)));

    let _ = app.update(Message::PreviousMonth);
    assert_eq!(app.reference_month, YearMonth::new(2024, 11).unwrap());
    assert_eq!(app.selected_day, None);
}

#[test]
fn filters_narrow_the_month_view() {
    let mut app = loaded_app();
    assert_eq!(app.month_view().lesson_count(), 2);

    let _ = app.update(Message::StatusFilterSelected(StatusFilterOption::Only(
        LessonStatus::Completed,
    )));
    let view = app.month_view();
    assert_eq!(view.lesson_count(), 1);
    assert_eq!(view.day(date(2025, 11, 10)).unwrap().lessons[0].student_name, "B");

    let _ = app.update(Message::ClearFilters);
    assert_eq!(app.month_view().lesson_count(), 2);
}

#[test]
fn selected_theme_is_persisted() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    let mut app = app_at(date(2025, 11, 7), path.clone());

    let _ = app.update(Message::ThemeSelected(Theme::Nord));

    assert_eq!(app.theme, Theme::Nord);
    let saved = load_config_from(&path);
    assert_eq!(saved.theme_name, Theme::Nord.to_string());

    let reopened = App::from_config(saved, path, date(2025, 11, 7));
    assert_eq!(reopened.theme, Theme::Nord);
}
