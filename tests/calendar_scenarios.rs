use chrono::NaiveDate;
use driving_school_app::calendar::{
    CalendarError, Direction, LessonStatus, NavTarget, YearMonth, build_month_view, jump, navigate,
};
use driving_school_app::feed::{LessonFilter, parse_lessons, status_summary};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn navigation_wraps_year_boundaries() {
    let january = YearMonth::new(2025, 0).unwrap();
    let december = YearMonth::new(2025, 11).unwrap();

    let previous = navigate(january, Direction::Previous);
    assert_eq!((previous.year(), previous.month0()), (2024, 11));

    let next = navigate(december, Direction::Next);
    assert_eq!((next.year(), next.month0()), (2026, 0));
}

#[test]
fn offsets_other_than_one_step_are_rejected() {
    assert_eq!(Direction::from_offset(-2), Err(CalendarError::InvalidDirection(-2)));
    let step = Direction::from_offset(-1).unwrap();
    let month = jump(YearMonth::new(2025, 0).unwrap(), NavTarget::Step(step)).unwrap();
    assert_eq!(month, YearMonth::new(2024, 11).unwrap());
}

#[test]
fn invalid_reference_month_is_an_error() {
    assert_eq!(YearMonth::new(2025, 12), Err(CalendarError::InvalidMonth(12)));
}

#[test]
fn november_2025_grid() {
    let month = YearMonth::new(2025, 10).unwrap();
    let view = build_month_view(month, &[], date(2025, 11, 7));

    assert_eq!(view.days[0].date, date(2025, 10, 26));
    assert_eq!(view.days[6].date, date(2025, 11, 1));
    assert!(!view.days[5].in_current_month);
    assert!(view.days[6].in_current_month);

    let today: Vec<_> = view.days.iter().filter(|d| d.is_today).collect();
    assert_eq!(today.len(), 1);
    assert_eq!(today[0].date, date(2025, 11, 7));
}

#[test]
fn today_outside_window_marks_nothing() {
    let month = YearMonth::new(2025, 10).unwrap();
    let view = build_month_view(month, &[], date(2026, 3, 1));
    assert!(view.days.iter().all(|d| !d.is_today));
}

#[test]
fn leap_february_has_29_current_days() {
    let month = YearMonth::new(2024, 1).unwrap();
    let view = build_month_view(month, &[], date(2024, 2, 29));
    assert_eq!(view.days.iter().filter(|d| d.in_current_month).count(), 29);
    assert!(view.day(date(2024, 2, 29)).unwrap().is_today);
}

#[test]
fn saturday_start_month_is_cut_at_six_weeks() {
    // August 2026 starts on a Saturday: 6 leading days + 31 = 37 cells, so the
    // grid ends on Saturday, September 5.
    let month = YearMonth::new(2026, 7).unwrap();
    let view = build_month_view(month, &[], date(2026, 8, 1));
    assert_eq!(view.days[6].date, date(2026, 8, 1));
    assert_eq!(view.grid_end(), date(2026, 9, 5));
}

#[test]
fn filtered_feed_flows_into_the_grid() {
    let lessons = parse_lessons(
        r#"[
            {"id": 10, "date": "2025-11-07T15:00:00Z", "time": "15:00", "status": "scheduled", "studentName": "Ana Ruiz"},
            {"id": 11, "date": "2025-11-07", "time": "09:00", "status": "cancelled", "studentName": "Ben Ode"},
            {"id": 12, "date": "2025-11-07", "time": "08:00", "status": "scheduled", "studentName": "Ben Ode"},
            {"id": 13, "date": "07.11.2025", "time": "08:00", "status": "scheduled", "studentName": "Ana Ruiz"}
        ]"#,
    )
    .unwrap();
    let month = YearMonth::new(2025, 10).unwrap();
    let today = date(2025, 11, 7);

    let all = build_month_view(month, &lessons, today);
    let day = all.day(today).unwrap();
    assert_eq!(day.lessons.iter().map(|l| l.id).collect::<Vec<_>>(), vec![12, 11, 10]);

    let filter = LessonFilter {
        status: Some(LessonStatus::Scheduled),
        student: String::new(),
    };
    let filtered = build_month_view(month, &filter.apply(&lessons), today);
    let day = filtered.day(today).unwrap();
    assert_eq!(day.lessons.iter().map(|l| l.id).collect::<Vec<_>>(), vec![12, 10]);

    let summary = status_summary(all.month_lessons());
    assert_eq!(summary.get(&LessonStatus::Scheduled), Some(&2));
    assert_eq!(summary.get(&LessonStatus::Cancelled), Some(&1));
}
