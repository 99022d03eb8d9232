use chrono::NaiveDate;
use iced::Theme;
use iced_aw::date_picker::Date;

use driving_school_app::calendar::LessonRecord;

use crate::app::state::StatusFilterOption;

#[derive(Debug, Clone)]
pub enum Message {
    GoToCalendar,
    GoToSettings,
    //
    PreviousMonth,
    NextMonth,
    GoToToday,
    ChooseMonth,
    SubmitMonth(Date),
    CancelMonthPicker,
    //
    DaySelected(NaiveDate),
    LessonSelected(LessonRecord),
    CloseLessonDetails,
    //
    StatusFilterSelected(StatusFilterOption),
    StudentFilterChanged(String),
    ClearFilters,
    //
    ReloadLessons,
    LessonsLoaded(Result<Vec<LessonRecord>, String>),
    //
    ThemeSelected(Theme),
}
