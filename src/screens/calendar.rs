use chrono::Datelike;
use iced::{Alignment, Background, Border, Color, Element, Length, Theme};
use iced::widget::{
    button, container, horizontal_space, mouse_area, pick_list, row, text, text_input, Column,
    Container, Row, Space,
};
use iced::widget::container::bordered_box;
use iced_aw::date_picker;

use driving_school_app::calendar::{CalendarDay, CalendarMonthView, LessonRecord, LessonStatus, StatusColor};
use driving_school_app::feed::status_summary;

use crate::app::{App, Message};
use crate::app::state::StatusFilterOption;
use crate::screens::lesson_details::details_panel;
use crate::screens::nav_menu::{icon_label, themed_icon};

const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
/// Lesson chips drawn inside one cell before collapsing into "+N more".
const MAX_CHIPS: usize = 3;

pub fn status_color(status: LessonStatus) -> Color {
    let StatusColor { r, g, b } = status.color();
    Color::from_rgb8(r, g, b)
}

pub fn calendar_screen(app: &App) -> Container<Message> {
    let view = app.month_view();

    let main_column = Column::new()
        .spacing(15)
        .width(Length::FillPortion(3))
        .height(Length::Fill)
        .push(header(app, &view))
        .push(filters(app))
        .push(summary(&view))
        .push(grid(app, &view));

    let content = Row::new()
        .spacing(20)
        .push(main_column)
        .push(details_panel(app, &view).width(Length::FillPortion(1)));

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(20)
}

fn header<'a>(app: &'a App, view: &CalendarMonthView) -> Row<'a, Message> {
    let previous = button(themed_icon("chevron-left", &app.theme))
        .on_press(Message::PreviousMonth);
    let next = button(themed_icon("chevron-right", &app.theme))
        .on_press(Message::NextMonth);

    let picker_button = button(icon_label("calendar", "Pick month", &app.theme))
        .on_press(Message::ChooseMonth);
    let picker = date_picker(
        app.show_month_picker,
        date_picker::Date::from(view.reference_month.first_day()),
        picker_button,
        Message::CancelMonthPicker,
        Message::SubmitMonth,
    );

    let today_button = button(text("Today"))
        .on_press_maybe((!view.reference_month.contains(app.today)).then_some(Message::GoToToday));

    let mut header = row![previous, text(view.reference_month.to_string()).size(30), next]
        .spacing(10)
        .align_y(Alignment::Center)
        .push(horizontal_space());

    if app.is_loading {
        header = header.push(text("Loading lessons...").size(14));
    } else if let Some(message) = &app.status_message {
        header = header.push(text(message.clone()).size(14).color(Color::from_rgb8(204, 36, 29)));
    }

    header.push(today_button).push(picker)
}

fn filters(app: &App) -> Row<Message> {
    let status_picklist = pick_list(
        &StatusFilterOption::ALL[..],
        Some(StatusFilterOption::from(app.filter.status)),
        Message::StatusFilterSelected,
    );

    let search = text_input("Search student", &app.filter.student)
        .on_input(Message::StudentFilterChanged)
        .width(Length::Fixed(260.0));

    row![
        text("Status:"),
        status_picklist,
        search,
        button(text("Clear")).on_press_maybe(app.filter.is_active().then_some(Message::ClearFilters)),
    ]
        .spacing(10)
        .align_y(Alignment::Center)
}

fn summary<'a>(view: &CalendarMonthView) -> Row<'a, Message> {
    let counts = status_summary(view.month_lessons());

    LessonStatus::ALL.into_iter().fold(
        Row::new().spacing(15).align_y(Alignment::Center),
        |summary, status| {
            let count = counts.get(&status).copied().unwrap_or(0);
            summary.push(
                row![
                    container(Space::new(Length::Fixed(10.0), Length::Fixed(10.0))).style(move |_| container::background(status_color(status))),
                    text(format!("{status}: {count}")).size(14),
                ]
                    .spacing(5)
                    .align_y(Alignment::Center),
            )
        },
    )
}

fn grid<'a>(app: &'a App, view: &CalendarMonthView) -> Column<'a, Message> {
    let weekday_row = WEEKDAYS.into_iter().fold(Row::new().spacing(4), |row, name| {
        row.push(text(name).size(14).width(Length::Fill).align_x(Alignment::Center))
    });

    view.weeks().fold(
        Column::new().spacing(4).height(Length::Fill).push(weekday_row),
        |grid, week| {
            let cells = week
                .iter()
                .fold(Row::new().spacing(4).height(Length::FillPortion(1)), |row, day| {
                    row.push(day_cell(app, day))
                });
            grid.push(cells)
        },
    )
}

fn day_cell<'a>(app: &'a App, day: &CalendarDay) -> Element<'a, Message> {
    let date = day.date;
    let in_month = day.in_current_month;
    let is_today = day.is_today;
    let is_selected = app.selected_day == Some(date);

    let mut content = Column::new()
        .spacing(3)
        .push(text(date.day().to_string()).size(if is_today { 18 } else { 14 }));

    for lesson in day.lessons.iter().take(MAX_CHIPS) {
        content = content.push(lesson_chip(lesson));
    }
    if day.lessons.len() > MAX_CHIPS {
        content = content.push(text(format!("+{} more", day.lessons.len() - MAX_CHIPS)).size(12));
    }

    let cell = Container::new(content)
        .padding(5)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(move |theme: &Theme| day_cell_style(theme, in_month, is_today, is_selected));

    mouse_area(cell).on_press(Message::DaySelected(date)).into()
}

fn lesson_chip<'a>(lesson: &LessonRecord) -> Element<'a, Message> {
    let color = status_color(lesson.status);
    let label = if lesson.time.trim().is_empty() {
        lesson.student_name.clone()
    } else {
        format!("{} {}", lesson.time.trim(), lesson.student_name)
    };

    button(text(label).size(12))
        .padding([1, 4])
        .width(Length::Fill)
        .on_press(Message::LessonSelected(lesson.clone()))
        .style(move |_, _| button::Style {
            background: Some(Background::Color(color)),
            text_color: Color::WHITE,
            border: Border {
                radius: 4.0.into(),
                ..Border::default()
            },
            ..button::Style::default()
        })
        .into()
}

fn day_cell_style(theme: &Theme, in_month: bool, is_today: bool, is_selected: bool) -> container::Style {
    let palette = theme.extended_palette();
    let mut style = bordered_box(theme);

    if !in_month {
        style.text_color = Some(palette.background.strong.color);
    }
    if is_selected {
        style.background = Some(Background::Color(palette.background.weak.color));
    }
    if is_today {
        style.border = Border {
            color: palette.primary.strong.color,
            width: 2.0,
            radius: style.border.radius,
        };
    }
    style
}
