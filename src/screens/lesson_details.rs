use iced::{Alignment, Length};
use iced::widget::{button, horizontal_space, row, text, Column, Container, Scrollable};
use iced::widget::container::bordered_box;

use driving_school_app::calendar::{CalendarMonthView, LessonRecord};

use crate::app::{App, Message};
use crate::screens::calendar::status_color;
use crate::screens::nav_menu::themed_icon;

/// Side panel: lessons of the selected day and the selected lesson's card.
pub fn details_panel<'a>(app: &'a App, view: &CalendarMonthView) -> Container<'a, Message> {
    let mut column = Column::new().spacing(15);

    match app.selected_day {
        Some(date) => {
            column = column.push(text(date.format("%A, %d %B %Y").to_string()).size(20));

            match view.day(date).filter(|day| !day.lessons.is_empty()) {
                Some(day) => {
                    let list = day.lessons.iter().fold(Column::new().spacing(5), |list, lesson| {
                        list.push(
                            button(
                                row![
                                    text(display_time(lesson)).width(Length::Fixed(60.0)),
                                    text(lesson.student_name.clone()),
                                    horizontal_space(),
                                    text(lesson.status.label()).size(12).color(status_color(lesson.status)),
                                ]
                                    .spacing(8)
                                    .align_y(Alignment::Center),
                            )
                                .width(Length::Fill)
                                .style(button::secondary)
                                .on_press(Message::LessonSelected(lesson.clone())),
                        )
                    });
                    column = column.push(Scrollable::new(list).height(Length::FillPortion(1)));
                }
                None => {
                    column = column.push(text("No lessons on this day."));
                }
            }
        }
        None => {
            column = column.push(text("Select a day to see its lessons."));
        }
    }

    if let Some(lesson) = &app.selected_lesson {
        column = column.push(lesson_card(app, lesson));
    }

    Container::new(column)
        .height(Length::Fill)
        .padding(10)
        .style(move |_| bordered_box(&app.theme))
}

fn lesson_card<'a>(app: &'a App, lesson: &LessonRecord) -> Container<'a, Message> {
    let header = row![
        text(format!("Lesson #{}", lesson.id)).size(20),
        horizontal_space(),
        button(themed_icon("xmark", &app.theme))
            .on_press(Message::CloseLessonDetails),
    ]
        .align_y(Alignment::Center);

    let info = Column::new()
        .spacing(5)
        .push(text(format!("Student: {}", lesson.student_name)))
        .push(text(format!("Date: {}", lesson.date)))
        .push(text(format!("Time: {}", display_time(lesson))))
        .push(text(format!(
            "Instructor: {}",
            lesson.instructor_name.as_deref().unwrap_or("not assigned")
        )))
        .push(text(format!("Vehicle: {}", lesson.vehicle.as_deref().unwrap_or("not assigned"))))
        .push(text(format!("Status: {}", lesson.status)).color(status_color(lesson.status)));

    Container::new(Column::new().spacing(10).push(header).push(info))
        .width(Length::Fill)
        .padding(10)
        .style(move |_| bordered_box(&app.theme))
}

fn display_time(lesson: &LessonRecord) -> String {
    match lesson.time_of_day() {
        Some(time) => time.format("%H:%M").to_string(),
        None if lesson.time.trim().is_empty() => "--:--".to_string(),
        None => lesson.time.trim().to_string(),
    }
}
