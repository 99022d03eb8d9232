use iced::{widget::{button, column}, Alignment, Element, Length, Theme};
use iced::widget::{text, vertical_space, Container, Row};
use iced_font_awesome::fa_icon_solid;
use crate::app::{Message, App};
use crate::app::state::Screen;

/// Solid font-awesome glyph drawn in the theme's text color.
pub fn themed_icon<'a>(name: &'a str, theme: &'a Theme) -> Element<'a, Message> {
    fa_icon_solid(name).style(move |_| text::base(theme)).into()
}

pub fn icon_label<'a>(icon: &'a str, label: &'a str, theme: &'a Theme) -> Row<'a, Message> {
    Row::new()
        .align_y(Alignment::Center)
        .spacing(5)
        .push(themed_icon(icon, theme))
        .push(text(label))
}

pub fn nav_menu(app: &App) -> Container<Message> {
    let on_calendar = app.current_screen == Screen::Calendar;
    let content = column![
        button(icon_label("calendar-days", "Lessons", &app.theme))
            .on_press_maybe((!on_calendar).then_some(Message::GoToCalendar))
            .width(Length::Fill),
        button(icon_label("rotate", "Reload", &app.theme))
            .on_press_maybe((!app.is_loading).then_some(Message::ReloadLessons))
            .width(Length::Fill),
        vertical_space(),
        button(icon_label("gear", "Settings", &app.theme))
            .on_press_maybe(on_calendar.then_some(Message::GoToSettings))
            .width(Length::Fill),
    ]
        .spacing(10);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(10)
}
