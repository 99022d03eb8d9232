use iced::{widget::{column, text, Container, Space}, Length, Center, Theme};
use iced::widget::{button, pick_list};
use iced::widget::container::bordered_box;
use crate::app::{App, Message};

pub fn settings_screen(app: &App) -> Container<Message> {
    let feed_info = column![
        text("Lesson feed").size(20),
        text(format!("File: {}", app.config.lessons_file.display())),
        text(format!("Lessons loaded: {}", app.lessons.len())),
        button("Reload lessons").on_press_maybe((!app.is_loading).then_some(Message::ReloadLessons)),
    ]
        .spacing(10);

    let content = column![
        text("Settings").size(30),
        pick_list(Theme::ALL, Some(&app.theme), Message::ThemeSelected)
            .placeholder("Choose a theme"),
        Space::with_height(20),
        Container::new(feed_info)
            .style(move |_| bordered_box(&app.theme))
            .padding(15),
    ]
        .spacing(15)
        .align_x(Center);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(40)
}

/// Looks a theme up by its display name, ignoring case and spaces, so both
/// "Tokyo Night Storm" and "TokyoNightStorm" resolve.
pub fn theme_from_str(name: &str) -> Option<Theme> {
    let wanted = compact(name);
    Theme::ALL
        .iter()
        .find(|theme| compact(&theme.to_string()) == wanted)
        .cloned()
}

fn compact(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_names_round_trip() {
        for theme in Theme::ALL {
            assert_eq!(theme_from_str(&theme.to_string()).as_ref(), Some(theme));
        }
    }

    #[test]
    fn theme_lookup_ignores_case_and_spacing() {
        assert_eq!(theme_from_str("nord"), Some(Theme::Nord));
        assert_eq!(theme_from_str("TokyoNightStorm"), Some(Theme::TokyoNightStorm));
        assert_eq!(theme_from_str("Solarized"), None);
    }
}
