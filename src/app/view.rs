use iced::Length;
use iced::widget::{Container, Row};
use crate::app::state::Screen;
use crate::screens::{calendar_screen, nav_menu, settings_screen};
use super::{App, Message};

impl App {
    pub fn view(&self) -> Row<Message> {
        Row::new()
            .spacing(20)
            .push(
                Container::new(nav_menu(self))
                    .width(Length::Fixed(200.0))
                    .height(Length::Fill)
                    .padding(10)
            )
            .push(
                match &self.current_screen {
                    Screen::Calendar => calendar_screen(self),
                    Screen::Settings => settings_screen(self),
                }
                    .width(Length::Fill),
            )
    }
}
