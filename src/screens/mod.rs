pub mod calendar;
pub mod lesson_details;
pub mod nav_menu;
pub mod settings;

pub use calendar::calendar_screen;
pub use nav_menu::nav_menu;
pub use settings::settings_screen;
