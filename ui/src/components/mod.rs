pub mod screen_header;
pub mod tab_bar;

pub use screen_header::ScreenHeader;
pub use tab_bar::TabBar;
