//! Shared UI crate for Crop Helper: the navigation controller, the seven
//! screens and their sample data. The `mobile`, `web` and `desktop` crates
//! only launch [`AppShell`] with the theme stylesheet.

pub mod components;
pub mod core;
pub mod data;
pub mod i18n;
pub mod shell;
pub mod tasks;
pub mod views;

pub use shell::AppShell;

/// Mobile-first theme shared by every platform shell.
pub const THEME_CSS: &str = include_str!("../assets/theme/main.css");
