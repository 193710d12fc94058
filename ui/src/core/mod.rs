pub mod format;
pub mod navigation;
pub mod platform;
pub mod timing;
