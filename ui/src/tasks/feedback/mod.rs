pub mod form;
pub mod view;

pub use form::{FeedbackForm, RECORDING_DELAY_MS, SUCCESS_DISPLAY_MS, VOICE_NOTE};
pub use view::FeedbackFormView;
