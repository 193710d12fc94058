//! Feedback form state: star rating, free text, simulated voice capture and
//! the transient thank-you card. Nothing leaves the device.

pub const RECORDING_DELAY_MS: u64 = 3_000;
pub const SUCCESS_DISPLAY_MS: u64 = 2_000;
pub const MAX_RATING: u8 = 5;

/// Text appended when a simulated voice capture finishes.
pub const VOICE_NOTE: &str = " Voice feedback recorded successfully.";

const RATING_CAPTIONS: [&str; 6] = [
    "Tap stars to rate",
    "Poor - Needs improvement",
    "Fair - Could be better",
    "Good - Satisfactory",
    "Very Good - Almost perfect",
    "Excellent - Loved it!",
];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedbackForm {
    /// 0 means unrated.
    pub rating: u8,
    pub text: String,
    recording: Option<u64>,
    success: Option<u64>,
    next_id: u64,
}

impl FeedbackForm {
    pub fn set_rating(&mut self, stars: u8) {
        self.rating = stars.min(MAX_RATING);
    }

    pub fn caption(&self) -> &'static str {
        RATING_CAPTIONS[usize::from(self.rating.min(MAX_RATING))]
    }

    pub fn can_submit(&self) -> bool {
        !self.text.trim().is_empty() || self.rating > 0
    }

    pub fn is_recording(&self) -> bool {
        self.recording.is_some()
    }

    pub fn show_success(&self) -> bool {
        self.success.is_some()
    }

    /// Start a capture, or stop the running one. Returns the id of a newly
    /// started capture; its completion must be delivered via
    /// [`finish_recording`](Self::finish_recording).
    pub fn toggle_recording(&mut self) -> Option<u64> {
        if self.recording.take().is_some() {
            return None;
        }
        let id = self.bump();
        self.recording = Some(id);
        Some(id)
    }

    /// Append the voice note for capture `id`. A capture stopped early
    /// contributes nothing.
    pub fn finish_recording(&mut self, id: u64) -> bool {
        if self.recording != Some(id) {
            return false;
        }
        self.recording = None;
        self.text.push_str(VOICE_NOTE);
        true
    }

    /// Show the thank-you card. Returns the id to clear it with once
    /// [`SUCCESS_DISPLAY_MS`] has elapsed, or `None` if there is nothing to send.
    pub fn submit(&mut self) -> Option<u64> {
        if !self.can_submit() {
            return None;
        }
        let id = self.bump();
        self.success = Some(id);
        Some(id)
    }

    /// Hide the thank-you card and clear the form, unless a newer submission
    /// has replaced submission `id`.
    pub fn clear_submitted(&mut self, id: u64) -> bool {
        if self.success != Some(id) {
            return false;
        }
        self.success = None;
        self.text.clear();
        self.rating = 0;
        true
    }

    fn bump(&mut self) -> u64 {
        self.next_id = self.next_id.wrapping_add(1);
        self.next_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captions_follow_rating() {
        let mut form = FeedbackForm::default();
        assert_eq!(form.caption(), "Tap stars to rate");
        form.set_rating(3);
        assert_eq!(form.caption(), "Good - Satisfactory");
        form.set_rating(9);
        assert_eq!(form.rating, 5);
        assert_eq!(form.caption(), "Excellent - Loved it!");
    }

    #[test]
    fn submit_requires_text_or_rating() {
        let mut form = FeedbackForm::default();
        assert!(!form.can_submit());
        assert!(form.submit().is_none());

        form.text = "   ".into();
        assert!(!form.can_submit());

        form.text = "Great prices tab".into();
        assert!(form.can_submit());

        form.text.clear();
        form.set_rating(1);
        assert!(form.can_submit());
    }

    #[test]
    fn submission_clears_after_display() {
        let mut form = FeedbackForm::default();
        form.text = "Useful".into();
        form.set_rating(4);

        let id = form.submit().unwrap();
        assert!(form.show_success());
        assert!(form.clear_submitted(id));
        assert!(!form.show_success());
        assert!(form.text.is_empty());
        assert_eq!(form.rating, 0);
    }

    #[test]
    fn newer_submission_outlives_older_timer() {
        let mut form = FeedbackForm::default();
        form.set_rating(2);
        let first = form.submit().unwrap();
        let second = form.submit().unwrap();
        assert!(!form.clear_submitted(first));
        assert!(form.show_success());
        assert!(form.clear_submitted(second));
    }

    #[test]
    fn finished_recording_appends_voice_note() {
        let mut form = FeedbackForm::default();
        form.text = "Soil tab".into();
        let id = form.toggle_recording().unwrap();
        assert!(form.is_recording());
        assert!(form.finish_recording(id));
        assert!(!form.is_recording());
        assert_eq!(form.text, format!("Soil tab{VOICE_NOTE}"));
    }

    #[test]
    fn stopping_early_discards_the_capture() {
        let mut form = FeedbackForm::default();
        let id = form.toggle_recording().unwrap();
        assert!(form.toggle_recording().is_none());
        assert!(!form.is_recording());
        assert!(!form.finish_recording(id));
        assert!(form.text.is_empty());
    }
}
