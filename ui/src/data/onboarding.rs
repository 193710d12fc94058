//! Languages offered on the welcome screen.

use once_cell::sync::Lazy;
use serde::Deserialize;

use super::decode;

const RAW: &str = include_str!("../../assets/data/onboarding.json");

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct OnboardingData {
    pub languages: Vec<Language>,
    pub features: Vec<FeaturePreview>,
}

/// A selectable language. The choice is shown as a label only.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Language {
    pub code: String,
    pub name: String,
    pub native: String,
}

impl Language {
    pub fn display_label(&self) -> String {
        if self.native == self.name {
            self.native.clone()
        } else {
            format!("{} ({})", self.native, self.name)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FeaturePreview {
    pub icon: String,
    pub label: String,
}

static DATA: Lazy<OnboardingData> = Lazy::new(|| decode("onboarding", RAW));

pub fn data() -> &'static OnboardingData {
    &DATA
}

impl OnboardingData {
    pub fn language(&self, code: &str) -> Option<&Language> {
        self.languages.iter().find(|lang| lang.code == code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::try_decode;

    #[test]
    fn embedded_data_decodes() {
        let data: OnboardingData = try_decode("onboarding", RAW).unwrap();
        assert_eq!(data.languages.len(), 8);
        assert_eq!(data.features.len(), 4);
    }

    #[test]
    fn labels_show_native_and_english_names() {
        let hindi = data().language("hi").unwrap();
        assert_eq!(hindi.display_label(), "हिन्दी (Hindi)");
        assert_eq!(data().language("en").unwrap().display_label(), "English");
        assert!(data().language("xx").is_none());
    }
}
