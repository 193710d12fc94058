//! Help resources, FAQs and support channels for the help & feedback screen.

use once_cell::sync::Lazy;
use serde::Deserialize;

use super::decode;

const RAW: &str = include_str!("../../assets/data/support.json");

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SupportData {
    pub faqs: Vec<Faq>,
    pub resources: Vec<HelpResource>,
    pub channels: Vec<SupportChannel>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Faq {
    pub question: String,
    pub answer: String,
    pub category: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Guide,
    Video,
    Reference,
}

impl ResourceKind {
    pub fn icon(self) -> &'static str {
        match self {
            ResourceKind::Guide => "📖",
            ResourceKind::Video => "🎬",
            ResourceKind::Reference => "🔊",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HelpResource {
    pub title: String,
    pub description: String,
    pub kind: ResourceKind,
    pub duration: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Medium {
    Chat,
    Phone,
    Email,
}

impl Medium {
    pub fn icon(self) -> &'static str {
        match self {
            Medium::Chat => "💬",
            Medium::Phone => "📞",
            Medium::Email => "✉️",
        }
    }

    pub fn css_modifier(self) -> &'static str {
        match self {
            Medium::Chat => "channel__icon--chat",
            Medium::Phone => "channel__icon--phone",
            Medium::Email => "channel__icon--email",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SupportChannel {
    pub name: String,
    pub medium: Medium,
    pub contact: String,
    pub hours: String,
}

static DATA: Lazy<SupportData> = Lazy::new(|| decode("support", RAW));

pub fn data() -> &'static SupportData {
    &DATA
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::try_decode;

    #[test]
    fn embedded_data_decodes() {
        let data: SupportData = try_decode("support", RAW).unwrap();
        assert_eq!(data.faqs.len(), 5);
        assert_eq!(data.resources.len(), 3);
        assert_eq!(data.channels.len(), 3);
    }

    #[test]
    fn every_channel_has_a_contact() {
        assert!(data().channels.iter().all(|c| !c.contact.trim().is_empty()));
        assert_eq!(data().channels[0].medium, Medium::Chat);
    }
}
