use dioxus::prelude::*;

use crate::components::{ScreenHeader, TabBar};
use crate::core::navigation::Screen;
use crate::data::support::{self, Faq, HelpResource, SupportChannel};
use crate::tasks::feedback::FeedbackFormView;
use crate::t;

use super::dashboard::screen_title;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SupportTab {
    Feedback,
    Help,
    Contact,
}

impl SupportTab {
    const ALL: [SupportTab; 3] = [SupportTab::Feedback, SupportTab::Help, SupportTab::Contact];

    fn label(self) -> String {
        match self {
            SupportTab::Feedback => t!("support-tab-feedback"),
            SupportTab::Help => t!("support-tab-help"),
            SupportTab::Contact => t!("support-tab-contact"),
        }
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|tab| *tab == self).unwrap_or(0)
    }
}

/// Help & feedback. Nothing entered here leaves the component.
#[component]
pub fn FeedbackScreen(on_back: EventHandler<()>) -> Element {
    let mut tab = use_signal(|| SupportTab::Feedback);

    rsx! {
        section { class: "screen",
            ScreenHeader {
                title: screen_title(Screen::Feedback),
                subtitle: t!("support-subtitle"),
                on_back: move |_| on_back.call(()),
            }

            div { class: "screen__body stack",
                TabBar {
                    labels: SupportTab::ALL.iter().map(|t| t.label()).collect::<Vec<_>>(),
                    active: tab().index(),
                    on_select: move |index: usize| {
                        if let Some(next) = SupportTab::ALL.get(index) {
                            tab.set(*next);
                        }
                    },
                }

                {match tab() {
                    SupportTab::Feedback => rsx! { FeedbackFormView {} },
                    SupportTab::Help => rsx! { HelpPanel {} },
                    SupportTab::Contact => rsx! { ContactPanel {} },
                }}
            }
        }
    }
}

#[component]
fn HelpPanel() -> Element {
    let data = support::data();
    rsx! {
        div { class: "stack stack--loose",
            section { class: "card",
                h2 { class: "card__title", {t!("support-resources")} }
                div { class: "stack",
                    for resource in data.resources.iter() {
                        {render_resource(resource)}
                    }
                }
            }
            section { class: "card",
                h2 { class: "card__title", {t!("support-faq")} }
                div { class: "stack",
                    for faq in data.faqs.iter() {
                        {render_faq(faq)}
                    }
                }
            }
        }
    }
}

#[component]
fn ContactPanel() -> Element {
    let mut subject = use_signal(String::new);
    let mut message = use_signal(String::new);
    let data = support::data();

    rsx! {
        div { class: "stack stack--loose",
            section { class: "card",
                h2 { class: "card__title", {t!("support-contact")} }
                div { class: "stack",
                    for channel in data.channels.iter() {
                        {render_channel(channel)}
                    }
                }
            }

            section { class: "card card--critical",
                h3 { class: "card__title text--critical", "🚨 Emergency Support" }
                p { class: "text--small",
                    "For urgent crop disease outbreaks or severe weather damage, call our 24/7 emergency line."
                }
                button { r#type: "button", class: "button button--danger button--block", "📞 Emergency: 1800-XXX-HELP" }
            }

            section { class: "card",
                h2 { class: "card__title", {t!("support-message-title")} }
                input {
                    class: "input",
                    placeholder: "Subject",
                    value: "{subject()}",
                    oninput: move |evt: FormEvent| subject.set(evt.value()),
                }
                textarea {
                    class: "input input--area",
                    placeholder: "Describe your issue or question...",
                    value: "{message()}",
                    oninput: move |evt: FormEvent| message.set(evt.value()),
                }
                button {
                    r#type: "button",
                    class: "button button--primary button--block",
                    disabled: message().trim().is_empty(),
                    {t!("support-send")}
                }
            }
        }
    }
}

fn render_resource(resource: &HelpResource) -> Element {
    rsx! {
        div { key: "{resource.title}", class: "list-row row",
            span { class: "list-row__icon", "{resource.kind.icon()}" }
            div { class: "grow",
                h4 { class: "text--label", "{resource.title}" }
                p { class: "text--muted text--small", "{resource.description}" }
            }
            span { class: "badge badge--neutral", "{resource.duration}" }
        }
    }
}

fn render_faq(faq: &Faq) -> Element {
    rsx! {
        details { key: "{faq.question}", class: "faq",
            summary { class: "faq__question", "{faq.question}" }
            p { class: "faq__answer text--muted", "{faq.answer}" }
            span { class: "badge badge--neutral", "{faq.category}" }
        }
    }
}

fn render_channel(channel: &SupportChannel) -> Element {
    rsx! {
        div { key: "{channel.name}", class: "list-row row",
            span { class: "channel__icon {channel.medium.css_modifier()}", "{channel.medium.icon()}" }
            div { class: "grow",
                h4 { class: "text--label", "{channel.name}" }
                p { class: "text--small", "{channel.contact}" }
                p { class: "text--muted text--small", "{channel.hours}" }
            }
        }
    }
}
