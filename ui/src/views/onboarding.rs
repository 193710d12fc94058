use dioxus::prelude::*;

use crate::data::onboarding;
use crate::t;

const HERO_IMAGE: &str = "https://images.unsplash.com/photo-1622385161916-27f0c8746f4e?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&q=80&w=1080";

/// Welcome screen. A language must be picked before continuing; the choice is
/// only a label and is not carried past this screen.
#[component]
pub fn OnboardingScreen(on_complete: EventHandler<()>) -> Element {
    let mut selected = use_signal(String::new);
    let data = onboarding::data();
    let chosen = data.language(&selected()).map(|lang| lang.display_label());

    rsx! {
        section { class: "screen screen--onboarding",
            div { class: "hero",
                img { class: "hero__image", src: HERO_IMAGE, alt: "Farmer in field" }
                div { class: "hero__shade" }
                div { class: "hero__caption",
                    h1 { {t!("app-name")} }
                    p { {t!("app-tagline")} }
                }
            }

            section { class: "card card--accent",
                div { class: "card--center",
                    div { class: "card__icon-circle", "🌐" }
                    h2 { class: "card__title", {t!("onboarding-welcome")} }
                    p { class: "text--muted", {t!("onboarding-choose-language")} }
                }

                label { class: "field__label", r#for: "language-select",
                    "Select Language / भाषा चुनें"
                }
                select {
                    id: "language-select",
                    class: "input input--large",
                    value: "{selected()}",
                    onchange: move |evt: FormEvent| selected.set(evt.value()),
                    option { value: "", disabled: true, {t!("onboarding-language-placeholder")} }
                    for lang in data.languages.iter() {
                        option { key: "{lang.code}", value: "{lang.code}", "{lang.display_label()}" }
                    }
                }
                if let Some(label) = chosen.as_ref() {
                    p { class: "text--muted text--small", "✓ {label}" }
                }

                div { class: "note note--row",
                    span { class: "note__icon", "🔊" }
                    div {
                        p { class: "text--label", "Voice Support Available" }
                        p { class: "text--muted text--small", "Navigate using voice commands" }
                    }
                }

                button {
                    r#type: "button",
                    class: "button button--primary button--tall button--block",
                    disabled: chosen.is_none(),
                    onclick: move |_| on_complete.call(()),
                    {t!("onboarding-continue")}
                }
            }

            div { class: "grid grid--two feature-grid",
                for feature in data.features.iter() {
                    div { key: "{feature.label}", class: "feature-grid__item",
                        div { class: "feature-grid__icon", "{feature.icon}" }
                        p { class: "text--muted text--small", "{feature.label}" }
                    }
                }
            }
        }
    }
}
