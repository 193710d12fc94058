use dioxus::prelude::*;

use crate::components::ScreenHeader;
use crate::core::navigation::Screen;
use crate::data::pests::{self, Detection};
use crate::tasks::pest_scan::PestScanView;
use crate::t;

use super::dashboard::screen_title;

#[component]
pub fn PestDetectionScreen(on_back: EventHandler<()>) -> Element {
    let data = pests::data();

    rsx! {
        section { class: "screen",
            ScreenHeader {
                title: screen_title(Screen::PestDetection),
                subtitle: t!("pest-subtitle"),
                on_back: move |_| on_back.call(()),
            }

            div { class: "screen__body stack",
                PestScanView {}

                section { class: "card",
                    h2 { class: "card__title", {t!("pest-recent")} }
                    div { class: "stack",
                        for detection in data.recent.iter() {
                            {render_detection(detection)}
                        }
                    }
                }

                section { class: "card card--sky",
                    h3 { class: "card__title", "📷 Photography Tips" }
                    ul { class: "tips",
                        for tip in data.tips.iter() {
                            li { key: "{tip}", "{tip}" }
                        }
                    }
                }
            }
        }
    }
}

fn render_detection(detection: &Detection) -> Element {
    rsx! {
        div { key: "{detection.pest}-{detection.date}", class: "list-row row row--between",
            div {
                div { class: "row",
                    h4 { class: "text--label", "{detection.pest}" }
                    span { class: detection.severity.tone().badge_class(), "{detection.severity.label()}" }
                }
                p { class: "text--muted text--small", "{detection.summary_line()}" }
            }
            span { class: "status",
                "{detection.status.icon()} {detection.status.label()}"
            }
        }
    }
}
