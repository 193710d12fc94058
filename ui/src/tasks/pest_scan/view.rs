use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use futures_channel::mpsc::UnboundedSender;
use futures_util::StreamExt;

use crate::core::{format, platform, timing};
use crate::data::pests::{self, PestAnalysis};
use crate::t;

use super::engine::{ScanEngine, ScheduledAnalysis};

type SenderSlot = Rc<RefCell<Option<UnboundedSender<ScanEvent>>>>;

#[derive(Debug, Clone)]
enum ScanEvent {
    Capture,
    AnalysisReady { run_id: u64 },
    Reset,
}

#[component]
pub fn PestScanView() -> Element {
    let engine = use_signal(ScanEngine::default);
    let sender_slot: SenderSlot = use_hook(|| Rc::new(RefCell::new(None)));

    let coroutine = {
        let sender_slot = sender_slot.clone();
        use_coroutine(move |mut rx: UnboundedReceiver<ScanEvent>| {
            let sender_slot = sender_slot.clone();
            let mut engine = engine;

            async move {
                while let Some(event) = rx.next().await {
                    match event {
                        ScanEvent::Capture => {
                            let image = pests::data().sample_image.as_str();
                            if let Some(schedule) = engine.with_mut(|eng| eng.start(image)) {
                                tracing::debug!(run_id = schedule.run_id, "pest analysis started");
                                queue_completion(sender_slot.clone(), schedule);
                            }
                        }
                        ScanEvent::AnalysisReady { run_id } => {
                            let applied = engine
                                .with_mut(|eng| eng.complete(run_id, &pests::data().analysis));
                            if applied {
                                tracing::debug!(run_id, "pest analysis complete");
                            } else {
                                tracing::debug!(run_id, "dropping stale pest analysis");
                            }
                        }
                        ScanEvent::Reset => {
                            engine.with_mut(|eng| eng.reset());
                        }
                    }
                }
            }
        })
    };

    sender_slot.borrow_mut().replace(coroutine.tx());

    let snapshot = engine();

    match snapshot.image.clone() {
        None => rsx! {
            section { class: "card card--center",
                div { class: "card__icon-circle", "🐛" }
                h3 { class: "card__title", {t!("pest-identify-title")} }
                p { class: "text--muted",
                    "Take a clear photo of affected leaves or plants for accurate identification"
                }
                div { class: "stack",
                    button {
                        r#type: "button",
                        class: "button button--primary button--tall",
                        onclick: move |_| coroutine.send(ScanEvent::Capture),
                        "📷 "
                        {t!("pest-take-photo")}
                    }
                    button {
                        r#type: "button",
                        class: "button button--outline button--tall",
                        onclick: move |_| coroutine.send(ScanEvent::Capture),
                        "⬆ "
                        {t!("pest-upload")}
                    }
                }
                div { class: "alert alert--left",
                    span { class: "alert__icon", "⚠" }
                    span { "For best results, take photos in good lighting with clear focus on affected areas" }
                }
            }
        },
        Some(image) => rsx! {
            section { class: "card",
                div { class: "scan__preview",
                    img { class: "scan__image", src: "{image}", alt: "Uploaded plant image" }
                    if snapshot.is_analyzing() {
                        div { class: "scan__overlay",
                            span { class: "scan__pulse", "🔍" }
                            p { {t!("pest-analyzing")} }
                        }
                    }
                }

                if let Some(result) = snapshot.result() {
                    {render_result(result)}
                }

                button {
                    r#type: "button",
                    class: "button button--outline button--block",
                    onclick: move |_| coroutine.send(ScanEvent::Reset),
                    {t!("pest-analyze-another")}
                }
            }
        },
    }
}

fn render_result(result: &PestAnalysis) -> Element {
    let tone = result.severity.tone();
    rsx! {
        div { class: "scan__result",
            div { class: "row row--between",
                h3 { class: "scan__pest", "{result.pest}" }
                span { class: tone.badge_class(), "{result.severity.label()} Risk" }
            }
            div { class: "panel",
                div { class: "row row--between",
                    span { class: "text--label", "Confidence Level" }
                    span { class: "text--metric", "{format::format_percent(result.confidence)}" }
                }
                p { strong { "Description: " } "{result.description}" }
                p { strong { "Recommended Treatment: " } "{result.treatment}" }
                p { strong { "Urgency: " } "{result.urgency}" }
            }
            div { class: "grid grid--two",
                button { r#type: "button", class: "button button--outline", "🛡 Treatment Guide" }
                button { r#type: "button", class: "button button--primary", "🌿 Buy Treatment" }
            }
        }
    }
}

fn queue_completion(sender_slot: SenderSlot, schedule: ScheduledAnalysis) {
    if let Some(sender) = sender_slot.borrow().as_ref().cloned() {
        platform::spawn_future(async move {
            timing::sleep_ms(schedule.wait_ms).await;
            let _ = sender.unbounded_send(ScanEvent::AnalysisReady {
                run_id: schedule.run_id,
            });
        });
    }
}
