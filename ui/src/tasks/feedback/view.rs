use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use futures_channel::mpsc::UnboundedSender;
use futures_util::StreamExt;

use crate::core::{platform, timing};
use crate::t;

use super::form::{FeedbackForm, MAX_RATING, RECORDING_DELAY_MS, SUCCESS_DISPLAY_MS};

type SenderSlot = Rc<RefCell<Option<UnboundedSender<FeedbackEvent>>>>;

#[derive(Debug, Clone)]
enum FeedbackEvent {
    ToggleRecording,
    RecordingDone { id: u64 },
    Submit,
    SuccessElapsed { id: u64 },
}

#[component]
pub fn FeedbackFormView() -> Element {
    let mut form = use_signal(FeedbackForm::default);
    let sender_slot: SenderSlot = use_hook(|| Rc::new(RefCell::new(None)));

    let coroutine = {
        let sender_slot = sender_slot.clone();
        use_coroutine(move |mut rx: UnboundedReceiver<FeedbackEvent>| {
            let sender_slot = sender_slot.clone();
            let mut form = form;

            async move {
                while let Some(event) = rx.next().await {
                    match event {
                        FeedbackEvent::ToggleRecording => {
                            if let Some(id) = form.with_mut(|f| f.toggle_recording()) {
                                tracing::debug!(id, "voice capture started");
                                queue(
                                    sender_slot.clone(),
                                    RECORDING_DELAY_MS,
                                    FeedbackEvent::RecordingDone { id },
                                );
                            }
                        }
                        FeedbackEvent::RecordingDone { id } => {
                            if form.with_mut(|f| f.finish_recording(id)) {
                                tracing::debug!(id, "voice capture finished");
                            }
                        }
                        FeedbackEvent::Submit => {
                            if let Some(id) = form.with_mut(|f| f.submit()) {
                                tracing::info!("feedback submitted");
                                queue(
                                    sender_slot.clone(),
                                    SUCCESS_DISPLAY_MS,
                                    FeedbackEvent::SuccessElapsed { id },
                                );
                            }
                        }
                        FeedbackEvent::SuccessElapsed { id } => {
                            form.with_mut(|f| f.clear_submitted(id));
                        }
                    }
                }
            }
        })
    };

    sender_slot.borrow_mut().replace(coroutine.tx());

    let snapshot = form();
    let recording = snapshot.is_recording();
    let record_class = if recording {
        "button button--outline button--tall button--recording"
    } else {
        "button button--outline button--tall"
    };

    rsx! {
        div { class: "stack stack--loose",
            if snapshot.show_success() {
                section { class: "card card--center card--success",
                    div { class: "card__icon", "👍" }
                    h3 { class: "text--positive", {t!("feedback-thanks")} }
                    p { class: "text--positive", "Your feedback has been submitted successfully." }
                }
            }

            section { class: "card",
                h2 { class: "card__title", {t!("feedback-rate-title")} }
                div { class: "rating",
                    div { class: "rating__stars", role: "radiogroup",
                        for star in 1..=MAX_RATING {
                            button {
                                key: "{star}",
                                r#type: "button",
                                class: star_class(star <= snapshot.rating),
                                aria_label: "{star} stars",
                                onclick: move |_| form.with_mut(|f| f.set_rating(star)),
                                "★"
                            }
                        }
                    }
                    p { class: "text--muted", "{snapshot.caption()}" }
                }
            }

            section { class: "card",
                h2 { class: "card__title", {t!("feedback-share-title")} }
                textarea {
                    class: "input input--area",
                    placeholder: "Tell us about your experience, suggestions for improvement, or report any issues...",
                    value: "{snapshot.text}",
                    oninput: move |evt: FormEvent| form.with_mut(|f| f.text = evt.value()),
                }
                div { class: "row",
                    button {
                        r#type: "button",
                        class: record_class,
                        onclick: move |_| coroutine.send(FeedbackEvent::ToggleRecording),
                        "🎤 "
                        if recording {
                            {t!("feedback-recording")}
                        } else {
                            {t!("feedback-voice")}
                        }
                    }
                    button {
                        r#type: "button",
                        class: "button button--primary button--tall",
                        disabled: !snapshot.can_submit(),
                        onclick: move |_| coroutine.send(FeedbackEvent::Submit),
                        "➤ "
                        {t!("feedback-submit")}
                    }
                }
                div { class: "note",
                    h4 { "🔊 Voice Support Available" }
                    p { class: "text--muted",
                        "You can provide feedback using voice commands. Say \"Record feedback\" to start."
                    }
                }
            }

            section { class: "card",
                h2 { class: "card__title", "Quick Feedback" }
                div { class: "grid grid--two",
                    button { r#type: "button", class: "button button--outline button--stacked",
                        span { "👍" }
                        span { class: "text--small", "App is Great" }
                    }
                    button { r#type: "button", class: "button button--outline button--stacked",
                        span { "👎" }
                        span { class: "text--small", "Report Issue" }
                    }
                }
            }
        }
    }
}

fn star_class(lit: bool) -> &'static str {
    if lit {
        "rating__star rating__star--on"
    } else {
        "rating__star"
    }
}

fn queue(sender_slot: SenderSlot, wait_ms: u64, event: FeedbackEvent) {
    if let Some(sender) = sender_slot.borrow().as_ref().cloned() {
        platform::spawn_future(async move {
            timing::sleep_ms(wait_ms).await;
            let _ = sender.unbounded_send(event);
        });
    }
}
