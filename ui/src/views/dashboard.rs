use dioxus::prelude::*;

use crate::core::format;
use crate::core::navigation::Screen;
use crate::data::dashboard::{self, CropRecommendation, FarmAlert};
use crate::data::Priority;
use crate::t;

/// Hub screen. Every destination is reached through `on_navigate`.
#[component]
pub fn DashboardScreen(on_navigate: EventHandler<Screen>) -> Element {
    let mut menu_open = use_signal(|| false);
    let data = dashboard::data();
    let weather = &data.weather;

    rsx! {
        section { class: "screen screen--dashboard",
            header { class: "screen-header screen-header--hub",
                div { class: "screen-header__row",
                    div { class: "screen-header__titles",
                        h1 { class: "screen-header__title", {t!("dashboard-greeting", name = data.farmer.as_str())} }
                        p { class: "screen-header__subtitle", {t!("dashboard-subtitle")} }
                    }
                    button {
                        r#type: "button",
                        class: "screen-header__action",
                        aria_expanded: menu_open(),
                        onclick: move |_| menu_open.set(!menu_open()),
                        if menu_open() { "✕" } else { "☰" }
                    }
                }
            }

            if menu_open() {
                nav { class: "menu",
                    for screen in Screen::DETAILS {
                        button {
                            key: "{screen}",
                            r#type: "button",
                            class: "menu__item",
                            onclick: move |_| {
                                menu_open.set(false);
                                on_navigate.call(screen);
                            },
                            span { class: "menu__icon", "{screen_icon(screen)}" }
                            span { {screen_title(screen)} }
                        }
                    }
                }
            }

            div { class: "screen__body stack",
                section { class: "card card--sky",
                    div { class: "row row--between",
                        div {
                            h3 { class: "card__title", {t!("dashboard-weather-title")} }
                            p { class: "text--metric", "{format::format_celsius(weather.temperature)}" }
                            p { class: "text--muted", "{weather.condition}" }
                        }
                        div { class: "weather-summary",
                            span { class: "weather-summary__icon", "⛅" }
                            p { class: "text--small", "💧 {format::format_percent(weather.humidity)}" }
                            p { class: "text--small text--muted",
                                "H: {format::format_celsius(weather.high)} L: {format::format_celsius(weather.low)}"
                            }
                        }
                    }
                }

                if !data.alerts.is_empty() {
                    div { class: "stack",
                        for alert in data.alerts.iter() {
                            {render_alert(alert)}
                        }
                    }
                }

                section {
                    h2 { class: "section__title", {t!("dashboard-quick-actions")} }
                    div { class: "grid grid--two",
                        for screen in QUICK_ACTIONS {
                            button {
                                key: "{screen}",
                                r#type: "button",
                                class: "quick-action",
                                onclick: move |_| on_navigate.call(screen),
                                span { class: "quick-action__icon", "{screen_icon(screen)}" }
                                span { class: "quick-action__label", {screen_title(screen)} }
                            }
                        }
                    }
                }

                section { class: "card",
                    h2 { class: "card__title", "🌱 " {t!("dashboard-recommendations")} }
                    div { class: "stack",
                        for rec in data.recommendations.iter() {
                            {render_recommendation(rec)}
                        }
                    }
                }

                section { class: "card",
                    h2 { class: "card__title", "📈 " {t!("dashboard-market-prices")} }
                    div { class: "stack",
                        for snapshot in data.prices.iter() {
                            div { key: "{snapshot.crop}", class: "row row--between list-row",
                                div {
                                    p { class: "text--label", "{snapshot.crop}" }
                                    p { class: "text--muted text--small", "per {snapshot.unit}" }
                                }
                                div { class: "align-end",
                                    p { class: "text--label", "{format::format_rupees(snapshot.price)}" }
                                    p { class: "text--small {snapshot.change_tone().text_class()}",
                                        "{format::format_signed_change(snapshot.change)}"
                                    }
                                }
                            }
                        }
                    }
                    button {
                        r#type: "button",
                        class: "button button--outline button--block",
                        onclick: move |_| on_navigate.call(Screen::Pricing),
                        {t!("dashboard-view-all-prices")}
                    }
                }

                div { class: "grid grid--two",
                    button {
                        r#type: "button",
                        class: "button button--outline button--tall",
                        onclick: move |_| on_navigate.call(Screen::Feedback),
                        "💬 "
                        {t!("dashboard-help")}
                    }
                    button {
                        r#type: "button",
                        class: "button button--outline button--tall",
                        onclick: move |_| on_navigate.call(Screen::SoilHealth),
                        "🌿 "
                        {t!("dashboard-soil-guide")}
                    }
                }
            }
        }
    }
}

const QUICK_ACTIONS: [Screen; 4] = [
    Screen::PestDetection,
    Screen::SoilHealth,
    Screen::Weather,
    Screen::Pricing,
];

/// Display name of a screen, shared by the menu, quick actions and headers.
pub fn screen_title(screen: Screen) -> String {
    match screen {
        Screen::Onboarding => t!("screen-onboarding"),
        Screen::Dashboard => t!("screen-dashboard"),
        Screen::SoilHealth => t!("screen-soil-health"),
        Screen::PestDetection => t!("screen-pest-detection"),
        Screen::Weather => t!("screen-weather"),
        Screen::Pricing => t!("screen-pricing"),
        Screen::Feedback => t!("screen-feedback"),
    }
}

fn screen_icon(screen: Screen) -> &'static str {
    match screen {
        Screen::Onboarding => "🌐",
        Screen::Dashboard => "🏠",
        Screen::SoilHealth => "🧪",
        Screen::PestDetection => "🐛",
        Screen::Weather => "🌦",
        Screen::Pricing => "💹",
        Screen::Feedback => "💬",
    }
}

fn alert_class(priority: Priority) -> &'static str {
    match priority {
        Priority::High => "alert alert--critical",
        Priority::Medium | Priority::Low => "alert alert--caution",
    }
}

fn render_alert(alert: &FarmAlert) -> Element {
    rsx! {
        div { key: "{alert.message}", class: alert_class(alert.priority),
            span { class: "alert__icon", "⚠" }
            span { "{alert.message}" }
        }
    }
}

fn render_recommendation(rec: &CropRecommendation) -> Element {
    rsx! {
        div { key: "{rec.crop}", class: "list-row",
            div { class: "row row--between",
                h4 { class: "text--label", "{rec.crop}" }
                span { class: rec.status.tone().badge_class(), "{rec.status.label()}" }
            }
            p { class: "text--muted text--small", "{rec.reason}" }
            div { class: "row",
                div { class: "meter",
                    div { class: "meter__fill", style: "width: {rec.confidence}%" }
                }
                span { class: "text--small", "{format::format_percent(rec.confidence)}" }
            }
        }
    }
}
