use dioxus::prelude::*;

use crate::components::{ScreenHeader, TabBar};
use crate::core::format;
use crate::core::navigation::Screen;
use crate::data::weather::{self, DailyForecast, FarmingAdvice, HourlyForecast, RainChance, WeatherAlert};
use crate::t;

use super::dashboard::screen_title;

#[component]
pub fn WeatherScreen(on_back: EventHandler<()>) -> Element {
    // 0 = today (hourly), 1 = week
    let mut tab = use_signal(|| 0usize);
    let data = weather::data();
    let current = &data.current;

    rsx! {
        section { class: "screen",
            ScreenHeader {
                title: screen_title(Screen::Weather),
                subtitle: "📍 {data.location}",
                on_back: move |_| on_back.call(()),
                trailing: "⟳",
                div { class: "row row--between screen-header__extra",
                    div {
                        p { class: "text--hero", "{format::format_celsius(current.temperature)}" }
                        p { "{current.condition}" }
                    }
                    span { class: "text--hero", "⛅" }
                }
            }

            div { class: "screen__body stack",
                for alert in data.alerts.iter() {
                    {render_alert(alert)}
                }

                section { class: "card",
                    h2 { class: "card__title", {t!("weather-current")} }
                    div { class: "grid grid--two",
                        {condition("💧", "Humidity", format::format_percent(current.humidity))}
                        {condition("🌬", "Wind Speed", format!("{} km/h", current.wind_speed))}
                        {condition("👁", "Visibility", format!("{} km", current.visibility))}
                        {condition("☀", "UV Index", format!("{} ({})", current.uv_index, current.uv_label))}
                    }
                    div { class: "grid grid--two",
                        p { class: "text--small",
                            span { class: "text--muted", "Pressure: " }
                            "{current.pressure} hPa"
                        }
                        p { class: "text--small",
                            span { class: "text--muted", "Dew Point: " }
                            "{format::format_celsius(current.dew_point)}"
                        }
                    }
                }

                TabBar {
                    labels: vec![t!("weather-tab-today"), t!("weather-tab-week")],
                    active: tab(),
                    on_select: move |index: usize| tab.set(index),
                }

                if tab() == 0 {
                    section { class: "card",
                        h2 { class: "card__title", {t!("weather-hourly")} }
                        div { class: "hourly",
                            for hour in data.hourly.iter() {
                                {render_hour(hour)}
                            }
                        }
                    }
                } else {
                    section { class: "card",
                        h2 { class: "card__title", {t!("weather-weekly")} }
                        div { class: "stack",
                            for day in data.weekly.iter() {
                                {render_day(day)}
                            }
                        }
                    }
                }

                section { class: "card",
                    h2 { class: "card__title", {t!("weather-advice")} }
                    div { class: "stack",
                        for advice in data.advice.iter() {
                            {render_advice(advice)}
                        }
                    }
                }

                div { class: "grid grid--two",
                    button { r#type: "button", class: "button button--outline button--tall", "📅 Plan Activities" }
                    button { r#type: "button", class: "button button--primary button--tall", "🔔 Set Alerts" }
                }
            }
        }
    }
}

fn condition(icon: &str, label: &str, value: String) -> Element {
    rsx! {
        div { class: "condition",
            span { class: "condition__icon", "{icon}" }
            div {
                p { class: "text--muted text--small", "{label}" }
                p { class: "text--label", "{value}" }
            }
        }
    }
}

fn render_alert(alert: &WeatherAlert) -> Element {
    rsx! {
        div { key: "{alert.kind}", class: "alert alert--critical alert--left",
            span { class: "alert__icon", "⚠" }
            div {
                div { class: "row row--between",
                    strong { "{alert.kind}" }
                    span { class: alert.severity.tone().badge_class(), "{alert.severity.label()}" }
                }
                p { class: "text--small", "{alert.time}" }
                p { class: "text--small", "{alert.description}" }
            }
        }
    }
}

fn render_hour(hour: &HourlyForecast) -> Element {
    let chance = RainChance::from_percent(hour.rain);
    rsx! {
        div { key: "{hour.time}", class: "hourly__slot",
            p { class: "text--small text--muted", "{hour.time}" }
            span { class: "hourly__icon", "{hour.sky.icon()}" }
            p { class: "text--label", "{format::format_celsius(hour.temp)}" }
            p { class: "text--small {chance.text_class()}", "💧 {hour.rain}%" }
        }
    }
}

fn render_day(day: &DailyForecast) -> Element {
    let chance = RainChance::from_percent(day.rain);
    rsx! {
        div { key: "{day.day}", class: "list-row row row--between",
            div { class: "row",
                span { class: "hourly__icon", "{day.sky.icon()}" }
                div {
                    p { class: "text--label", "{day.day}" }
                    p { class: "text--muted text--small", "{day.condition}" }
                }
            }
            div { class: "align-end",
                p { class: "text--label",
                    "{format::format_celsius(day.high)} / {format::format_celsius(day.low)}"
                }
                p { class: "text--small {chance.text_class()}", "💧 {day.rain}% · {chance.label()}" }
            }
        }
    }
}

fn render_advice(advice: &FarmingAdvice) -> Element {
    rsx! {
        div { key: "{advice.title}", class: "list-row row",
            span { class: "list-row__icon", "{advice.icon}" }
            div { class: "grow",
                div { class: "row row--between",
                    h4 { class: "text--label", "{advice.title}" }
                    span { class: advice.tone().badge_class(), "{advice.priority.label()}" }
                }
                p { class: "text--muted text--small", "{advice.message}" }
            }
        }
    }
}
