use dioxus::prelude::*;

use crate::components::{ScreenHeader, TabBar};
use crate::core::format;
use crate::core::navigation::Screen;
use crate::data::market::{self, filter_prices, MarketInsight, MarketPrice, PricePoint, WatchItem};
use crate::t;

use super::dashboard::screen_title;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PricingTab {
    Today,
    Trends,
    Watchlist,
}

impl PricingTab {
    const ALL: [PricingTab; 3] = [PricingTab::Today, PricingTab::Trends, PricingTab::Watchlist];

    fn label(self) -> String {
        match self {
            PricingTab::Today => t!("pricing-tab-today"),
            PricingTab::Trends => t!("pricing-tab-trends"),
            PricingTab::Watchlist => t!("pricing-tab-watchlist"),
        }
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|tab| *tab == self).unwrap_or(0)
    }
}

const DEFAULT_LOCATION: &str = "punjab";

#[component]
pub fn PricingScreen(on_back: EventHandler<()>) -> Element {
    let mut tab = use_signal(|| PricingTab::Today);
    let mut query = use_signal(String::new);
    let mut location = use_signal(|| DEFAULT_LOCATION.to_string());
    let data = market::data();

    let location_label = data
        .location_name(&location())
        .unwrap_or(DEFAULT_LOCATION)
        .to_string();
    let needle = query();
    let visible = filter_prices(&data.today, &needle);

    rsx! {
        section { class: "screen",
            ScreenHeader {
                title: screen_title(Screen::Pricing),
                subtitle: t!("pricing-subtitle", location = location_label.as_str()),
                on_back: move |_| on_back.call(()),
                trailing: "⟳",
                div { class: "stack screen-header__extra",
                    select {
                        class: "input",
                        value: "{location()}",
                        onchange: move |evt: FormEvent| location.set(evt.value()),
                        for loc in data.locations.iter() {
                            option { key: "{loc.code}", value: "{loc.code}", "{loc.name}" }
                        }
                    }
                    input {
                        class: "input",
                        r#type: "search",
                        placeholder: t!("pricing-search-placeholder"),
                        value: "{needle}",
                        oninput: move |evt: FormEvent| query.set(evt.value()),
                    }
                }
            }

            div { class: "screen__body stack",
                TabBar {
                    labels: PricingTab::ALL.iter().map(|t| t.label()).collect::<Vec<_>>(),
                    active: tab().index(),
                    on_select: move |index: usize| {
                        if let Some(next) = PricingTab::ALL.get(index) {
                            tab.set(*next);
                        }
                    },
                }

                {match tab() {
                    PricingTab::Today => rsx! {
                        if visible.is_empty() {
                            p { class: "text--muted card card--center", {t!("pricing-no-results")} }
                        }
                        for price in visible.iter() {
                            {render_price(price)}
                        }
                    },
                    PricingTab::Trends => rsx! {
                        section { class: "card",
                            h2 { class: "card__title", {t!("pricing-history")} }
                            div { class: "stack",
                                for point in data.history.iter() {
                                    {render_history(point)}
                                }
                            }
                        }
                        section { class: "card",
                            h2 { class: "card__title", {t!("pricing-insights")} }
                            div { class: "stack",
                                for insight in data.insights.iter() {
                                    {render_insight(insight)}
                                }
                            }
                        }
                    },
                    PricingTab::Watchlist => rsx! {
                        section { class: "card",
                            h2 { class: "card__title", {t!("pricing-watchlist")} }
                            div { class: "stack",
                                for item in data.watchlist.iter() {
                                    {render_watch(item)}
                                }
                            }
                            button { r#type: "button", class: "button button--outline button--block",
                                "🎯 Add Price Alert"
                            }
                        }
                        section { class: "card card--sky",
                            h3 { class: "card__title", "💡 Pricing Tips" }
                            ul { class: "tips",
                                for tip in data.tips.iter() {
                                    li { key: "{tip}", "{tip}" }
                                }
                            }
                        }
                    },
                }}
            }
        }
    }
}

fn render_price(price: &MarketPrice) -> Element {
    let trend = price.trend();
    rsx! {
        section { key: "{price.crop}", class: "card card--compact",
            div { class: "row row--between",
                div {
                    h3 { class: "text--label", "{price.crop}" }
                    p { class: "text--muted text--small", "{price.market} • {price.quality}" }
                }
                span { class: price.demand.tone().badge_class(), "{price.demand.label()}" }
            }
            div { class: "row row--between",
                p {
                    span { class: "text--metric", "{format::format_rupees(price.price)}" }
                    span { class: "text--muted text--small", " / {price.unit}" }
                }
                span { class: "text--label {trend.tone().text_class()}",
                    "{trend.arrow()} {format::format_change(price.change)}"
                }
            }
        }
    }
}

fn render_history(point: &PricePoint) -> Element {
    rsx! {
        div { key: "{point.period}", class: "list-row",
            p { class: "text--label", "{point.period}" }
            div { class: "grid grid--three text--small",
                span { "Wheat: {format::format_rupees(point.wheat)}" }
                span { "Rice: {format::format_rupees(point.rice)}" }
                span { "Cotton: {format::format_rupees(point.cotton)}" }
            }
        }
    }
}

fn render_insight(insight: &MarketInsight) -> Element {
    rsx! {
        div { key: "{insight.title}", class: "list-row",
            div { class: "row row--between",
                h4 { class: "text--label {insight.impact.tone().text_class()}", "{insight.title}" }
                span { class: "badge badge--neutral", "{insight.timeframe}" }
            }
            p { class: "text--muted text--small", "{insight.description}" }
        }
    }
}

fn render_watch(item: &WatchItem) -> Element {
    let tone = if item.target_met() { "badge badge--positive" } else { "badge badge--neutral" };
    rsx! {
        div { key: "{item.crop}", class: "list-row row row--between",
            div {
                p { class: "text--label", "{item.crop}" }
                p { class: "text--muted text--small",
                    "Target: {format::format_rupees(item.target_price)} · Now: {format::format_rupees(item.current_price)}"
                }
            }
            span { class: tone, "{item.status_label()}" }
        }
    }
}
