use dioxus::prelude::*;

use crate::components::{ScreenHeader, TabBar};
use crate::core::navigation::Screen;
use crate::data::soil::{self, Fertilizer, Nutrient, SoilMetric, SoilRecommendation};
use crate::t;

use super::dashboard::screen_title;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SoilTab {
    Analysis,
    Nutrients,
    Fertilizer,
}

impl SoilTab {
    const ALL: [SoilTab; 3] = [SoilTab::Analysis, SoilTab::Nutrients, SoilTab::Fertilizer];

    fn label(self) -> String {
        match self {
            SoilTab::Analysis => t!("soil-tab-analysis"),
            SoilTab::Nutrients => t!("soil-tab-nutrients"),
            SoilTab::Fertilizer => t!("soil-tab-fertilizer"),
        }
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|tab| *tab == self).unwrap_or(0)
    }
}

#[component]
pub fn SoilHealthScreen(on_back: EventHandler<()>) -> Element {
    let mut tab = use_signal(|| SoilTab::Analysis);
    let data = soil::data();

    rsx! {
        section { class: "screen",
            ScreenHeader {
                title: screen_title(Screen::SoilHealth),
                subtitle: data.field.clone(),
                on_back: move |_| on_back.call(()),
                trailing: "⟳",
            }

            div { class: "screen__body stack",
                section { class: "card card--positive",
                    div { class: "row row--between",
                        div {
                            span { class: "badge badge--positive", "{data.health}" }
                            p { class: "text--muted text--small", {t!("soil-score-caption")} }
                        }
                        div { class: "score",
                            span { class: "score__value", "{data.score}" }
                            span { class: "text--muted text--small", "/100" }
                        }
                    }
                }

                TabBar {
                    labels: SoilTab::ALL.iter().map(|t| t.label()).collect::<Vec<_>>(),
                    active: tab().index(),
                    on_select: move |index: usize| {
                        if let Some(next) = SoilTab::ALL.get(index) {
                            tab.set(*next);
                        }
                    },
                }

                {match tab() {
                    SoilTab::Analysis => rsx! {
                        div { class: "grid grid--two",
                            for metric in data.metrics.iter() {
                                {render_metric(metric)}
                            }
                        }
                        section { class: "card",
                            h2 { class: "card__title", {t!("soil-recommendations")} }
                            div { class: "stack",
                                for rec in data.recommendations.iter() {
                                    {render_recommendation(rec)}
                                }
                            }
                        }
                    },
                    SoilTab::Nutrients => rsx! {
                        section { class: "card",
                            h2 { class: "card__title", {t!("soil-nutrient-levels")} }
                            div { class: "stack",
                                for nutrient in data.nutrients.iter() {
                                    {render_nutrient(nutrient)}
                                }
                            }
                        }
                        section { class: "card card--sky",
                            h3 { class: "card__title", "💡 Quick Tips" }
                            ul { class: "tips",
                                for tip in data.tips.iter() {
                                    li { key: "{tip}", "{tip}" }
                                }
                            }
                        }
                    },
                    SoilTab::Fertilizer => rsx! {
                        section { class: "card",
                            h2 { class: "card__title", {t!("soil-fertilizers")} }
                            div { class: "stack",
                                for fertilizer in data.fertilizers.iter() {
                                    {render_fertilizer(fertilizer)}
                                }
                            }
                        }
                        button { r#type: "button", class: "button button--primary button--tall button--block",
                            "📅 Schedule Next Soil Test"
                        }
                    },
                }}
            }
        }
    }
}

fn render_metric(metric: &SoilMetric) -> Element {
    let tone = metric.status.tone();
    rsx! {
        div { key: "{metric.name}", class: "card card--compact",
            div { class: "row row--between",
                span { class: "metric__icon", "{metric.icon}" }
                span { class: tone.text_class(), "{metric.status.icon()}" }
            }
            p { class: "text--label", "{metric.name}" }
            p { class: "text--metric", "{metric.value}" }
            p { class: "text--muted text--small", "Ideal: {metric.ideal}" }
            p { class: "text--small", "{metric.description}" }
        }
    }
}

fn render_recommendation(rec: &SoilRecommendation) -> Element {
    rsx! {
        div { key: "{rec.title}", class: "list-row row",
            span { class: "list-row__icon", "{rec.icon}" }
            div { class: "grow",
                div { class: "row row--between",
                    h4 { class: "text--label", "{rec.title}" }
                    span { class: rec.priority.tone().badge_class(), "{rec.priority.label()}" }
                }
                p { class: "text--muted text--small", "{rec.description}" }
            }
        }
    }
}

fn render_nutrient(nutrient: &Nutrient) -> Element {
    let tone = nutrient.status.tone();
    rsx! {
        div { key: "{nutrient.name}", class: "nutrient",
            div { class: "row row--between",
                span { class: "text--label", "{nutrient.name}" }
                span { class: tone.badge_class(), "{nutrient.status.label()}" }
            }
            div { class: "meter",
                div { class: "meter__fill", style: nutrient.bar_width() }
            }
            p { class: "text--muted text--small", "{nutrient.level}%" }
        }
    }
}

fn render_fertilizer(fertilizer: &Fertilizer) -> Element {
    rsx! {
        div { key: "{fertilizer.name}", class: "list-row",
            div { class: "row row--between",
                h4 { class: "text--label", "{fertilizer.name}" }
                span { class: "text--positive text--label", "{fertilizer.cost}" }
            }
            div { class: "grid grid--two",
                p { class: "text--small", span { class: "text--muted", "Dosage: " } "{fertilizer.dosage}" }
                p { class: "text--small", span { class: "text--muted", "Timing: " } "{fertilizer.timing}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tab_index_matches_order() {
        for (i, tab) in SoilTab::ALL.into_iter().enumerate() {
            assert_eq!(tab.index(), i);
        }
    }
}
