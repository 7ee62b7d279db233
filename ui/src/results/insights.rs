use dioxus::prelude::*;

use crate::core::format::{format_model_name, format_optional_score, format_score};
use crate::core::insights::Insight;
use crate::results::{criterion_label, use_dashboard};
use crate::t;

/// Six headline observations recomputed from the current rankings.
#[component]
pub fn InsightCards() -> Element {
    let store = use_dashboard();
    let Some((_, state)) = store.ready() else {
        return rsx! {};
    };

    let cards: Vec<(&'static str, &'static str, String, String)> = state
        .insights()
        .iter()
        .map(|insight| {
            let (title, body) = describe(insight);
            (insight.icon(), insight.tone(), title, body)
        })
        .collect();

    if cards.is_empty() {
        return rsx! {};
    }

    rsx! {
        section { class: "insights",
            h2 { class: "insights__title", {t!("insights-title")} }
            div { class: "insights__grid",
                for (icon, tone, title, body) in cards {
                    article { class: "insight-card insight-card--{tone}",
                        h3 { class: "insight-card__title",
                            span { class: "insight-card__icon", aria_hidden: "true", "{icon}" }
                            "{title}"
                        }
                        p { class: "insight-card__body", "{body}" }
                    }
                }
            }
        }
    }
}

fn describe(insight: &Insight) -> (String, String) {
    match insight {
        Insight::TopPerformer {
            model,
            total,
            adherence,
            completeness,
        } => (
            t!("insight-top-title"),
            t!(
                "insight-top-body",
                model = format_model_name(model),
                total = format_score(*total),
                adherence = format_optional_score(*adherence),
                completeness = format_optional_score(*completeness)
            ),
        ),
        Insight::BiggestChallenge { criterion, average } => (
            t!("insight-challenge-title"),
            t!(
                "insight-challenge-body",
                criterion = criterion_label(*criterion),
                average = format_score(*average)
            ),
        ),
        Insight::MostVariance { criterion, spread } => (
            t!("insight-variance-title"),
            t!(
                "insight-variance-body",
                criterion = criterion_label(*criterion),
                spread = format_score(*spread)
            ),
        ),
        Insight::NeedsImprovement {
            model,
            total,
            physics,
            structure,
        } => (
            t!("insight-improve-title"),
            t!(
                "insight-improve-body",
                model = format_model_name(model),
                total = format_score(*total),
                physics = format_optional_score(*physics),
                structure = format_optional_score(*structure)
            ),
        ),
        Insight::StrongAcrossBoard { completeness } => (
            t!("insight-strong-title"),
            t!("insight-strong-body", completeness = format_score(*completeness)),
        ),
        Insight::Recommendation { model, runners_up } => {
            let body = if runners_up.is_empty() {
                t!("insight-recommend-solo", model = format_model_name(model))
            } else {
                let others = runners_up
                    .iter()
                    .map(|m| format_model_name(m))
                    .collect::<Vec<_>>()
                    .join(", ");
                t!(
                    "insight-recommend-body",
                    model = format_model_name(model),
                    others = others
                )
            };
            (t!("insight-recommend-title"), body)
        }
    }
}
