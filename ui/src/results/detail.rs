use dioxus::prelude::*;

use crate::core::config::ImageConfig;
use crate::core::format::{format_model_name, format_score, ScoreBand};
use crate::core::images::image_url;
use crate::core::model::{Criterion, DetailedScore};
use crate::core::template::evaluation_prompt;
use crate::results::{criterion_label, use_dashboard, SvgThumbnail};
use crate::t;

/// Side-by-side comparison of every model's output for the selected prompt.
#[component]
pub fn PromptDetailModal() -> Element {
    let store = use_dashboard();
    let mut selected = store.selected_prompt;
    let Some(prompt) = selected() else {
        return rsx! {};
    };
    let Some((data, state)) = store.ready() else {
        return rsx! {};
    };

    let view = state.view();
    let prompt_text = data
        .aggregator
        .prompt_text(prompt)
        .map(str::to_string)
        .unwrap_or_else(|| t!("prompt-label", number = prompt));
    let instruction = data.aggregator.prompt_text(prompt).map(evaluation_prompt);
    let judge_count = view.judges.len();

    let mut cards: Vec<(String, DetailedScore)> = view
        .models()
        .into_iter()
        .filter_map(|model| view.detail(&model, prompt).map(|score| (model, *score)))
        .collect();
    cards.sort_by(|(_, a), (_, b)| b.total_score.total_cmp(&a.total_score));

    let images = data.config.images.clone();

    rsx! {
        div {
            class: "modal__backdrop",
            onclick: move |_| selected.set(None),
            div {
                class: "modal",
                role: "dialog",
                aria_modal: "true",
                onclick: move |evt: MouseEvent| evt.stop_propagation(),

                div { class: "modal__header",
                    h2 { {t!("prompt-label", number = prompt)} }
                    button {
                        r#type: "button",
                        class: "button button--ghost modal__close",
                        aria_label: {t!("modal-close")},
                        onclick: move |_| selected.set(None),
                        "✕"
                    }
                }

                div { class: "modal__body",
                    blockquote { class: "modal__prompt", "“{prompt_text}”" }
                    if judge_count > 0 {
                        p { class: "results-card__meta", {t!("modal-judges-note", count = judge_count)} }
                    }
                    if let Some(instruction) = instruction {
                        details { class: "modal__instruction",
                            summary { {t!("modal-instruction")} }
                            pre { class: "evaluation-template__body", "{instruction}" }
                        }
                    }

                    if cards.is_empty() {
                        p { class: "results-card__placeholder", {t!("modal-no-scores")} }
                    } else {
                        h3 { class: "modal__section-title", {t!("modal-comparison")} }
                        div { class: "model-cards",
                            for (model, score) in cards.into_iter() {
                                {model_card(&images, &model, prompt, score)}
                            }
                        }
                    }
                }
            }
        }
    }
}

fn model_card(images: &ImageConfig, model: &str, prompt: u32, score: DetailedScore) -> Element {
    let name = format_model_name(model);
    let url = image_url(images, model, prompt);
    let total_class = ScoreBand::of(score.total_score).fill_class();
    let total = format_score(score.total_score);
    let alt = format!("{name} · {}", t!("prompt-label", number = prompt));
    let bars: Vec<(String, String, String, String, f64)> = Criterion::ALL
        .iter()
        .map(|criterion| {
            let value = score.criteria.get(*criterion);
            (
                criterion_label(*criterion),
                criterion.weight_label(),
                ScoreBand::of(value).fill_class().to_string(),
                format_score(value),
                value.clamp(0.0, 100.0),
            )
        })
        .collect();

    rsx! {
        article { key: "{model}", class: "model-card",
            header { class: "model-card__header",
                strong { "{name}" }
                span { class: "model-card__total {total_class}", "{total}" }
            }
            div { class: "model-card__image",
                SvgThumbnail {
                    key: "{url}",
                    src: url.clone(),
                    alt: alt,
                    size: 200,
                    fallback_label: t!("image-unavailable"),
                }
            }
            if score.judge_count > 0 {
                p { class: "model-card__judges", {t!("model-card-judges", count = score.judge_count)} }
            }
            ul { class: "criterion-bars",
                for (label, weight, fill, value, width) in bars {
                    li { class: "criterion-bars__item",
                        div { class: "criterion-bars__label",
                            span { "{label} " span { class: "criterion-bars__weight", "({weight})" } }
                            span { class: "criterion-bars__value", "{value}" }
                        }
                        div { class: "criterion-bars__track",
                            div { class: "criterion-bars__fill {fill}", style: "width: {width}%;" }
                        }
                    }
                }
            }
        }
    }
}
