use dioxus::prelude::*;

use crate::core::config::ImageConfig;
use crate::core::format::{format_model_name, short_model_name};
use crate::core::images::image_url;
use crate::core::model::PromptBreakdown;
use crate::results::{use_dashboard, SvgThumbnail};
use crate::t;

#[component]
pub fn KeyFindings() -> Element {
    let store = use_dashboard();
    let Some((data, _)) = store.ready() else {
        return rsx! {};
    };
    let Some(findings) = data
        .insights
        .as_ref()
        .map(|doc| doc.key_findings.clone())
        .filter(|findings| !findings.is_empty())
    else {
        return rsx! {};
    };

    rsx! {
        section { class: "results-card findings",
            div { class: "results-card__header", h2 { {t!("findings-title")} } }
            ol { class: "findings__list",
                for finding in findings {
                    li { class: "findings__item", "{finding}" }
                }
            }
        }
    }
}

/// Winner and lowest scorer of each analysed prompt.
#[component]
pub fn PromptBreakdowns() -> Element {
    let store = use_dashboard();
    let Some((data, _)) = store.ready() else {
        return rsx! {};
    };
    let Some(breakdowns) = data
        .insights
        .as_ref()
        .map(|doc| doc.prompt_breakdowns.clone())
        .filter(|breakdowns| !breakdowns.is_empty())
    else {
        return rsx! {};
    };
    let images = data.config.images.clone();

    rsx! {
        section { class: "breakdowns",
            h2 { class: "breakdowns__title", {t!("breakdowns-title")} }
            div { class: "breakdowns__grid",
                for breakdown in breakdowns.iter() {
                    {breakdown_card(&images, breakdown)}
                }
            }
        }
    }
}

fn breakdown_card(images: &ImageConfig, breakdown: &PromptBreakdown) -> Element {
    let prompt = breakdown.prompt_num;
    let winner_url = image_url(images, &breakdown.winner, prompt);
    let loser_url = image_url(images, &breakdown.loser, prompt);
    let winner_alt = t!("breakdown-winner-alt", model = format_model_name(&breakdown.winner));
    let loser_alt = t!("breakdown-loser-alt", model = format_model_name(&breakdown.loser));
    let winner_short = short_model_name(&breakdown.winner, 2);
    let loser_short = short_model_name(&breakdown.loser, 2);

    rsx! {
        article { key: "{prompt}", class: "results-card breakdown",
            header { class: "breakdown__header",
                strong { {t!("prompt-label", number = prompt)} }
            }
            if !breakdown.prompt_text.is_empty() {
                p { class: "breakdown__prompt", "“{breakdown.prompt_text}”" }
            }
            div { class: "breakdown__images",
                figure { class: "breakdown__figure breakdown__figure--winner",
                    SvgThumbnail {
                        key: "{winner_url}",
                        src: winner_url.clone(),
                        alt: winner_alt,
                        size: 120,
                        fallback_label: t!("image-unavailable-short"),
                    }
                    figcaption { "🏆 " {t!("breakdown-winner")} }
                }
                figure { class: "breakdown__figure breakdown__figure--loser",
                    SvgThumbnail {
                        key: "{loser_url}",
                        src: loser_url.clone(),
                        alt: loser_alt,
                        size: 120,
                        fallback_label: t!("image-unavailable-short"),
                    }
                    figcaption { "↓ " {t!("breakdown-loser")} }
                }
            }
            if !breakdown.analysis.is_empty() {
                p { class: "breakdown__analysis", "{breakdown.analysis}" }
            }
            div { class: "breakdown__names",
                span { class: "breakdown__winner", strong { "{winner_short}" } }
                span { class: "breakdown__loser", strong { "{loser_short}" } }
            }
            if !breakdown.key_observation.is_empty() {
                div { class: "breakdown__key",
                    "💡 "
                    strong { {t!("breakdown-key")} }
                    " {breakdown.key_observation}"
                }
            }
        }
    }
}
