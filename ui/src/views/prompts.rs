use dioxus::prelude::*;

use crate::core::template::EVALUATION_TEMPLATE;
use crate::results::{use_dashboard, LoadFailureRow, LoadState};
use crate::t;

/// Every benchmark prompt and the instruction the judges scored against.
#[component]
pub fn Prompts() -> Element {
    let store = use_dashboard();
    let prompts: Vec<(u32, String)> = store
        .ready()
        .map(|(data, _)| data.aggregator.prompts().to_vec())
        .unwrap_or_default();
    let count = prompts.len();

    rsx! {
        section { class: "page page-prompts",
            div { class: "results__header",
                h1 { {t!("prompts-page-title")} }
                p { {t!("prompts-page-intro")} }
            }

            match &*store.load.read() {
                LoadState::Loading => rsx! {
                    p { class: "results-card__placeholder", {t!("loading")} }
                },
                LoadState::Failed(message) => rsx! {
                    LoadFailureRow { message: message.clone() }
                },
                LoadState::Ready(_) => rsx! {
                    section { class: "results-card prompt-catalogue",
                        div { class: "results-card__header",
                            h2 { {t!("prompts-catalogue-title")} }
                            span { class: "results-card__meta", {t!("prompts-count", count = count)} }
                        }
                        ol { class: "prompt-catalogue__list",
                            for (number, text) in prompts {
                                li { key: "{number}", class: "prompt-catalogue__item",
                                    span { class: "prompt-catalogue__number", "{number}" }
                                    p { class: "prompt-catalogue__text", "{text}" }
                                }
                            }
                        }
                    }
                },
            }

            section { class: "results-card evaluation-template",
                div { class: "results-card__header",
                    h2 { {t!("template-title")} }
                }
                p { class: "results-card__meta", {t!("template-intro")} }
                pre { class: "evaluation-template__body", "{EVALUATION_TEMPLATE}" }
            }
        }
    }
}
