use dioxus::prelude::*;

use crate::results::{use_dashboard, KeyFindings, LoadFailureRow, LoadState, PromptBreakdowns};
use crate::t;

#[component]
pub fn Findings() -> Element {
    let store = use_dashboard();
    let has_insights = store
        .ready()
        .map(|(data, _)| data.insights.is_some())
        .unwrap_or(false);

    rsx! {
        section { class: "page page-findings",
            div { class: "results__header",
                h1 { {t!("findings-page-title")} }
                p { {t!("findings-page-intro")} }
            }

            match &*store.load.read() {
                LoadState::Loading => rsx! {
                    p { class: "results-card__placeholder", {t!("loading")} }
                },
                LoadState::Failed(message) => rsx! {
                    LoadFailureRow { message: message.clone() }
                },
                LoadState::Ready(_) if !has_insights => rsx! {
                    p { class: "results-card__placeholder", {t!("findings-unavailable")} }
                },
                LoadState::Ready(_) => rsx! {
                    KeyFindings {}
                    PromptBreakdowns {}
                },
            }
        }
    }
}
