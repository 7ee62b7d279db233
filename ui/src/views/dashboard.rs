use dioxus::prelude::*;

use crate::results::{
    use_dashboard, InsightCards, JudgeFilter, LoadFailureRow, LoadState, ModelVisibility,
    PromptDetailModal, PromptScoresTable, SummaryTable,
};
use crate::t;

#[component]
pub fn Dashboard() -> Element {
    let store = use_dashboard();

    rsx! {
        section { class: "page page-dashboard",
            div { class: "results__header",
                h1 { {t!("dashboard-title")} }
                p { {t!("dashboard-intro")} }
            }

            match &*store.load.read() {
                LoadState::Loading => rsx! {
                    p { class: "results-card__placeholder", {t!("loading")} }
                },
                LoadState::Failed(message) => rsx! {
                    LoadFailureRow { message: message.clone() }
                },
                LoadState::Ready(_) => rsx! {
                    JudgeFilter {}
                    InsightCards {}
                    SummaryTable {}
                    ModelVisibility {}
                    PromptScoresTable {}
                    PromptDetailModal {}
                },
            }
        }
    }
}
