use dioxus::prelude::*;

use crate::core::format::{format_score, short_model_name, ScoreBand, NO_DATA};
use crate::core::highlight::{row_extremes, Highlight};
use crate::core::model::PromptScoreRow;
use crate::core::sort::{PromptColumn, SortState};
use crate::results::{use_dashboard, DashboardStore};
use crate::t;

/// Average score of each visible model per prompt; clicking a row opens its detail.
#[component]
pub fn PromptScoresTable() -> Element {
    let store = use_dashboard();
    let Some((_, state)) = store.ready() else {
        return rsx! {};
    };

    let models = state.visible_models();
    let rows = state.prompt_rows();
    let sort = state.prompt_sort().cloned();

    rsx! {
        section { class: "results-card prompt-scores",
            div { class: "results-card__header",
                h2 { {t!("prompts-table-title")} }
                span { class: "results-card__meta", {t!("prompts-table-hint")} }
            }

            if models.is_empty() {
                p { class: "results-card__placeholder", {t!("prompts-table-no-models")} }
            } else {
                div { class: "data-table__scroll",
                    table { class: "data-table data-table--prompts",
                        thead {
                            tr {
                                {header_cell(store, PromptColumn::Prompt, t!("column-prompt"), sort.as_ref())}
                                for model in models.iter() {
                                    {header_cell(store, PromptColumn::Model(model.clone()), short_model_name(model, 1), sort.as_ref())}
                                }
                            }
                        }
                        tbody {
                            for row in rows.iter() {
                                {prompt_row(store, row, &models)}
                            }
                        }
                    }
                }
            }
        }
    }
}

fn header_cell(
    store: DashboardStore,
    column: PromptColumn,
    label: String,
    sort: Option<&SortState<PromptColumn>>,
) -> Element {
    let arrow = SortState::direction_for(sort, &column)
        .map(|direction| direction.arrow())
        .unwrap_or("");
    let title = match &column {
        PromptColumn::Model(model) => model.clone(),
        PromptColumn::Prompt => label.clone(),
    };

    rsx! {
        th {
            class: "data-table__sortable",
            title: "{title}",
            onclick: move |_| {
                let column = column.clone();
                store.update(move |state, _| state.sort_prompts(column));
            },
            "{label}"
            span { class: "data-table__arrow", "{arrow}" }
        }
    }
}

fn prompt_row(store: DashboardStore, row: &PromptScoreRow, models: &[String]) -> Element {
    let prompt = row.prompt;
    let extremes = row_extremes(row, models);
    let cells: Vec<(String, String)> = models
        .iter()
        .map(|model| match row.score(model) {
            Some(score) => {
                let highlight = extremes
                    .map(|e| e.classify(Some(score)))
                    .unwrap_or(Highlight::None);
                (
                    format_score(score),
                    format!("{} {}", ScoreBand::of(score).css_class(), highlight.css_class()),
                )
            }
            None => (NO_DATA.to_string(), "cell--missing".to_string()),
        })
        .collect();
    let mut selected = store.selected_prompt;

    rsx! {
        tr {
            key: "{prompt}",
            class: "data-table__row--clickable",
            title: "{row.prompt_text}",
            onclick: move |_| selected.set(Some(prompt)),
            td { class: "data-table__prompt", strong { {t!("prompt-label", number = prompt)} } }
            for (text, class) in cells {
                td { class: "data-table__numeric {class}", "{text}" }
            }
        }
    }
}

/// Single row shown in place of the tables when the primary dataset failed to load.
#[component]
pub fn LoadFailureRow(message: String) -> Element {
    rsx! {
        table { class: "data-table",
            tbody {
                tr {
                    td { class: "data-table__error", colspan: "8",
                        "⚠️ "
                        {t!("load-failed")}
                    }
                }
            }
        }
        p { class: "results-card__meta results-card__meta--error", "{message}" }
    }
}
