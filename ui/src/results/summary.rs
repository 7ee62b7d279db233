use dioxus::prelude::*;

use crate::core::format::{format_model_name, format_optional_score, ScoreBand};
use crate::core::highlight::{column_extremes, Extremes, Highlight};
use crate::core::model::ModelRanking;
use crate::core::sort::{RankingColumn, SortState};
use crate::results::{rank_badge, ranking_column_label, use_dashboard, DashboardStore};
use crate::t;

#[component]
pub fn SummaryTable() -> Element {
    let store = use_dashboard();
    let Some((_, state)) = store.ready() else {
        return rsx! {};
    };

    let rows = state.summary_rows();
    let sort = state.summary_sort().cloned();
    let extremes: Vec<(RankingColumn, Option<Extremes>)> = RankingColumn::ALL
        .iter()
        .map(|column| (*column, column_extremes(&rows, *column)))
        .collect();
    let judge_count = state.view().judges.len();

    rsx! {
        section { class: "results-card summary",
            div { class: "results-card__header",
                h2 { {t!("summary-title")} }
                if judge_count > 0 {
                    span { class: "results-card__meta", {t!("summary-judges", count = judge_count)} }
                }
            }

            div { class: "data-table__scroll",
                table { class: "data-table",
                    thead {
                        tr {
                            for column in RankingColumn::ALL {
                                {header_cell(store, column, sort.as_ref())}
                            }
                        }
                    }
                    tbody {
                        for row in rows.iter() {
                            {summary_row(row, &extremes)}
                        }
                    }
                }
            }
        }
    }
}

fn header_cell(
    store: DashboardStore,
    column: RankingColumn,
    sort: Option<&SortState<RankingColumn>>,
) -> Element {
    let arrow = SortState::direction_for(sort, &column)
        .map(|direction| direction.arrow())
        .unwrap_or("");
    let label = ranking_column_label(column);
    let class = if column.is_score() || column == RankingColumn::PromptsEvaluated {
        "data-table__sortable data-table__numeric"
    } else {
        "data-table__sortable"
    };

    rsx! {
        th {
            class: "{class}",
            onclick: move |_| store.update(|state, _| state.sort_summary(column)),
            "{label}"
            span { class: "data-table__arrow", "{arrow}" }
        }
    }
}

fn summary_row(row: &ModelRanking, extremes: &[(RankingColumn, Option<Extremes>)]) -> Element {
    let badge = rank_badge(row.rank);
    let name = format_model_name(&row.model);
    let cells: Vec<(String, String)> = extremes
        .iter()
        .filter(|(column, _)| column.is_score())
        .map(|(column, extremes)| {
            let value = column.value(row);
            let highlight = extremes
                .map(|e| e.classify(value))
                .unwrap_or(Highlight::None);
            let band = value.map(|v| ScoreBand::of(v).css_class()).unwrap_or("");
            (
                format_optional_score(value),
                format!("{band} {}", highlight.css_class()),
            )
        })
        .collect();

    rsx! {
        tr { key: "{row.model}",
            td { class: "data-table__rank",
                if let Some(badge) = badge {
                    span { class: "rank-badge", title: "{row.rank}", "{badge}" }
                } else {
                    "{row.rank}"
                }
            }
            td { class: "data-table__model", "{name}" }
            for (text, class) in cells {
                td { class: "data-table__numeric {class}", "{text}" }
            }
            td { class: "data-table__numeric", "{row.prompts_evaluated}" }
        }
    }
}
