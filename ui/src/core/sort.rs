//! Column sorting for the summary and per-prompt tables.
//!
//! Sorting is stable in both directions: rows with equal keys keep their
//! relative input order.

use std::cmp::Ordering;

use super::format::format_model_name;
use super::model::{Criterion, ModelRanking, PromptScoreRow};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    pub fn arrow(self) -> &'static str {
        match self {
            Self::Ascending => "▲",
            Self::Descending => "▼",
        }
    }

    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SortState<C> {
    pub column: C,
    pub direction: SortDirection,
}

impl<C: PartialEq + Clone> SortState<C> {
    pub fn ascending(column: C) -> Self {
        Self {
            column,
            direction: SortDirection::Ascending,
        }
    }

    /// Selecting the active column flips direction; a new column starts ascending.
    pub fn select(current: Option<&Self>, column: C) -> Self {
        match current {
            Some(state) if state.column == column => Self {
                column,
                direction: state.direction.flipped(),
            },
            _ => Self::ascending(column),
        }
    }

    pub fn direction_for(current: Option<&Self>, column: &C) -> Option<SortDirection> {
        current
            .filter(|state| &state.column == column)
            .map(|state| state.direction)
    }
}

/// Sortable columns of the summary table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RankingColumn {
    Rank,
    Model,
    Total,
    Criterion(Criterion),
    PromptsEvaluated,
}

impl RankingColumn {
    /// Column order of the summary table.
    pub const ALL: [RankingColumn; 9] = [
        RankingColumn::Rank,
        RankingColumn::Model,
        RankingColumn::Total,
        RankingColumn::Criterion(Criterion::PromptAdherence),
        RankingColumn::Criterion(Criterion::StructuralCorrectness),
        RankingColumn::Criterion(Criterion::PhysicalPlausibility),
        RankingColumn::Criterion(Criterion::Completeness),
        RankingColumn::Criterion(Criterion::VisualCoherence),
        RankingColumn::PromptsEvaluated,
    ];

    /// Numeric value of a row in this column; `None` for the name column or a missing score.
    pub fn value(self, row: &ModelRanking) -> Option<f64> {
        match self {
            Self::Rank => Some(row.rank as f64),
            Self::Model => None,
            Self::Total => Some(row.avg_total_score),
            Self::Criterion(criterion) => row.criterion(criterion),
            Self::PromptsEvaluated => Some(row.prompts_evaluated as f64),
        }
    }

    pub fn is_score(self) -> bool {
        matches!(self, Self::Total | Self::Criterion(_))
    }
}

/// Sortable columns of the per-prompt table.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PromptColumn {
    Prompt,
    Model(String),
}

pub fn sort_rankings(rows: &[ModelRanking], state: &SortState<RankingColumn>) -> Vec<ModelRanking> {
    let mut sorted = rows.to_vec();
    match state.column {
        RankingColumn::Model => {
            let mut keyed: Vec<(String, ModelRanking)> = sorted
                .into_iter()
                .map(|row| (format_model_name(&row.model).to_lowercase(), row))
                .collect();
            keyed.sort_by(|(a, _), (b, _)| state.direction.apply(a.cmp(b)));
            sorted = keyed.into_iter().map(|(_, row)| row).collect();
        }
        column => {
            sorted.sort_by(|a, b| {
                let lhs = column.value(a).unwrap_or(0.0);
                let rhs = column.value(b).unwrap_or(0.0);
                state.direction.apply(lhs.total_cmp(&rhs))
            });
        }
    }
    sorted
}

pub fn sort_prompt_rows(
    rows: &[PromptScoreRow],
    state: &SortState<PromptColumn>,
) -> Vec<PromptScoreRow> {
    let mut sorted = rows.to_vec();
    match &state.column {
        PromptColumn::Prompt => {
            sorted.sort_by(|a, b| state.direction.apply(a.prompt.cmp(&b.prompt)));
        }
        PromptColumn::Model(model) => {
            sorted.sort_by(|a, b| {
                let lhs = a.score(model).unwrap_or(0.0);
                let rhs = b.score(model).unwrap_or(0.0);
                state.direction.apply(lhs.total_cmp(&rhs))
            });
        }
    }
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::CriterionScores;
    use std::collections::BTreeMap;

    fn ranking(model: &str, total: f64) -> ModelRanking {
        ModelRanking::from_averages(model, total, CriterionScores::default(), 1)
    }

    fn models(rows: &[ModelRanking]) -> Vec<&str> {
        rows.iter().map(|r| r.model.as_str()).collect()
    }

    #[test]
    fn selecting_toggles_then_resets() {
        let first = SortState::select(None, RankingColumn::Total);
        assert_eq!(first.direction, SortDirection::Ascending);
        let second = SortState::select(Some(&first), RankingColumn::Total);
        assert_eq!(second.direction, SortDirection::Descending);
        let third = SortState::select(Some(&second), RankingColumn::Total);
        assert_eq!(third.direction, SortDirection::Ascending);
        let other = SortState::select(Some(&second), RankingColumn::Model);
        assert_eq!(other, SortState::ascending(RankingColumn::Model));
    }

    #[test]
    fn equal_scores_keep_input_order() {
        let rows = vec![ranking("a", 80.0), ranking("b", 80.0), ranking("c", 60.0)];
        let asc = sort_rankings(&rows, &SortState::ascending(RankingColumn::Total));
        assert_eq!(models(&asc), vec!["c", "a", "b"]);

        let desc = SortState {
            column: RankingColumn::Total,
            direction: SortDirection::Descending,
        };
        assert_eq!(models(&sort_rankings(&rows, &desc)), vec!["a", "b", "c"]);
    }

    #[test]
    fn sorting_is_idempotent() {
        let rows = vec![ranking("x", 50.0), ranking("y", 70.0), ranking("z", 50.0)];
        let state = SortState::ascending(RankingColumn::Total);
        let once = sort_rankings(&rows, &state);
        let twice = sort_rankings(&once, &state);
        assert_eq!(once, twice);
    }

    #[test]
    fn names_compare_case_insensitively_on_display_form() {
        let rows = vec![
            ranking("zeta-model", 1.0),
            ranking("Alpha_model", 1.0),
            ranking("beta", 1.0),
        ];
        let sorted = sort_rankings(&rows, &SortState::ascending(RankingColumn::Model));
        assert_eq!(models(&sorted), vec!["Alpha_model", "beta", "zeta-model"]);
    }

    #[test]
    fn missing_criterion_sorts_as_zero() {
        let mut missing = ranking("missing", 1.0);
        missing.avg_completeness = None;
        let mut present = ranking("present", 1.0);
        present.avg_completeness = Some(10.0);
        let rows = vec![present, missing];
        let sorted = sort_rankings(
            &rows,
            &SortState::ascending(RankingColumn::Criterion(Criterion::Completeness)),
        );
        assert_eq!(models(&sorted), vec!["missing", "present"]);
    }

    #[test]
    fn prompt_rows_sort_by_number_or_model_score() {
        let row = |prompt: u32, score: Option<f64>| PromptScoreRow {
            prompt,
            prompt_text: String::new(),
            scores: score
                .map(|s| BTreeMap::from([("alpha".to_string(), s)]))
                .unwrap_or_default(),
        };
        let rows = vec![row(10, Some(40.0)), row(2, None), row(3, Some(40.0))];

        let by_number = sort_prompt_rows(
            &rows,
            &SortState {
                column: PromptColumn::Prompt,
                direction: SortDirection::Descending,
            },
        );
        let numbers: Vec<u32> = by_number.iter().map(|r| r.prompt).collect();
        assert_eq!(numbers, vec![10, 3, 2]);

        let by_model = sort_prompt_rows(
            &rows,
            &SortState::ascending(PromptColumn::Model("alpha".into())),
        );
        let numbers: Vec<u32> = by_model.iter().map(|r| r.prompt).collect();
        assert_eq!(numbers, vec![2, 10, 3]);
    }
}
