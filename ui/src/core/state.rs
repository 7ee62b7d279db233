//! Interactive dashboard state as an immutable value.
//!
//! Components keep a `DashboardState` in a signal and replace it with the
//! result of each transition. A rejected transition returns the previous
//! data unchanged plus a [`Notice`].

use std::collections::BTreeSet;

use super::aggregate::{AggregatedView, Aggregator};
use super::error::AggregateError;
use super::insights::{generate_insights, Insight};
use super::judges::JudgeSelection;
use super::model::{ModelRanking, PromptScoreRow};
use super::sort::{sort_prompt_rows, sort_rankings, PromptColumn, RankingColumn, SortState};

/// User-facing message attached to a rejected transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    LastJudge,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardState {
    judges: JudgeSelection,
    view: AggregatedView,
    summary_sort: Option<SortState<RankingColumn>>,
    prompt_sort: Option<SortState<PromptColumn>>,
    hidden_models: BTreeSet<String>,
    notice: Option<Notice>,
}

impl DashboardState {
    /// All judges active, natural ordering, every model visible.
    pub fn initial(aggregator: &Aggregator) -> Result<Self, AggregateError> {
        let judges = aggregator.default_selection();
        let view = aggregator.aggregate(&judges)?;
        Ok(Self {
            judges,
            view,
            summary_sort: None,
            prompt_sort: None,
            hidden_models: BTreeSet::new(),
            notice: None,
        })
    }

    pub fn judges(&self) -> &JudgeSelection {
        &self.judges
    }

    pub fn view(&self) -> &AggregatedView {
        &self.view
    }

    pub fn notice(&self) -> Option<Notice> {
        self.notice
    }

    pub fn summary_sort(&self) -> Option<&SortState<RankingColumn>> {
        self.summary_sort.as_ref()
    }

    pub fn prompt_sort(&self) -> Option<&SortState<PromptColumn>> {
        self.prompt_sort.as_ref()
    }

    pub fn toggle_judge(&self, aggregator: &Aggregator, judge: &str) -> Self {
        let result = self
            .judges
            .toggled(judge)
            .and_then(|selection| aggregator.aggregate(&selection).map(|view| (selection, view)));
        self.apply_selection(result)
    }

    pub fn reset_judges(&self, aggregator: &Aggregator) -> Self {
        let selection = self.judges.reset();
        let result = aggregator.aggregate(&selection).map(|view| (selection, view));
        self.apply_selection(result)
    }

    fn apply_selection(
        &self,
        result: Result<(JudgeSelection, AggregatedView), AggregateError>,
    ) -> Self {
        match result {
            Ok((judges, view)) => {
                tracing::debug!(active = judges.active_count(), "judge selection changed");
                Self {
                    judges,
                    view,
                    notice: None,
                    ..self.clone()
                }
            }
            Err(AggregateError::NoActiveJudges) => {
                tracing::info!("refusing to deactivate the last active judge");
                Self {
                    notice: Some(Notice::LastJudge),
                    ..self.clone()
                }
            }
        }
    }

    pub fn dismiss_notice(&self) -> Self {
        Self {
            notice: None,
            ..self.clone()
        }
    }

    pub fn sort_summary(&self, column: RankingColumn) -> Self {
        Self {
            summary_sort: Some(SortState::select(self.summary_sort.as_ref(), column)),
            ..self.clone()
        }
    }

    pub fn sort_prompts(&self, column: PromptColumn) -> Self {
        Self {
            prompt_sort: Some(SortState::select(self.prompt_sort.as_ref(), column)),
            ..self.clone()
        }
    }

    /// Hiding a model also drops a prompt-table sort on its column.
    pub fn toggle_model_visibility(&self, model: &str) -> Self {
        let mut hidden_models = self.hidden_models.clone();
        let mut prompt_sort = self.prompt_sort.clone();
        if !hidden_models.remove(model) {
            hidden_models.insert(model.to_string());
            let sorted_by_model = prompt_sort
                .as_ref()
                .is_some_and(|sort| matches!(&sort.column, PromptColumn::Model(m) if m == model));
            if sorted_by_model {
                prompt_sort = None;
            }
        }
        Self {
            hidden_models,
            prompt_sort,
            ..self.clone()
        }
    }

    pub fn is_model_visible(&self, model: &str) -> bool {
        !self.hidden_models.contains(model)
    }

    /// Summary table rows in display order.
    pub fn summary_rows(&self) -> Vec<ModelRanking> {
        match &self.summary_sort {
            Some(state) => sort_rankings(&self.view.rankings, state),
            None => self.view.rankings.clone(),
        }
    }

    /// Per-prompt table rows in display order.
    pub fn prompt_rows(&self) -> Vec<PromptScoreRow> {
        match &self.prompt_sort {
            Some(state) => sort_prompt_rows(&self.view.prompt_rows, state),
            None => self.view.prompt_rows.clone(),
        }
    }

    /// Per-prompt table columns, in ranking order.
    pub fn visible_models(&self) -> Vec<String> {
        self.view
            .models()
            .into_iter()
            .filter(|model| self.is_model_visible(model))
            .collect()
    }

    pub fn insights(&self) -> Vec<Insight> {
        generate_insights(&self.view.rankings)
    }
}
