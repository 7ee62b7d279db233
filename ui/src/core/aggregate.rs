//! Judge-filtered re-aggregation of raw evaluation records.
//!
//! Every displayed view goes through [`Aggregator::aggregate`]. With the raw
//! evaluations available the view is recomputed from the active judges (the
//! default selection being "all judges"); without them the pre-computed
//! reference view from the primary dataset is returned unchanged.

use std::collections::{BTreeMap, BTreeSet};

use super::error::AggregateError;
use super::judges::JudgeSelection;
use super::model::{
    BenchmarkDataset, CriterionScores, DetailedScore, DetailedScores, EvaluationsDocument,
    JudgeScore, ModelRanking, PromptScoreRow,
};

/// Rankings, per-prompt rows and detailed scores derived from one judge selection.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AggregatedView {
    /// Sorted by overall average, descending; `rank` is the 1-based position.
    pub rankings: Vec<ModelRanking>,
    pub prompt_rows: Vec<PromptScoreRow>,
    pub detailed: DetailedScores,
    /// Judges the view was computed from.
    pub judges: Vec<String>,
}

impl AggregatedView {
    pub fn detail(&self, model: &str, prompt: u32) -> Option<&DetailedScore> {
        self.detailed.get(model).and_then(|p| p.get(&prompt))
    }

    pub fn prompt_row(&self, prompt: u32) -> Option<&PromptScoreRow> {
        self.prompt_rows.iter().find(|row| row.prompt == prompt)
    }

    /// Model identifiers in ranking order.
    pub fn models(&self) -> Vec<String> {
        self.rankings.iter().map(|r| r.model.clone()).collect()
    }
}

/// Immutable inputs of the dashboard plus the derived model/prompt/judge universes.
#[derive(Debug, Clone, PartialEq)]
pub struct Aggregator {
    dataset: BenchmarkDataset,
    evaluations: Option<EvaluationsDocument>,
    models: Vec<String>,
    prompts: Vec<(u32, String)>,
    judges: Vec<String>,
}

impl Aggregator {
    pub fn new(dataset: BenchmarkDataset, evaluations: Option<EvaluationsDocument>) -> Self {
        let evaluations = evaluations.filter(|evals| {
            let usable = !evals.judges().is_empty();
            if !usable {
                tracing::warn!("evaluations document holds no judge scores; judge filter disabled");
            }
            usable
        });

        let mut models = dataset.models();
        let mut prompts: Vec<(u32, String)> = dataset
            .prompt_model_scores
            .iter()
            .map(|row| (row.prompt, row.prompt_text.clone()))
            .collect();
        let mut judges = dataset.metadata.judges_used.clone();

        if let Some(evals) = &evaluations {
            for model in evals.models() {
                if !models.contains(&model) {
                    models.push(model);
                }
            }

            for entry in &evals.prompts {
                match prompts.iter_mut().find(|(n, _)| *n == entry.prompt) {
                    Some((_, text)) => {
                        if !entry.prompt_text.is_empty() {
                            *text = entry.prompt_text.clone();
                        }
                    }
                    None => prompts.push((entry.prompt, entry.prompt_text.clone())),
                }
            }

            // Keep the dataset's judge order; append judges only seen in evaluations.
            let seen = evals.judges();
            judges.retain(|judge| seen.contains(judge));
            for judge in seen {
                if !judges.contains(&judge) {
                    judges.push(judge);
                }
            }
        }

        Self {
            dataset,
            evaluations,
            models,
            prompts,
            judges,
        }
    }

    pub fn dataset(&self) -> &BenchmarkDataset {
        &self.dataset
    }

    /// Whether judge-level recalculation is available.
    pub fn supports_judge_filter(&self) -> bool {
        self.evaluations.is_some()
    }

    pub fn judges(&self) -> &[String] {
        &self.judges
    }

    pub fn models(&self) -> &[String] {
        &self.models
    }

    /// `(number, text)` pairs in display order.
    pub fn prompts(&self) -> &[(u32, String)] {
        &self.prompts
    }

    pub fn prompt_text(&self, prompt: u32) -> Option<&str> {
        self.prompts
            .iter()
            .find(|(n, _)| *n == prompt)
            .map(|(_, text)| text.as_str())
            .filter(|text| !text.is_empty())
    }

    /// All judges active.
    pub fn default_selection(&self) -> JudgeSelection {
        if self.supports_judge_filter() {
            JudgeSelection::all(self.judges.clone())
        } else {
            JudgeSelection::default()
        }
    }

    pub fn aggregate(&self, selection: &JudgeSelection) -> Result<AggregatedView, AggregateError> {
        match &self.evaluations {
            None => Ok(self.reference_view()),
            Some(evaluations) => {
                if selection.is_empty() {
                    return Err(AggregateError::NoActiveJudges);
                }
                let mut view = aggregate_evaluations(
                    evaluations,
                    selection.active_set(),
                    &self.models,
                    &self.prompts,
                );
                view.judges = selection
                    .active_judges()
                    .into_iter()
                    .map(str::to_string)
                    .collect();
                Ok(view)
            }
        }
    }

    /// The primary dataset's pre-computed view.
    pub fn reference_view(&self) -> AggregatedView {
        let mut rankings = self.dataset.model_rankings.clone();
        for (idx, ranking) in rankings.iter_mut().enumerate() {
            if ranking.rank == 0 {
                ranking.rank = idx as u32 + 1;
            }
        }

        AggregatedView {
            rankings,
            prompt_rows: self.dataset.prompt_model_scores.clone(),
            detailed: self.dataset.detailed_aggregated_scores.clone(),
            judges: self.dataset.metadata.judges_used.clone(),
        }
    }
}

/// Average the scores of `active` judges for every (model, prompt) cell.
///
/// Cells no active judge scored are omitted. A model without any scored
/// prompt still gets a ranking row with zero averages.
pub fn aggregate_evaluations(
    evaluations: &EvaluationsDocument,
    active: &BTreeSet<String>,
    models: &[String],
    prompts: &[(u32, String)],
) -> AggregatedView {
    let mut detailed: DetailedScores = BTreeMap::new();
    let mut prompt_rows = Vec::with_capacity(prompts.len());

    for (prompt, text) in prompts {
        let mut scores = BTreeMap::new();
        if let Some(entry) = evaluations.prompt(*prompt) {
            for model in models {
                let Some(judges) = entry.scores.get(model) else {
                    continue;
                };
                if let Some(detail) = average_cell(judges, active) {
                    scores.insert(model.clone(), detail.total_score);
                    detailed
                        .entry(model.clone())
                        .or_default()
                        .insert(*prompt, detail);
                }
            }
        }
        prompt_rows.push(PromptScoreRow {
            prompt: *prompt,
            prompt_text: text.clone(),
            scores,
        });
    }

    let mut rankings: Vec<ModelRanking> = models
        .iter()
        .map(|model| {
            let cells: Vec<&DetailedScore> = detailed
                .get(model)
                .map(|prompts| prompts.values().collect())
                .unwrap_or_default();
            rank_row(model, &cells)
        })
        .collect();

    // Stable: equal totals keep model order.
    rankings.sort_by(|a, b| b.avg_total_score.total_cmp(&a.avg_total_score));
    for (idx, ranking) in rankings.iter_mut().enumerate() {
        ranking.rank = idx as u32 + 1;
    }

    tracing::debug!(
        judges = active.len(),
        models = rankings.len(),
        prompts = prompt_rows.len(),
        "recomputed rankings"
    );

    AggregatedView {
        rankings,
        prompt_rows,
        detailed,
        judges: Vec::new(),
    }
}

fn average_cell(
    judges: &BTreeMap<String, JudgeScore>,
    active: &BTreeSet<String>,
) -> Option<DetailedScore> {
    let scored: Vec<&JudgeScore> = judges
        .iter()
        .filter(|(judge, _)| active.contains(*judge))
        .map(|(_, score)| score)
        .collect();
    if scored.is_empty() {
        return None;
    }

    let n = scored.len() as f64;
    let criteria =
        CriterionScores::from_fn(|c| scored.iter().map(|s| s.criteria.get(c)).sum::<f64>() / n);
    let total_score = scored.iter().map(|s| s.total()).sum::<f64>() / n;

    Some(DetailedScore {
        criteria,
        total_score,
        judge_count: scored.len() as u32,
    })
}

fn rank_row(model: &str, cells: &[&DetailedScore]) -> ModelRanking {
    if cells.is_empty() {
        return ModelRanking::from_averages(model, 0.0, CriterionScores::default(), 0);
    }
    let n = cells.len() as f64;
    let averages =
        CriterionScores::from_fn(|c| cells.iter().map(|d| d.criteria.get(c)).sum::<f64>() / n);
    let total = cells.iter().map(|d| d.total_score).sum::<f64>() / n;
    ModelRanking::from_averages(model, total, averages, cells.len() as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::{DatasetMetadata, PromptEvaluations};

    fn uniform(value: f64) -> JudgeScore {
        JudgeScore {
            criteria: CriterionScores::from_fn(|_| value),
            total_score: Some(value),
        }
    }

    /// prompt → model → judge → uniform score
    fn evaluations(cells: &[(u32, &str, &str, f64)]) -> EvaluationsDocument {
        let mut prompts: BTreeMap<u32, PromptEvaluations> = BTreeMap::new();
        for (prompt, model, judge, value) in cells {
            prompts
                .entry(*prompt)
                .or_insert_with(|| PromptEvaluations {
                    prompt: *prompt,
                    prompt_text: format!("Prompt text {prompt}"),
                    scores: BTreeMap::new(),
                })
                .scores
                .entry(model.to_string())
                .or_default()
                .insert(judge.to_string(), uniform(*value));
        }
        EvaluationsDocument {
            prompts: prompts.into_values().collect(),
        }
    }

    fn dataset(models: &[&str], prompts: &[u32], judges: &[&str]) -> BenchmarkDataset {
        BenchmarkDataset {
            model_rankings: models
                .iter()
                .map(|m| ModelRanking::from_averages(m, 0.0, CriterionScores::default(), 0))
                .collect(),
            prompt_model_scores: prompts
                .iter()
                .map(|p| PromptScoreRow {
                    prompt: *p,
                    prompt_text: String::new(),
                    scores: BTreeMap::new(),
                })
                .collect(),
            detailed_aggregated_scores: BTreeMap::new(),
            metadata: DatasetMetadata {
                judges_used: judges.iter().map(|j| j.to_string()).collect(),
            },
        }
    }

    fn three_by_two_by_two() -> Aggregator {
        let mut cells = Vec::new();
        for (m_idx, model) in ["alpha", "beta", "gamma"].iter().enumerate() {
            for prompt in [1u32, 2] {
                let base = 40.0 + m_idx as f64 * 10.0 + prompt as f64;
                cells.push((prompt, *model, "judge-a", base));
                cells.push((prompt, *model, "judge-b", base + 20.0));
            }
        }
        Aggregator::new(
            dataset(&["alpha", "beta", "gamma"], &[1, 2], &["judge-a", "judge-b"]),
            Some(evaluations(&cells)),
        )
    }

    #[test]
    fn deactivating_a_judge_leaves_its_peer_raw_scores() {
        let aggregator = three_by_two_by_two();
        let full = aggregator
            .aggregate(&aggregator.default_selection())
            .unwrap();
        let narrowed = aggregator
            .aggregate(&aggregator.default_selection().toggled("judge-b").unwrap())
            .unwrap();

        for (m_idx, model) in ["alpha", "beta", "gamma"].iter().enumerate() {
            for prompt in [1u32, 2] {
                let raw_a = 40.0 + m_idx as f64 * 10.0 + prompt as f64;
                let both = full.detail(model, prompt).unwrap();
                let only_a = narrowed.detail(model, prompt).unwrap();
                assert_eq!(both.judge_count, 2);
                assert_eq!(only_a.judge_count, 1);
                assert!((both.total_score - (raw_a + 10.0)).abs() < 1e-9);
                assert!((only_a.total_score - raw_a).abs() < 1e-9);
                assert!((only_a.criteria.completeness - raw_a).abs() < 1e-9);
                assert_eq!(
                    narrowed.prompt_row(prompt).unwrap().score(model),
                    Some(only_a.total_score)
                );
            }
        }
        assert_eq!(narrowed.judges, vec!["judge-a".to_string()]);
    }

    #[test]
    fn inactive_judges_never_influence_results() {
        let agg = Aggregator::new(
            dataset(&["alpha"], &[1], &["a", "b", "outlier"]),
            Some(evaluations(&[
                (1, "alpha", "a", 60.0),
                (1, "alpha", "b", 80.0),
                (1, "alpha", "outlier", 0.0),
            ])),
        );
        let selection = agg.default_selection().toggled("outlier").unwrap();
        let view = agg.aggregate(&selection).unwrap();
        assert!((view.detail("alpha", 1).unwrap().total_score - 70.0).abs() < 1e-9);
        assert!((view.rankings[0].avg_total_score - 70.0).abs() < 1e-9);
    }

    #[test]
    fn cells_without_active_judges_are_omitted() {
        let agg = Aggregator::new(
            dataset(&["alpha", "beta"], &[1, 2], &["a", "b"]),
            Some(evaluations(&[
                (1, "alpha", "a", 70.0),
                (2, "alpha", "a", 50.0),
                (1, "beta", "a", 65.0),
                (2, "beta", "b", 90.0),
            ])),
        );
        let view = agg
            .aggregate(&agg.default_selection().toggled("b").unwrap())
            .unwrap();
        let row = view.prompt_row(2).unwrap();
        assert_eq!(row.score("beta"), None);
        assert!(!row.scores.contains_key("beta"));
        assert!(view.detail("beta", 2).is_none());

        let beta = view.rankings.iter().find(|r| r.model == "beta").unwrap();
        assert_eq!(beta.prompts_evaluated, 1);
        assert!((beta.avg_total_score - 65.0).abs() < 1e-9);
    }

    #[test]
    fn models_without_scores_rank_last_with_zero() {
        let agg = Aggregator::new(
            dataset(&["ghost", "alpha"], &[1], &["a"]),
            Some(evaluations(&[(1, "alpha", "a", 40.0)])),
        );
        let view = agg.aggregate(&agg.default_selection()).unwrap();
        let last = view.rankings.last().unwrap();
        assert_eq!(last.model, "ghost");
        assert_eq!(last.avg_total_score, 0.0);
        assert_eq!(last.prompts_evaluated, 0);
        assert_eq!(last.rank, 2);
    }

    #[test]
    fn tied_totals_keep_input_order_with_positional_ranks() {
        let agg = Aggregator::new(
            dataset(&["first", "second", "third"], &[1], &["a"]),
            Some(evaluations(&[
                (1, "first", "a", 90.0),
                (1, "second", "a", 90.0),
                (1, "third", "a", 70.0),
            ])),
        );
        let view = agg.aggregate(&agg.default_selection()).unwrap();
        let order: Vec<(&str, u32)> = view
            .rankings
            .iter()
            .map(|r| (r.model.as_str(), r.rank))
            .collect();
        assert_eq!(order, vec![("first", 1), ("second", 2), ("third", 3)]);
    }

    #[test]
    fn empty_selection_is_refused() {
        let agg = three_by_two_by_two();
        assert_eq!(
            agg.aggregate(&JudgeSelection::default()).unwrap_err(),
            AggregateError::NoActiveJudges
        );
    }

    #[test]
    fn without_evaluations_the_reference_view_is_served() {
        let mut data = dataset(&["alpha", "beta"], &[1], &["a"]);
        data.model_rankings[0].avg_total_score = 81.0;
        let agg = Aggregator::new(data.clone(), None);
        assert!(!agg.supports_judge_filter());
        let view = agg.aggregate(&agg.default_selection()).unwrap();
        assert_eq!(view.prompt_rows, data.prompt_model_scores);
        assert_eq!(view.rankings[0].rank, 1);
        assert_eq!(view.rankings[1].rank, 2);
    }

    #[test]
    fn judges_only_in_evaluations_join_the_universe() {
        let agg = Aggregator::new(
            dataset(&["alpha"], &[1], &["a", "retired"]),
            Some(evaluations(&[(1, "alpha", "a", 50.0), (1, "alpha", "z", 70.0)])),
        );
        assert_eq!(agg.judges(), &["a".to_string(), "z".to_string()]);
    }

    #[test]
    fn input_is_not_mutated() {
        let agg = three_by_two_by_two();
        let before = agg.clone();
        let _ = agg.aggregate(&agg.default_selection().toggled("judge-a").unwrap());
        assert_eq!(agg, before);
    }

    #[test]
    fn duplicate_prompt_entries_contribute_every_judge() {
        let raw = r#"{
            "1": {"scores": {"alpha": {"j1": {
                "prompt_adherence": 80, "structural_correctness": 80, "physical_plausibility": 80,
                "completeness": 80, "visual_coherence": 80, "total_score": 80}}}},
            "prompt_1": {"scores": {"alpha": {"j2": {
                "prompt_adherence": 40, "structural_correctness": 40, "physical_plausibility": 40,
                "completeness": 40, "visual_coherence": 40, "total_score": 40}}}}
        }"#;
        let agg = Aggregator::new(
            dataset(&["alpha"], &[1], &[]),
            Some(EvaluationsDocument::from_json(raw).unwrap()),
        );
        assert_eq!(agg.judges(), &["j1".to_string(), "j2".to_string()]);

        let all = agg.aggregate(&agg.default_selection()).unwrap();
        let cell = all.detail("alpha", 1).unwrap();
        assert_eq!(cell.judge_count, 2);
        assert!((cell.total_score - 60.0).abs() < 1e-9);

        let only_j2 = agg
            .aggregate(&agg.default_selection().toggled("j1").unwrap())
            .unwrap();
        assert!((only_j2.detail("alpha", 1).unwrap().total_score - 40.0).abs() < 1e-9);
    }
}
