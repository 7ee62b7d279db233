//! Strongly-typed benchmark documents.
//!
//! The three JSON inputs are decoded into these records and validated once at
//! load time, so rendering code never has to inspect loosely-shaped values.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::DatasetError;

/// One of the five fixed scoring dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Criterion {
    PromptAdherence,
    StructuralCorrectness,
    PhysicalPlausibility,
    Completeness,
    VisualCoherence,
}

impl Criterion {
    pub const ALL: [Criterion; 5] = [
        Criterion::PromptAdherence,
        Criterion::StructuralCorrectness,
        Criterion::PhysicalPlausibility,
        Criterion::Completeness,
        Criterion::VisualCoherence,
    ];

    /// Field name used by judge scores and detailed scores.
    pub fn field(self) -> &'static str {
        match self {
            Self::PromptAdherence => "prompt_adherence",
            Self::StructuralCorrectness => "structural_correctness",
            Self::PhysicalPlausibility => "physical_plausibility",
            Self::Completeness => "completeness",
            Self::VisualCoherence => "visual_coherence",
        }
    }

    pub fn weight(self) -> f64 {
        match self {
            Self::PromptAdherence => 0.30,
            Self::StructuralCorrectness | Self::PhysicalPlausibility => 0.20,
            Self::Completeness | Self::VisualCoherence => 0.15,
        }
    }

    pub fn weight_label(self) -> String {
        format!("{:.0}%", self.weight() * 100.0)
    }
}

/// The five criterion values of a single score.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CriterionScores {
    pub prompt_adherence: f64,
    pub structural_correctness: f64,
    pub physical_plausibility: f64,
    pub completeness: f64,
    pub visual_coherence: f64,
}

impl CriterionScores {
    pub fn from_fn(mut value: impl FnMut(Criterion) -> f64) -> Self {
        Self {
            prompt_adherence: value(Criterion::PromptAdherence),
            structural_correctness: value(Criterion::StructuralCorrectness),
            physical_plausibility: value(Criterion::PhysicalPlausibility),
            completeness: value(Criterion::Completeness),
            visual_coherence: value(Criterion::VisualCoherence),
        }
    }

    pub fn get(&self, criterion: Criterion) -> f64 {
        match criterion {
            Criterion::PromptAdherence => self.prompt_adherence,
            Criterion::StructuralCorrectness => self.structural_correctness,
            Criterion::PhysicalPlausibility => self.physical_plausibility,
            Criterion::Completeness => self.completeness,
            Criterion::VisualCoherence => self.visual_coherence,
        }
    }

    pub fn weighted_total(&self) -> f64 {
        Criterion::ALL
            .iter()
            .map(|c| self.get(*c) * c.weight())
            .sum()
    }

    fn validate(&self, context: &str) -> Result<(), DatasetError> {
        for criterion in Criterion::ALL {
            check_score(self.get(criterion), || {
                format!("{context} / {}", criterion.field())
            })?;
        }
        Ok(())
    }
}

/// Per-model aggregate row of the summary table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelRanking {
    pub model: String,
    #[serde(default)]
    pub rank: u32,
    pub avg_total_score: f64,
    #[serde(default)]
    pub avg_prompt_adherence: Option<f64>,
    #[serde(default)]
    pub avg_structural_correctness: Option<f64>,
    #[serde(default)]
    pub avg_physical_plausibility: Option<f64>,
    #[serde(default)]
    pub avg_completeness: Option<f64>,
    #[serde(default)]
    pub avg_visual_coherence: Option<f64>,
    #[serde(default, alias = "num_prompts", alias = "prompt_count")]
    pub prompts_evaluated: u32,
}

impl ModelRanking {
    pub fn criterion(&self, criterion: Criterion) -> Option<f64> {
        match criterion {
            Criterion::PromptAdherence => self.avg_prompt_adherence,
            Criterion::StructuralCorrectness => self.avg_structural_correctness,
            Criterion::PhysicalPlausibility => self.avg_physical_plausibility,
            Criterion::Completeness => self.avg_completeness,
            Criterion::VisualCoherence => self.avg_visual_coherence,
        }
    }

    pub(crate) fn from_averages(
        model: &str,
        total: f64,
        averages: CriterionScores,
        prompts_evaluated: u32,
    ) -> Self {
        Self {
            model: model.to_string(),
            rank: 0,
            avg_total_score: total,
            avg_prompt_adherence: Some(averages.prompt_adherence),
            avg_structural_correctness: Some(averages.structural_correctness),
            avg_physical_plausibility: Some(averages.physical_plausibility),
            avg_completeness: Some(averages.completeness),
            avg_visual_coherence: Some(averages.visual_coherence),
            prompts_evaluated,
        }
    }
}

/// One row of the per-prompt table: the average score of each model.
///
/// On the wire model scores are sibling keys of `prompt` and `prompt_text`;
/// non-numeric siblings are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "PromptRowWire", into = "PromptRowWire")]
pub struct PromptScoreRow {
    pub prompt: u32,
    pub prompt_text: String,
    pub scores: BTreeMap<String, f64>,
}

impl PromptScoreRow {
    pub fn score(&self, model: &str) -> Option<f64> {
        self.scores.get(model).copied()
    }
}

#[derive(Serialize, Deserialize)]
struct PromptRowWire {
    prompt: u32,
    #[serde(default)]
    prompt_text: String,
    #[serde(flatten)]
    rest: BTreeMap<String, Value>,
}

impl From<PromptRowWire> for PromptScoreRow {
    fn from(wire: PromptRowWire) -> Self {
        let scores = wire
            .rest
            .into_iter()
            .filter_map(|(model, value)| value.as_f64().map(|score| (model, score)))
            .collect();
        Self {
            prompt: wire.prompt,
            prompt_text: wire.prompt_text,
            scores,
        }
    }
}

impl From<PromptScoreRow> for PromptRowWire {
    fn from(row: PromptScoreRow) -> Self {
        Self {
            prompt: row.prompt,
            prompt_text: row.prompt_text,
            rest: row
                .scores
                .into_iter()
                .map(|(model, score)| (model, Value::from(score)))
                .collect(),
        }
    }
}

/// Averaged criterion scores for one (model, prompt) pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DetailedScore {
    #[serde(flatten)]
    pub criteria: CriterionScores,
    pub total_score: f64,
    #[serde(default, alias = "num_judges", alias = "judges")]
    pub judge_count: u32,
}

/// model → prompt number → detailed score.
pub type DetailedScores = BTreeMap<String, BTreeMap<u32, DetailedScore>>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DatasetMetadata {
    #[serde(default)]
    pub judges_used: Vec<String>,
}

/// The mandatory `benchmark_final.json` document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkDataset {
    pub model_rankings: Vec<ModelRanking>,
    pub prompt_model_scores: Vec<PromptScoreRow>,
    #[serde(default)]
    pub detailed_aggregated_scores: DetailedScores,
    #[serde(default)]
    pub metadata: DatasetMetadata,
}

impl BenchmarkDataset {
    pub fn from_json(raw: &str) -> Result<Self, DatasetError> {
        let dataset: Self = serde_json::from_str(raw)?;
        dataset.validate()?;
        Ok(dataset)
    }

    pub fn validate(&self) -> Result<(), DatasetError> {
        for ranking in &self.model_rankings {
            check_model(&ranking.model, "model_rankings")?;
            check_score(ranking.avg_total_score, || ranking.model.clone())?;
            for criterion in Criterion::ALL {
                if let Some(value) = ranking.criterion(criterion) {
                    check_score(value, || format!("{} / {}", ranking.model, criterion.field()))?;
                }
            }
        }

        for row in &self.prompt_model_scores {
            check_prompt(row.prompt, "prompt_model_scores")?;
            for (model, score) in &row.scores {
                check_score(*score, || format!("prompt {} / {model}", row.prompt))?;
            }
        }

        for (model, prompts) in &self.detailed_aggregated_scores {
            check_model(model, "detailed_aggregated_scores")?;
            for (prompt, detail) in prompts {
                let context = format!("{model} / prompt {prompt}");
                check_prompt(*prompt, &context)?;
                detail.criteria.validate(&context)?;
                check_score(detail.total_score, || context.clone())?;
            }
        }

        Ok(())
    }

    /// Model identifiers in ranking order.
    pub fn models(&self) -> Vec<String> {
        self.model_rankings.iter().map(|r| r.model.clone()).collect()
    }
}

/// Optional narrative document (`benchmark_insights.json`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InsightsDocument {
    #[serde(default)]
    pub key_findings: Vec<String>,
    #[serde(default)]
    pub prompt_breakdowns: Vec<PromptBreakdown>,
}

impl InsightsDocument {
    pub fn from_json(raw: &str) -> Result<Self, DatasetError> {
        let document: Self = serde_json::from_str(raw)?;
        for breakdown in &document.prompt_breakdowns {
            check_prompt(breakdown.prompt_num, "prompt_breakdowns")?;
        }
        Ok(document)
    }

    pub fn is_empty(&self) -> bool {
        self.key_findings.is_empty() && self.prompt_breakdowns.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromptBreakdown {
    pub prompt_num: u32,
    #[serde(default)]
    pub prompt_text: String,
    pub winner: String,
    pub loser: String,
    #[serde(default)]
    pub analysis: String,
    #[serde(default)]
    pub key_observation: String,
}

/// Score a single judge assigned to one (model, prompt) pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JudgeScore {
    #[serde(flatten)]
    pub criteria: CriterionScores,
    #[serde(default)]
    pub total_score: Option<f64>,
}

impl JudgeScore {
    /// Overall score; derived from the criterion weights when the judge omitted it.
    pub fn total(&self) -> f64 {
        self.total_score
            .unwrap_or_else(|| self.criteria.weighted_total())
    }
}

/// Raw judge scores for one prompt.
#[derive(Debug, Clone, PartialEq)]
pub struct PromptEvaluations {
    pub prompt: u32,
    pub prompt_text: String,
    /// model → judge → score
    pub scores: BTreeMap<String, BTreeMap<String, JudgeScore>>,
}

#[derive(Deserialize)]
struct PromptEvaluationsWire {
    #[serde(default)]
    prompt_text: String,
    #[serde(default, alias = "evaluations", alias = "models")]
    scores: BTreeMap<String, BTreeMap<String, Option<JudgeScore>>>,
}

/// The optional `evaluations_by_prompt.json` document, ordered by prompt number.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EvaluationsDocument {
    pub prompts: Vec<PromptEvaluations>,
}

impl EvaluationsDocument {
    pub fn from_json(raw: &str) -> Result<Self, DatasetError> {
        let wire: BTreeMap<String, PromptEvaluationsWire> = serde_json::from_str(raw)?;
        // Keys like "3" and "prompt_3" name the same prompt; their scores are merged.
        let mut prompts: BTreeMap<u32, PromptEvaluations> = BTreeMap::new();

        for (key, entry) in wire {
            let prompt = parse_prompt_key(&key)?;
            let merged = match prompts.entry(prompt) {
                Entry::Vacant(slot) => slot.insert(PromptEvaluations {
                    prompt,
                    prompt_text: String::new(),
                    scores: BTreeMap::new(),
                }),
                Entry::Occupied(slot) => {
                    tracing::warn!(key = %key, prompt, "merging duplicate evaluations entry");
                    slot.into_mut()
                }
            };
            if merged.prompt_text.is_empty() {
                merged.prompt_text = entry.prompt_text;
            }
            for (model, judges) in entry.scores {
                check_model(&model, &key)?;
                // A null judge entry means that judge produced no score.
                let judges: BTreeMap<String, JudgeScore> = judges
                    .into_iter()
                    .filter_map(|(judge, score)| score.map(|score| (judge, score)))
                    .collect();
                for (judge, score) in &judges {
                    let context = format!("prompt {prompt} / {model} / {judge}");
                    score.criteria.validate(&context)?;
                    if let Some(total) = score.total_score {
                        check_score(total, || context.clone())?;
                    }
                }
                merged.scores.entry(model).or_default().extend(judges);
            }
        }

        Ok(Self {
            prompts: prompts.into_values().collect(),
        })
    }

    pub fn prompt(&self, prompt: u32) -> Option<&PromptEvaluations> {
        self.prompts.iter().find(|p| p.prompt == prompt)
    }

    /// Judge identifiers, walking prompts in ascending number and, within a
    /// prompt, models and judges in sorted order.
    pub fn judges(&self) -> Vec<String> {
        let mut seen = Vec::new();
        for prompt in &self.prompts {
            for judges in prompt.scores.values() {
                for judge in judges.keys() {
                    if !seen.contains(judge) {
                        seen.push(judge.clone());
                    }
                }
            }
        }
        seen
    }

    /// Model identifiers, walking prompts in ascending number and sorted within each.
    pub fn models(&self) -> Vec<String> {
        let mut seen = Vec::new();
        for prompt in &self.prompts {
            for model in prompt.scores.keys() {
                if !seen.contains(model) {
                    seen.push(model.clone());
                }
            }
        }
        seen
    }
}

/// Accepts `"3"`, `"prompt_3"` and `"prompt03"`.
pub fn parse_prompt_key(key: &str) -> Result<u32, DatasetError> {
    let digits = key.trim_start_matches(|c: char| !c.is_ascii_digit());
    let number: u32 = digits
        .parse()
        .map_err(|_| DatasetError::PromptKey(key.to_string()))?;
    check_prompt(number, key)?;
    Ok(number)
}

fn check_score(value: f64, context: impl FnOnce() -> String) -> Result<(), DatasetError> {
    if value.is_finite() && (0.0..=100.0).contains(&value) {
        Ok(())
    } else {
        Err(DatasetError::ScoreOutOfRange {
            context: context(),
            value,
        })
    }
}

fn check_prompt(prompt: u32, context: &str) -> Result<(), DatasetError> {
    if prompt == 0 {
        Err(DatasetError::PromptNumber(context.to_string()))
    } else {
        Ok(())
    }
}

fn check_model(model: &str, context: &str) -> Result<(), DatasetError> {
    if model.trim().is_empty() {
        Err(DatasetError::EmptyModel(context.to_string()))
    } else {
        Ok(())
    }
}
