//! Summary insight cards derived from the current rankings.

use super::model::{Criterion, ModelRanking};

#[derive(Debug, Clone, PartialEq)]
pub enum Insight {
    TopPerformer {
        model: String,
        total: f64,
        adherence: Option<f64>,
        completeness: Option<f64>,
    },
    /// Criterion with the lowest cross-model mean.
    BiggestChallenge { criterion: Criterion, average: f64 },
    /// Criterion with the widest max-min spread.
    MostVariance { criterion: Criterion, spread: f64 },
    NeedsImprovement {
        model: String,
        total: f64,
        physics: Option<f64>,
        structure: Option<f64>,
    },
    StrongAcrossBoard { completeness: f64 },
    Recommendation { model: String, runners_up: Vec<String> },
}

impl Insight {
    pub fn icon(&self) -> &'static str {
        match self {
            Self::TopPerformer { .. } => "🏆",
            Self::BiggestChallenge { .. } => "⚠️",
            Self::MostVariance { .. } => "📈",
            Self::NeedsImprovement { .. } => "🔻",
            Self::StrongAcrossBoard { .. } => "✅",
            Self::Recommendation { .. } => "💡",
        }
    }

    pub fn tone(&self) -> &'static str {
        match self {
            Self::TopPerformer { .. } => "success",
            Self::BiggestChallenge { .. } => "warning",
            Self::MostVariance { .. } => "info",
            Self::NeedsImprovement { .. } => "danger",
            Self::StrongAcrossBoard { .. } => "primary",
            Self::Recommendation { .. } => "secondary",
        }
    }
}

/// Six cards in fixed order; none for an empty ranking.
pub fn generate_insights(rankings: &[ModelRanking]) -> Vec<Insight> {
    let (Some(top), Some(bottom)) = (rankings.first(), rankings.last()) else {
        return Vec::new();
    };

    let (challenge, challenge_avg) = lowest_mean_criterion(rankings);
    let (varied, spread) = widest_spread_criterion(rankings);

    vec![
        Insight::TopPerformer {
            model: top.model.clone(),
            total: top.avg_total_score,
            adherence: top.avg_prompt_adherence,
            completeness: top.avg_completeness,
        },
        Insight::BiggestChallenge {
            criterion: challenge,
            average: challenge_avg,
        },
        Insight::MostVariance {
            criterion: varied,
            spread,
        },
        Insight::NeedsImprovement {
            model: bottom.model.clone(),
            total: bottom.avg_total_score,
            physics: bottom.avg_physical_plausibility,
            structure: bottom.avg_structural_correctness,
        },
        Insight::StrongAcrossBoard {
            completeness: criterion_mean(rankings, Criterion::Completeness),
        },
        Insight::Recommendation {
            model: top.model.clone(),
            runners_up: rankings
                .iter()
                .skip(1)
                .take(3)
                .map(|r| r.model.clone())
                .collect(),
        },
    ]
}

/// Missing values count as zero.
fn criterion_mean(rankings: &[ModelRanking], criterion: Criterion) -> f64 {
    if rankings.is_empty() {
        return 0.0;
    }
    rankings
        .iter()
        .map(|r| r.criterion(criterion).unwrap_or(0.0))
        .sum::<f64>()
        / rankings.len() as f64
}

fn lowest_mean_criterion(rankings: &[ModelRanking]) -> (Criterion, f64) {
    let mut lowest = (Criterion::ALL[0], 100.0);
    for criterion in Criterion::ALL {
        let avg = criterion_mean(rankings, criterion);
        if avg < lowest.1 {
            lowest = (criterion, avg);
        }
    }
    lowest
}

fn widest_spread_criterion(rankings: &[ModelRanking]) -> (Criterion, f64) {
    let mut widest = (Criterion::ALL[0], 0.0);
    for criterion in Criterion::ALL {
        let values: Vec<f64> = rankings.iter().filter_map(|r| r.criterion(criterion)).collect();
        if values.is_empty() {
            continue;
        }
        let max = values.iter().copied().fold(f64::MIN, f64::max);
        let min = values.iter().copied().fold(f64::MAX, f64::min);
        if max - min > widest.1 {
            widest = (criterion, max - min);
        }
    }
    widest
}
