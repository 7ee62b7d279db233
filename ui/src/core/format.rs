//! Formatting helpers for presenting scores and model identifiers.

/// Marker shown for a cell no judge scored.
pub const NO_DATA: &str = "–";

/// `openai-gpt_5` → `Openai Gpt 5`.
pub fn format_model_name(name: &str) -> String {
    name.replace(['_', '-'], " ")
        .split(' ')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

/// The first `words` words of the display name, for narrow headers.
pub fn short_model_name(name: &str, words: usize) -> String {
    format_model_name(name)
        .split(' ')
        .take(words)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn format_score(value: f64) -> String {
    format!("{value:.1}")
}

pub fn format_optional_score(value: Option<f64>) -> String {
    value.map(format_score).unwrap_or_else(|| NO_DATA.to_string())
}

/// Three severity buckets at fixed thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    High,
    Mid,
    Low,
}

impl ScoreBand {
    pub fn of(score: f64) -> Self {
        if score >= 75.0 {
            Self::High
        } else if score >= 50.0 {
            Self::Mid
        } else {
            Self::Low
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Self::High => "score-high",
            Self::Mid => "score-mid",
            Self::Low => "score-low",
        }
    }

    /// Modifier for progress bars and total badges.
    pub fn fill_class(self) -> &'static str {
        match self {
            Self::High => "score-fill--high",
            Self::Mid => "score-fill--mid",
            Self::Low => "score-fill--low",
        }
    }
}
