//! Best/worst highlighting over the rows currently on screen.

use super::model::{ModelRanking, PromptScoreRow};
use super::sort::RankingColumn;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Highlight {
    Best,
    Worst,
    None,
}

impl Highlight {
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Best => "cell--best",
            Self::Worst => "cell--worst",
            Self::None => "",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extremes {
    pub best: f64,
    pub worst: f64,
}

impl Extremes {
    /// `None` when fewer than two values are present or all are equal.
    pub fn of<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = Option<f64>>,
    {
        let mut present = values.into_iter().flatten().peekable();
        let first = present.next()?;
        present.peek()?;
        let (best, worst) = present.fold((first, first), |(hi, lo), v| (hi.max(v), lo.min(v)));
        if best == worst {
            None
        } else {
            Some(Self { best, worst })
        }
    }

    pub fn classify(&self, value: Option<f64>) -> Highlight {
        match value {
            Some(v) if v == self.best => Highlight::Best,
            Some(v) if v == self.worst => Highlight::Worst,
            _ => Highlight::None,
        }
    }
}

/// Extremes of one score column over the visible summary rows.
pub fn column_extremes(rows: &[ModelRanking], column: RankingColumn) -> Option<Extremes> {
    if !column.is_score() {
        return None;
    }
    Extremes::of(rows.iter().map(|row| column.value(row)))
}

/// Extremes across the visible model cells of one prompt row.
pub fn row_extremes<S: AsRef<str>>(row: &PromptScoreRow, visible_models: &[S]) -> Option<Extremes> {
    Extremes::of(visible_models.iter().map(|m| row.score(m.as_ref())))
}
