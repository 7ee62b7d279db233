//! Active judge selection.

use std::collections::BTreeSet;

use super::error::AggregateError;

/// The judge universe plus the subset currently included in aggregation.
///
/// A selection over a non-empty universe never becomes empty: the operations
/// that would deactivate the last judge return [`AggregateError::NoActiveJudges`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct JudgeSelection {
    universe: Vec<String>,
    active: BTreeSet<String>,
}

impl JudgeSelection {
    /// Every judge active.
    pub fn all(universe: Vec<String>) -> Self {
        let active = universe.iter().cloned().collect();
        Self { universe, active }
    }

    pub fn universe(&self) -> &[String] {
        &self.universe
    }

    pub fn is_active(&self, judge: &str) -> bool {
        self.active.contains(judge)
    }

    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    pub fn is_all_active(&self) -> bool {
        self.active.len() == self.universe.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Active judges in universe order.
    pub fn active_judges(&self) -> Vec<&str> {
        self.universe
            .iter()
            .filter(|judge| self.active.contains(*judge))
            .map(String::as_str)
            .collect()
    }

    pub fn active_set(&self) -> &BTreeSet<String> {
        &self.active
    }

    /// Flip one judge. Unknown judges are ignored.
    pub fn toggled(&self, judge: &str) -> Result<Self, AggregateError> {
        if !self.universe.iter().any(|j| j == judge) {
            return Ok(self.clone());
        }
        let mut next = self.clone();
        if !next.active.remove(judge) {
            next.active.insert(judge.to_string());
        }
        next.ensure_non_empty()?;
        Ok(next)
    }

    /// Replace the active set; judges outside the universe are dropped.
    pub fn with_active<I, S>(&self, judges: I) -> Result<Self, AggregateError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let active = judges
            .into_iter()
            .filter(|j| self.universe.iter().any(|u| u == j.as_ref()))
            .map(|j| j.as_ref().to_string())
            .collect();
        let next = Self {
            universe: self.universe.clone(),
            active,
        };
        next.ensure_non_empty()?;
        Ok(next)
    }

    pub fn reset(&self) -> Self {
        Self::all(self.universe.clone())
    }

    fn ensure_non_empty(&self) -> Result<(), AggregateError> {
        if self.active.is_empty() && !self.universe.is_empty() {
            Err(AggregateError::NoActiveJudges)
        } else {
            Ok(())
        }
    }
}
