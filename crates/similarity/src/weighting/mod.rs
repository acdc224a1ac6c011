// SPDX-FileCopyrightText: Copyright (C) 2024-2026 The melodex authors
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Score aggregation.
//!
//! Collects per-field scores into a mapping and reduces the mapping to
//! a single scalar, either by unweighted averaging or by configured
//! per-field weights.

use std::collections::HashMap;

use crate::{Error, Result, ScoreValue, WeightValue};

/// Key of a scored field.
///
/// See [`crate::field::name`] for the constants used by the built-in
/// comparators.
pub type FieldName = &'static str;

/// Upper bound of every per-field score and of the reduced scalar.
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct Threshold(ScoreValue);

impl Threshold {
    pub const DEFAULT_VALUE: ScoreValue = 100.0;

    pub const DEFAULT: Self = Self(Self::DEFAULT_VALUE);

    #[must_use]
    pub const fn new(value: ScoreValue) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn value(self) -> ScoreValue {
        let Self(value) = self;
        value
    }

    /// Bounds a score from above.
    #[must_use]
    pub fn cap(self, score: ScoreValue) -> ScoreValue {
        score.min(self.value())
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Mapping of field names to their dissimilarity scores.
///
/// Built fresh for every comparison, insertion-ordered.
#[derive(Clone, Debug, Default)]
pub struct FieldScores {
    scores: Vec<(FieldName, ScoreValue)>,
}

impl FieldScores {
    pub fn put(&mut self, field: FieldName, score: ScoreValue) {
        debug_assert!(self.get(field).is_none());
        debug_assert!(score >= 0.0);
        self.scores.push((field, score));
    }

    #[must_use]
    pub fn get(&self, field: FieldName) -> Option<ScoreValue> {
        self.scores
            .iter()
            .find_map(|(name, score)| (*name == field).then_some(*score))
    }

    #[must_use]
    pub fn contains(&self, field: FieldName) -> bool {
        self.get(field).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldName, ScoreValue)> + '_ {
        self.scores.iter().copied()
    }
}

/// Absolute tolerance when validating that weights sum to 1.
pub const WEIGHT_SUM_TOLERANCE: WeightValue = 1e-6;

/// Reduction of a field-score mapping to a single scalar.
///
/// Immutable after construction. An empty weight configuration
/// averages all scores equally; a non-empty configuration must sum to
/// 1 and reduces by weighted sum over the fields present in both the
/// mapping and the configuration.
#[derive(Clone, Debug, Default)]
pub struct Weighting {
    threshold: Threshold,
    weights: HashMap<String, WeightValue>,
}

impl Weighting {
    pub fn new(threshold: Threshold, weights: HashMap<String, WeightValue>) -> Result<Self> {
        if !(threshold.value() > 0.0 && threshold.value().is_finite()) {
            return Err(Error::InvalidThreshold {
                threshold: threshold.value(),
            });
        }
        if let Some((field, weight)) = weights.iter().find(|(_, weight)| **weight < 0.0) {
            return Err(Error::NegativeWeight {
                field: field.clone(),
                weight: *weight,
            });
        }
        if !weights.is_empty() {
            let sum: WeightValue = weights.values().sum();
            if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
                return Err(Error::InvalidWeightSum { sum });
            }
        }
        Ok(Self { threshold, weights })
    }

    #[must_use]
    pub fn unweighted(threshold: Threshold) -> Self {
        Self {
            threshold,
            weights: HashMap::new(),
        }
    }

    #[must_use]
    pub const fn threshold(&self) -> Threshold {
        self.threshold
    }

    #[must_use]
    pub fn is_weighted(&self) -> bool {
        !self.weights.is_empty()
    }

    /// Reduces a field-score mapping to a single rounded scalar.
    ///
    /// Unweighted reduction of an empty mapping yields `1`, not `0`:
    /// when no fields were compared at all, signaling "identical"
    /// would be misleading.
    #[must_use]
    pub fn reduce(&self, scores: &FieldScores) -> ScoreValue {
        if self.is_weighted() {
            scores
                .iter()
                .filter_map(|(field, score)| {
                    self.weights.get(field).map(|weight| weight * score)
                })
                .sum::<ScoreValue>()
                .round()
        } else if scores.is_empty() {
            1.0
        } else {
            let sum: ScoreValue = scores.iter().map(|(_, score)| score).sum();
            (sum / scores.len() as ScoreValue).round()
        }
    }
}

#[cfg(test)]
mod tests;
