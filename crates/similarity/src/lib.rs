// SPDX-FileCopyrightText: Copyright (C) 2024-2026 The melodex authors
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Pairwise similarity scoring between catalog entities of the same
//! kind, for detecting near-duplicates from independent imports.
//!
//! A [`comparator::Comparator`] turns a pair of entities into a
//! mapping of per-field dissimilarity scores and reduces it to a
//! single bounded scalar: `0` means identical, values up to the
//! configured [`weighting::Threshold`] mean increasingly different.
//! [`provider::SimilarityProvider`] owns one comparator per entity
//! kind; [`provider::Measure`] pairs candidate entities with their
//! distance from a base entity so that callers can rank them.
//!
//! The engine holds no mutable state and performs no I/O. Grouping,
//! thresholding and persistence of duplicate-resolution outcomes are
//! the caller's responsibility.

use melodex_core::EntityKind;

pub mod comparator;
pub mod field;
pub mod provider;
pub mod weighting;

pub use self::{
    comparator::Comparator,
    provider::{EntityRef, Measure, Measured, SimilarityProvider, rank_candidates},
    weighting::{FieldName, FieldScores, Threshold, Weighting},
};

/// Dissimilarity score, non-negative and bounded by the threshold.
pub type ScoreValue = f64;

/// Per-field contribution fraction in `[0, 1]`.
pub type WeightValue = f64;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid threshold {threshold}")]
    InvalidThreshold { threshold: ScoreValue },

    #[error("field weights sum to {sum} instead of 1")]
    InvalidWeightSum { sum: WeightValue },

    #[error("negative weight {weight} for field \"{field}\"")]
    NegativeWeight { field: String, weight: WeightValue },

    #[error("cannot compare entities of different kinds: {lhs} vs. {rhs}")]
    EntityKindMismatch { lhs: EntityKind, rhs: EntityKind },
}

pub type Result<T> = std::result::Result<T, Error>;
