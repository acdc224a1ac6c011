// SPDX-FileCopyrightText: Copyright (C) 2024-2026 The melodex authors
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Field scorers.
//!
//! Stateless functions that compare two values of one attribute and
//! return a bounded dissimilarity score in `[0, threshold]`, where `0`
//! means identical.

use std::{collections::HashSet, hash::Hash};

use levenshtein::levenshtein;

use melodex_core::util::clock::CalendarDate;

use crate::{ScoreValue, weighting::Threshold};

pub mod name;

/// Penalty per character of edit distance in [`text`] scores.
pub const TEXT_EDIT_PENALTY: ScoreValue = 10.0;

/// Window for release date proximity in months.
pub const RELEASE_DATE_WINDOW_MONTHS: i64 = 6;

/// Window for artist begin/end date proximity in months.
pub const ARTIST_DATE_WINDOW_MONTHS: i64 = 12;

/// Window for tempo proximity in BPM.
pub const BPM_WINDOW: ScoreValue = 20.0;

/// Scores `0` if both values are equal, the full threshold otherwise.
///
/// This is the only scorer that handles absence generically: two
/// absent values are considered equal.
#[must_use]
pub fn equality<T>(lhs: Option<&T>, rhs: Option<&T>, threshold: Threshold) -> ScoreValue
where
    T: PartialEq + ?Sized,
{
    match (lhs, rhs) {
        (None, None) => 0.0,
        (Some(lhs), Some(rhs)) if lhs == rhs => 0.0,
        _ => threshold.value(),
    }
}

/// Case-insensitive edit distance between two texts.
///
/// Each differing character costs [`TEXT_EDIT_PENALTY`], capped at the
/// threshold.
#[must_use]
pub fn text(lhs: &str, rhs: &str, threshold: Threshold) -> ScoreValue {
    let lhs = lhs.to_lowercase();
    let rhs = rhs.to_lowercase();
    let edit_distance = levenshtein(&lhs, &rhs);
    threshold.cap(edit_distance as ScoreValue * TEXT_EDIT_PENALTY)
}

/// Set-overlap score ("reverse intersect").
///
/// The larger set size minus the intersection size, treating both
/// slices as unordered sets and capped at the threshold: `0` for equal
/// sets, up to the full size difference for disjoint ones.
#[must_use]
pub fn reverse_intersect<T>(lhs: &[T], rhs: &[T], threshold: Threshold) -> ScoreValue
where
    T: Eq + Hash,
{
    let lhs: HashSet<&T> = lhs.iter().collect();
    let rhs: HashSet<&T> = rhs.iter().collect();
    let intersect_count = lhs.intersection(&rhs).count();
    let max_count = lhs.len().max(rhs.len());
    debug_assert!(intersect_count <= max_count);
    threshold.cap((max_count - intersect_count) as ScoreValue)
}

/// Date proximity with linear decay over a window of months.
///
/// Equal dates score `0`. Otherwise the absolute number of months
/// between the dates scales the score linearly up to the threshold,
/// which is reached at `window_months` and beyond.
#[must_use]
pub fn date_proximity(
    lhs: CalendarDate,
    rhs: CalendarDate,
    window_months: i64,
    threshold: Threshold,
) -> ScoreValue {
    debug_assert!(window_months > 0);
    if lhs == rhs {
        return 0.0;
    }
    let months = (lhs.total_months() - rhs.total_months()).unsigned_abs();
    if months >= window_months.unsigned_abs() {
        return threshold.value();
    }
    months as ScoreValue * threshold.value() / window_months as ScoreValue
}

/// Numeric proximity with linear decay over an interval.
///
/// The absolute difference scales the score linearly up to the
/// threshold, which is reached at `window` and beyond.
#[must_use]
pub fn numeric_interval(
    lhs: ScoreValue,
    rhs: ScoreValue,
    window: ScoreValue,
    threshold: Threshold,
) -> ScoreValue {
    debug_assert!(window > 0.0);
    let diff = (lhs - rhs).abs();
    if diff >= window {
        return threshold.value();
    }
    diff * threshold.value() / window
}

#[cfg(test)]
mod tests;
