// SPDX-FileCopyrightText: Copyright (C) 2024-2026 The melodex authors
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::collections::HashMap;

use crate::{Error, field::name};

use super::*;

fn weights(entries: &[(&str, WeightValue)]) -> HashMap<String, WeightValue> {
    entries
        .iter()
        .map(|(field, weight)| ((*field).to_owned(), *weight))
        .collect()
}

#[test]
fn weights_must_sum_to_one() {
    assert!(matches!(
        Weighting::new(
            Threshold::DEFAULT,
            weights(&[(name::TITLE, 0.5), (name::RELEASE_DATE, 0.4)]),
        ),
        Err(Error::InvalidWeightSum { .. })
    ));
    assert!(matches!(
        Weighting::new(
            Threshold::DEFAULT,
            weights(&[(name::TITLE, 0.5), (name::RELEASE_DATE, 0.6)]),
        ),
        Err(Error::InvalidWeightSum { .. })
    ));
    assert!(
        Weighting::new(
            Threshold::DEFAULT,
            weights(&[(name::TITLE, 0.5), (name::RELEASE_DATE, 0.5)]),
        )
        .is_ok()
    );
    // An empty configuration means unweighted averaging.
    assert!(Weighting::new(Threshold::DEFAULT, HashMap::new()).is_ok());
}

#[test]
fn weights_must_not_be_negative() {
    assert!(matches!(
        Weighting::new(
            Threshold::DEFAULT,
            weights(&[(name::TITLE, 1.5), (name::RELEASE_DATE, -0.5)]),
        ),
        Err(Error::NegativeWeight { .. })
    ));
}

#[test]
fn threshold_must_be_positive_and_finite() {
    assert!(matches!(
        Weighting::new(Threshold::new(0.0), HashMap::new()),
        Err(Error::InvalidThreshold { .. })
    ));
    assert!(matches!(
        Weighting::new(Threshold::new(ScoreValue::INFINITY), HashMap::new()),
        Err(Error::InvalidThreshold { .. })
    ));
}

#[test]
fn reduce_unweighted_is_rounded_mean() {
    let weighting = Weighting::default();
    let mut scores = FieldScores::default();
    scores.put(name::TITLE, 10.0);
    scores.put(name::RELEASE_DATE, 15.0);
    scores.put(name::ARTISTS, 20.0);
    assert_eq!(15.0, weighting.reduce(&scores));
}

#[test]
fn reduce_unweighted_empty_mapping_defaults_to_one() {
    // Deliberately not 0: an empty mapping must not signal "identical".
    assert_eq!(1.0, Weighting::default().reduce(&FieldScores::default()));
}

#[test]
fn reduce_weighted_sums_over_configured_fields() {
    let weighting = Weighting::new(
        Threshold::DEFAULT,
        weights(&[(name::TITLE, 0.75), (name::RELEASE_DATE, 0.25)]),
    )
    .unwrap();
    let mut scores = FieldScores::default();
    scores.put(name::TITLE, 40.0);
    scores.put(name::RELEASE_DATE, 80.0);
    // Unconfigured fields do not contribute.
    scores.put(name::ARTISTS, 100.0);
    assert_eq!(50.0, weighting.reduce(&scores));
}

#[test]
fn reduce_weighted_result_is_rounded() {
    let weighting = Weighting::new(
        Threshold::DEFAULT,
        weights(&[(name::TITLE, 0.5), (name::RELEASE_DATE, 0.5)]),
    )
    .unwrap();
    let mut scores = FieldScores::default();
    scores.put(name::TITLE, 33.0);
    scores.put(name::RELEASE_DATE, 33.5);
    assert_eq!(33.0, weighting.reduce(&scores));
}

#[test]
fn field_scores_lookup() {
    let mut scores = FieldScores::default();
    assert!(scores.is_empty());
    scores.put(name::TITLE, 12.0);
    assert_eq!(1, scores.len());
    assert_eq!(Some(12.0), scores.get(name::TITLE));
    assert!(!scores.contains(name::RELEASE_DATE));
}
