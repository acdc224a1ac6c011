// SPDX-FileCopyrightText: Copyright (C) 2024-2026 The melodex authors
// SPDX-License-Identifier: AGPL-3.0-or-later

use melodex_core::{Album, EntityUid, Genre, Track};

use super::*;

fn genre(name: &str) -> Genre {
    Genre {
        uid: EntityUid::random(),
        name: name.into(),
        ..Default::default()
    }
}

fn album(title: &str) -> Album {
    Album {
        uid: EntityUid::random(),
        title: title.into(),
        ..Default::default()
    }
}

#[test]
fn compare_entities_of_the_same_kind() {
    let provider = SimilarityProvider::default();
    let lhs = genre("Rock");
    let rhs = genre("Rock & Roll");
    let distance = provider
        .compare(EntityRef::from(&lhs), EntityRef::from(&rhs))
        .unwrap();
    assert!(distance > 0.0);
}

#[test]
fn compare_entities_of_different_kinds_fails() {
    let provider = SimilarityProvider::default();
    let genre = genre("Rock");
    let track = Track::default();
    assert!(matches!(
        provider.compare(EntityRef::from(&genre), EntityRef::from(&track)),
        Err(Error::EntityKindMismatch {
            lhs: EntityKind::Genre,
            rhs: EntityKind::Track,
        })
    ));
}

#[test]
fn measure_pairs_candidate_with_distance() {
    let provider = SimilarityProvider::default();
    let base = album("Some Album");
    let candidate = album("Some Album");
    let measure = provider.measure_against(EntityRef::from(&base));
    let measured = measure.measure(EntityRef::from(&candidate)).unwrap();
    assert_eq!(candidate.uid, measured.candidate().uid());
    assert!(measured.distance() >= 0.0);
}

#[test]
fn rank_candidates_sorts_by_ascending_distance() {
    let provider = SimilarityProvider::default();
    let base = album("One Title");
    let near = album("One Title");
    let similar = album("One Titles");
    let far = album("Completely Different Thing");
    let candidates = [&far, &near, &similar].map(EntityRef::from);

    let ranked = rank_candidates(
        &provider,
        EntityRef::from(&base),
        candidates,
        NonZeroUsize::MIN.saturating_add(2),
    )
    .unwrap();

    let uids: Vec<_> = ranked
        .iter()
        .map(|measured| measured.candidate().uid())
        .collect();
    assert_eq!(vec![near.uid, similar.uid, far.uid], uids);
    assert!(ranked[0].distance() <= ranked[1].distance());
    assert!(ranked[1].distance() <= ranked[2].distance());
}

#[test]
fn rank_candidates_excludes_the_base_itself() {
    let provider = SimilarityProvider::default();
    let base = album("Some Album");
    let other = album("Some Album");
    let candidates = [&base, &other].map(EntityRef::from);

    let ranked = rank_candidates(
        &provider,
        EntityRef::from(&base),
        candidates,
        NonZeroUsize::MIN,
    )
    .unwrap();

    assert_eq!(1, ranked.len());
    assert_eq!(other.uid, ranked[0].candidate().uid());
}

#[test]
fn rank_candidates_truncates_to_max_results() {
    let provider = SimilarityProvider::default();
    let base = album("Some Album");
    let candidates: Vec<_> = (0..10).map(|_| album("Some Album")).collect();
    let refs: Vec<_> = candidates.iter().map(EntityRef::from).collect();

    let ranked = rank_candidates(
        &provider,
        EntityRef::from(&base),
        refs,
        NonZeroUsize::MIN.saturating_add(3),
    )
    .unwrap();

    assert_eq!(4, ranked.len());
}
