// SPDX-FileCopyrightText: Copyright (C) 2024-2026 The melodex authors
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Per-kind entity comparators.
//!
//! Each comparator builds its field-score mapping through a fixed
//! pipeline of layers shared across entity kinds (entity, playable,
//! genreable) followed by the kind-specific fields, then reduces the
//! mapping through its [`Weighting`].

use melodex_core::{Album, Artist, Genre, Playlist, Track};

use crate::{
    ScoreValue, field,
    field::name,
    weighting::{FieldName, FieldScores, Threshold, Weighting},
};

/// Compares two entities of the same kind.
///
/// Immutable after construction; every invocation builds a fresh
/// field-score mapping and holds no state between calls.
pub trait Comparator {
    type Entity;

    fn weighting(&self) -> &Weighting;

    /// Builds the per-field dissimilarity mapping for a pair of
    /// entities.
    fn field_scores(&self, lhs: &Self::Entity, rhs: &Self::Entity) -> FieldScores;

    /// Reduces the field-score mapping of a pair of entities to a
    /// single scalar in `[0, threshold]`.
    fn compare(&self, lhs: &Self::Entity, rhs: &Self::Entity) -> ScoreValue {
        self.weighting().reduce(&self.field_scores(lhs, rhs))
    }
}

/// The layers shared by all entity kinds.
mod layer {
    use melodex_core::EntityUid;

    use super::{FieldScores, Threshold, field, name};

    /// Every entity scores the equality of its uid.
    pub(super) fn entity(
        scores: &mut FieldScores,
        lhs: &EntityUid,
        rhs: &EntityUid,
        threshold: Threshold,
    ) {
        scores.put(name::UID, field::equality(Some(lhs), Some(rhs), threshold));
    }

    /// Playback statistics are deliberately excluded from similarity:
    /// how often an entity has been played or skipped says nothing
    /// about whether two records describe the same thing.
    pub(super) fn playable(_scores: &mut FieldScores) {}

    /// Genreable entities score the overlap of their genre sets.
    pub(super) fn genreable(
        scores: &mut FieldScores,
        lhs: &[EntityUid],
        rhs: &[EntityUid],
        threshold: Threshold,
    ) {
        scores.put(
            name::GENRES,
            field::reverse_intersect(lhs, rhs, threshold),
        );
    }
}

/// Scores an optional field.
///
/// Omitted from the mapping when absent on both sides, scored at the
/// full threshold when present on exactly one side.
fn score_optional<T>(
    scores: &mut FieldScores,
    field: FieldName,
    threshold: Threshold,
    lhs: Option<T>,
    rhs: Option<T>,
    score: impl FnOnce(T, T) -> ScoreValue,
) {
    match (lhs, rhs) {
        (None, None) => {}
        (Some(_), None) | (None, Some(_)) => scores.put(field, threshold.value()),
        (Some(lhs), Some(rhs)) => scores.put(field, score(lhs, rhs)),
    }
}

#[derive(Clone, Debug, Default)]
pub struct AlbumComparator {
    weighting: Weighting,
}

impl AlbumComparator {
    #[must_use]
    pub const fn new(weighting: Weighting) -> Self {
        Self { weighting }
    }
}

impl Comparator for AlbumComparator {
    type Entity = Album;

    fn weighting(&self) -> &Weighting {
        &self.weighting
    }

    fn field_scores(&self, lhs: &Album, rhs: &Album) -> FieldScores {
        let threshold = self.weighting.threshold();
        let mut scores = FieldScores::default();
        layer::entity(&mut scores, &lhs.uid, &rhs.uid, threshold);
        layer::playable(&mut scores);
        layer::genreable(&mut scores, &lhs.genres, &rhs.genres, threshold);
        scores.put(name::TITLE, field::text(&lhs.title, &rhs.title, threshold));
        scores.put(
            name::RELEASE_TYPE,
            field::equality(lhs.kind.as_ref(), rhs.kind.as_ref(), threshold),
        );
        score_optional(
            &mut scores,
            name::RELEASE_DATE,
            threshold,
            lhs.released_at,
            rhs.released_at,
            |lhs, rhs| {
                field::date_proximity(lhs, rhs, field::RELEASE_DATE_WINDOW_MONTHS, threshold)
            },
        );
        scores.put(
            name::ARTISTS,
            field::reverse_intersect(&lhs.artists, &rhs.artists, threshold),
        );
        scores.put(
            name::TRACKS,
            field::reverse_intersect(&lhs.tracks, &rhs.tracks, threshold),
        );
        scores
    }
}

#[derive(Clone, Debug, Default)]
pub struct ArtistComparator {
    weighting: Weighting,
}

impl ArtistComparator {
    #[must_use]
    pub const fn new(weighting: Weighting) -> Self {
        Self { weighting }
    }
}

impl Comparator for ArtistComparator {
    type Entity = Artist;

    fn weighting(&self) -> &Weighting {
        &self.weighting
    }

    fn field_scores(&self, lhs: &Artist, rhs: &Artist) -> FieldScores {
        let threshold = self.weighting.threshold();
        let mut scores = FieldScores::default();
        layer::entity(&mut scores, &lhs.uid, &rhs.uid, threshold);
        layer::playable(&mut scores);
        layer::genreable(&mut scores, &lhs.genres, &rhs.genres, threshold);
        scores.put(name::NAME, field::text(&lhs.name, &rhs.name, threshold));
        scores.put(
            name::ALIASES,
            field::reverse_intersect(&lhs.aliases, &rhs.aliases, threshold),
        );
        score_optional(
            &mut scores,
            name::BEGIN_DATE,
            threshold,
            lhs.begin_at,
            rhs.begin_at,
            |lhs, rhs| field::date_proximity(lhs, rhs, field::ARTIST_DATE_WINDOW_MONTHS, threshold),
        );
        score_optional(
            &mut scores,
            name::END_DATE,
            threshold,
            lhs.end_at,
            rhs.end_at,
            |lhs, rhs| field::date_proximity(lhs, rhs, field::ARTIST_DATE_WINDOW_MONTHS, threshold),
        );
        scores.put(
            name::EXTERNAL_IDS,
            field::equality(Some(&lhs.external_ids), Some(&rhs.external_ids), threshold),
        );
        scores.put(
            name::ORIGIN,
            field::equality(lhs.origin.as_ref(), rhs.origin.as_ref(), threshold),
        );
        scores.put(
            name::ARTIST_TYPE,
            field::equality(lhs.kind.as_ref(), rhs.kind.as_ref(), threshold),
        );
        scores
    }
}

#[derive(Clone, Debug, Default)]
pub struct TrackComparator {
    weighting: Weighting,
}

impl TrackComparator {
    #[must_use]
    pub const fn new(weighting: Weighting) -> Self {
        Self { weighting }
    }
}

impl Comparator for TrackComparator {
    type Entity = Track;

    fn weighting(&self) -> &Weighting {
        &self.weighting
    }

    fn field_scores(&self, lhs: &Track, rhs: &Track) -> FieldScores {
        let threshold = self.weighting.threshold();
        let mut scores = FieldScores::default();
        layer::entity(&mut scores, &lhs.uid, &rhs.uid, threshold);
        layer::playable(&mut scores);
        layer::genreable(&mut scores, &lhs.genres, &rhs.genres, threshold);
        scores.put(name::TITLE, field::text(&lhs.title, &rhs.title, threshold));
        score_optional(
            &mut scores,
            name::HIDDEN_TRACK_TITLE,
            threshold,
            lhs.hidden_track_title.as_deref(),
            rhs.hidden_track_title.as_deref(),
            |lhs, rhs| field::text(lhs, rhs, threshold),
        );
        scores.put(
            name::TRACK_TYPE,
            field::equality(Some(&lhs.kind), Some(&rhs.kind), threshold),
        );
        score_optional(
            &mut scores,
            name::BPM,
            threshold,
            lhs.bpm,
            rhs.bpm,
            |lhs, rhs| {
                field::numeric_interval(lhs.value(), rhs.value(), field::BPM_WINDOW, threshold)
            },
        );
        scores.put(
            name::MAIN_ARTISTS,
            field::reverse_intersect(&lhs.main_artists, &rhs.main_artists, threshold),
        );
        scores.put(
            name::FEATURED_ARTISTS,
            field::reverse_intersect(&lhs.featured_artists, &rhs.featured_artists, threshold),
        );
        scores.put(
            name::PRODUCERS,
            field::reverse_intersect(&lhs.producers, &rhs.producers, threshold),
        );
        // Version fields are only comparable between two version
        // tracks. With an original on either side they are omitted
        // entirely instead of scored as maximally dissimilar: the
        // track type field above already accounts for the mismatch.
        if let (Some(lhs), Some(rhs)) = (lhs.version(), rhs.version()) {
            scores.put(
                name::VERSION_ARTISTS,
                field::reverse_intersect(&lhs.artists, &rhs.artists, threshold),
            );
            scores.put(
                name::VERSION_TOKEN,
                field::text(&lhs.token, &rhs.token, threshold),
            );
            scores.put(
                name::VERSION_TYPE,
                field::equality(Some(&lhs.kind), Some(&rhs.kind), threshold),
            );
        }
        scores
    }
}

#[derive(Clone, Debug, Default)]
pub struct GenreComparator {
    weighting: Weighting,
}

impl GenreComparator {
    #[must_use]
    pub const fn new(weighting: Weighting) -> Self {
        Self { weighting }
    }
}

impl Comparator for GenreComparator {
    type Entity = Genre;

    fn weighting(&self) -> &Weighting {
        &self.weighting
    }

    fn field_scores(&self, lhs: &Genre, rhs: &Genre) -> FieldScores {
        let threshold = self.weighting.threshold();
        let mut scores = FieldScores::default();
        layer::entity(&mut scores, &lhs.uid, &rhs.uid, threshold);
        layer::playable(&mut scores);
        scores.put(name::NAME, field::text(&lhs.name, &rhs.name, threshold));
        scores
    }
}

#[derive(Clone, Debug, Default)]
pub struct PlaylistComparator {
    weighting: Weighting,
}

impl PlaylistComparator {
    #[must_use]
    pub const fn new(weighting: Weighting) -> Self {
        Self { weighting }
    }
}

impl Comparator for PlaylistComparator {
    type Entity = Playlist;

    fn weighting(&self) -> &Weighting {
        &self.weighting
    }

    fn field_scores(&self, lhs: &Playlist, rhs: &Playlist) -> FieldScores {
        let threshold = self.weighting.threshold();
        let mut scores = FieldScores::default();
        layer::entity(&mut scores, &lhs.uid, &rhs.uid, threshold);
        layer::playable(&mut scores);
        scores.put(name::NAME, field::text(&lhs.name, &rhs.name, threshold));
        scores.put(
            name::TRACKS,
            field::reverse_intersect(&lhs.tracks, &rhs.tracks, threshold),
        );
        scores
    }
}
