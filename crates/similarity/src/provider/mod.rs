// SPDX-FileCopyrightText: Copyright (C) 2024-2026 The melodex authors
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Comparator resolution and candidate measurement.

use std::{cmp::Ordering, num::NonZeroUsize};

use melodex_core::{Album, Artist, EntityKind, EntityUid, Genre, Playlist, Track};

use crate::{
    Error, Result, ScoreValue,
    comparator::{
        AlbumComparator, ArtistComparator, Comparator as _, GenreComparator, PlaylistComparator,
        TrackComparator,
    },
};

/// Borrowed view of an entity of any kind.
#[derive(Copy, Clone, Debug)]
pub enum EntityRef<'a> {
    Album(&'a Album),
    Artist(&'a Artist),
    Track(&'a Track),
    Genre(&'a Genre),
    Playlist(&'a Playlist),
}

impl EntityRef<'_> {
    #[must_use]
    pub const fn kind(self) -> EntityKind {
        match self {
            Self::Album(_) => EntityKind::Album,
            Self::Artist(_) => EntityKind::Artist,
            Self::Track(_) => EntityKind::Track,
            Self::Genre(_) => EntityKind::Genre,
            Self::Playlist(_) => EntityKind::Playlist,
        }
    }

    #[must_use]
    pub const fn uid(self) -> EntityUid {
        match self {
            Self::Album(album) => album.uid,
            Self::Artist(artist) => artist.uid,
            Self::Track(track) => track.uid,
            Self::Genre(genre) => genre.uid,
            Self::Playlist(playlist) => playlist.uid,
        }
    }
}

impl<'a> From<&'a Album> for EntityRef<'a> {
    fn from(album: &'a Album) -> Self {
        Self::Album(album)
    }
}

impl<'a> From<&'a Artist> for EntityRef<'a> {
    fn from(artist: &'a Artist) -> Self {
        Self::Artist(artist)
    }
}

impl<'a> From<&'a Track> for EntityRef<'a> {
    fn from(track: &'a Track) -> Self {
        Self::Track(track)
    }
}

impl<'a> From<&'a Genre> for EntityRef<'a> {
    fn from(genre: &'a Genre) -> Self {
        Self::Genre(genre)
    }
}

impl<'a> From<&'a Playlist> for EntityRef<'a> {
    fn from(playlist: &'a Playlist) -> Self {
        Self::Playlist(playlist)
    }
}

/// One comparator per entity kind.
///
/// The mapping from kind to comparator is total: every entity kind
/// the catalog stores is covered, there is no registry that could
/// miss one. Safe to share across threads without locking.
#[derive(Clone, Debug, Default)]
pub struct SimilarityProvider {
    pub album: AlbumComparator,
    pub artist: ArtistComparator,
    pub track: TrackComparator,
    pub genre: GenreComparator,
    pub playlist: PlaylistComparator,
}

impl SimilarityProvider {
    /// Compares two entities of the same kind.
    ///
    /// Fails with [`Error::EntityKindMismatch`] when the kinds differ.
    pub fn compare(&self, lhs: EntityRef<'_>, rhs: EntityRef<'_>) -> Result<ScoreValue> {
        match (lhs, rhs) {
            (EntityRef::Album(lhs), EntityRef::Album(rhs)) => Ok(self.album.compare(lhs, rhs)),
            (EntityRef::Artist(lhs), EntityRef::Artist(rhs)) => Ok(self.artist.compare(lhs, rhs)),
            (EntityRef::Track(lhs), EntityRef::Track(rhs)) => Ok(self.track.compare(lhs, rhs)),
            (EntityRef::Genre(lhs), EntityRef::Genre(rhs)) => Ok(self.genre.compare(lhs, rhs)),
            (EntityRef::Playlist(lhs), EntityRef::Playlist(rhs)) => {
                Ok(self.playlist.compare(lhs, rhs))
            }
            (lhs, rhs) => Err(Error::EntityKindMismatch {
                lhs: lhs.kind(),
                rhs: rhs.kind(),
            }),
        }
    }

    /// Binds a base entity for measuring candidates against it.
    #[must_use]
    pub const fn measure_against<'a>(&'a self, base: EntityRef<'a>) -> Measure<'a> {
        Measure {
            provider: self,
            base,
        }
    }
}

/// A candidate entity paired with its distance from a base entity.
///
/// Orders by distance so that collections of measured candidates can
/// be sorted ascending, nearest matches first.
#[derive(Copy, Clone, Debug)]
pub struct Measured<T> {
    distance: ScoreValue,
    candidate: T,
}

impl<T> Measured<T> {
    #[must_use]
    pub const fn distance(&self) -> ScoreValue {
        self.distance
    }

    #[must_use]
    pub const fn candidate(&self) -> &T {
        &self.candidate
    }

    #[must_use]
    pub fn into_candidate(self) -> T {
        self.candidate
    }
}

impl<T> PartialEq for Measured<T> {
    fn eq(&self, other: &Self) -> bool {
        self.distance == other.distance
    }
}

impl<T> Eq for Measured<T> {}

impl<T> PartialOrd for Measured<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Measured<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Distances are finite and non-negative by construction.
        self.distance
            .partial_cmp(&other.distance)
            .expect("finite distance")
    }
}

/// Measures the distance of candidate entities from a base entity.
#[derive(Copy, Clone, Debug)]
pub struct Measure<'a> {
    provider: &'a SimilarityProvider,
    base: EntityRef<'a>,
}

impl<'a> Measure<'a> {
    #[must_use]
    pub const fn base(&self) -> EntityRef<'a> {
        self.base
    }

    /// Pairs a candidate with its absolute distance from the base.
    pub fn measure<'c>(&self, candidate: EntityRef<'c>) -> Result<Measured<EntityRef<'c>>> {
        let distance = self.provider.compare(self.base, candidate)?.abs();
        log::trace!(
            "measured {kind} candidate {uid}: distance {distance}",
            kind = candidate.kind(),
            uid = candidate.uid(),
        );
        Ok(Measured {
            distance,
            candidate,
        })
    }
}

/// Ranks candidates by their distance from a base entity.
///
/// Measures every candidate, excluding the base itself when it is
/// among the candidates, and returns up to `max_results` of the
/// nearest ones, sorted by ascending distance.
pub fn rank_candidates<'c>(
    provider: &SimilarityProvider,
    base: EntityRef<'_>,
    candidates: impl IntoIterator<Item = EntityRef<'c>>,
    max_results: NonZeroUsize,
) -> Result<Vec<Measured<EntityRef<'c>>>> {
    let measure = provider.measure_against(base);
    let mut measured = Vec::new();
    for candidate in candidates {
        if candidate.uid() == base.uid() {
            continue;
        }
        measured.push(measure.measure(candidate)?);
    }
    measured.sort();
    measured.truncate(max_results.get());
    log::debug!(
        "ranked {count} {kind} candidate(s) against {uid}",
        count = measured.len(),
        kind = base.kind(),
        uid = base.uid(),
    );
    Ok(measured)
}

#[cfg(test)]
mod tests;
