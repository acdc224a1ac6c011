// SPDX-FileCopyrightText: Copyright (C) 2024-2026 The melodex authors
// SPDX-License-Identifier: AGPL-3.0-or-later

use crate::{playback::PlayCounts, prelude::*};

/// The release type of an album.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum AlbumKind {
    #[default]
    Album,
    Single,
    Ep,
    Compilation,
    Live,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Album {
    pub uid: EntityUid,

    pub title: String,

    pub kind: Option<AlbumKind>,

    pub released_at: Option<CalendarDate>,

    /// Uids of the album artists (unordered set).
    pub artists: Vec<EntityUid>,

    /// Uids of the tracks on this album (unordered set).
    pub tracks: Vec<EntityUid>,

    /// Uids of the genres assigned to this album (unordered set).
    pub genres: Vec<EntityUid>,

    pub play_counts: PlayCounts,
}

#[derive(Copy, Clone, Debug)]
pub enum AlbumInvalidity {
    Uid(EntityUidInvalidity),
    TitleEmpty,
    ReleasedAt(CalendarDateInvalidity),
}

impl Validate for Album {
    type Invalidity = AlbumInvalidity;

    fn validate(&self) -> ValidationResult<Self::Invalidity> {
        ValidationContext::new()
            .validate_with(&self.uid, Self::Invalidity::Uid)
            .invalidate_if(self.title.trim().is_empty(), Self::Invalidity::TitleEmpty)
            .validate_with(&self.released_at, Self::Invalidity::ReleasedAt)
            .into()
    }
}
