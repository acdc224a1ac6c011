// SPDX-FileCopyrightText: Copyright (C) 2024-2026 The melodex authors
// SPDX-License-Identifier: AGPL-3.0-or-later

use crate::{playback::PlayCounts, prelude::*};

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Playlist {
    pub uid: EntityUid,

    pub name: String,

    /// Uids of the contained tracks.
    ///
    /// The playback order is irrelevant for similarity scoring, which
    /// treats the tracks as an unordered set.
    pub tracks: Vec<EntityUid>,

    pub play_counts: PlayCounts,
}

#[derive(Copy, Clone, Debug)]
pub enum PlaylistInvalidity {
    Uid(EntityUidInvalidity),
    NameEmpty,
}

impl Validate for Playlist {
    type Invalidity = PlaylistInvalidity;

    fn validate(&self) -> ValidationResult<Self::Invalidity> {
        ValidationContext::new()
            .validate_with(&self.uid, Self::Invalidity::Uid)
            .invalidate_if(self.name.trim().is_empty(), Self::Invalidity::NameEmpty)
            .into()
    }
}
