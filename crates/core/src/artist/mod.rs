// SPDX-FileCopyrightText: Copyright (C) 2024-2026 The melodex authors
// SPDX-License-Identifier: AGPL-3.0-or-later

use crate::{playback::PlayCounts, prelude::*};

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum ArtistKind {
    #[default]
    Person,
    Group,
    Orchestra,
    Other,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Artist {
    pub uid: EntityUid,

    pub name: String,

    /// Alternative names the artist is also known as (unordered set).
    pub aliases: Vec<String>,

    /// Date of birth or founding.
    pub begin_at: Option<CalendarDate>,

    /// Date of death or dissolution.
    pub end_at: Option<CalendarDate>,

    /// Identifiers in external databases, e.g. MusicBrainz.
    pub external_ids: Vec<String>,

    /// Country or region of origin.
    pub origin: Option<String>,

    pub kind: Option<ArtistKind>,

    /// Uids of the genres assigned to this artist (unordered set).
    pub genres: Vec<EntityUid>,

    pub play_counts: PlayCounts,
}

#[derive(Copy, Clone, Debug)]
pub enum ArtistInvalidity {
    Uid(EntityUidInvalidity),
    NameEmpty,
    BeginAt(CalendarDateInvalidity),
    EndAt(CalendarDateInvalidity),
}

impl Validate for Artist {
    type Invalidity = ArtistInvalidity;

    fn validate(&self) -> ValidationResult<Self::Invalidity> {
        ValidationContext::new()
            .validate_with(&self.uid, Self::Invalidity::Uid)
            .invalidate_if(self.name.trim().is_empty(), Self::Invalidity::NameEmpty)
            .validate_with(&self.begin_at, Self::Invalidity::BeginAt)
            .validate_with(&self.end_at, Self::Invalidity::EndAt)
            .into()
    }
}
