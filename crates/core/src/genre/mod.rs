// SPDX-FileCopyrightText: Copyright (C) 2024-2026 The melodex authors
// SPDX-License-Identifier: AGPL-3.0-or-later

use crate::{playback::PlayCounts, prelude::*};

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Genre {
    pub uid: EntityUid,

    pub name: String,

    pub play_counts: PlayCounts,
}

#[derive(Copy, Clone, Debug)]
pub enum GenreInvalidity {
    Uid(EntityUidInvalidity),
    NameEmpty,
}

impl Validate for Genre {
    type Invalidity = GenreInvalidity;

    fn validate(&self) -> ValidationResult<Self::Invalidity> {
        ValidationContext::new()
            .validate_with(&self.uid, Self::Invalidity::Uid)
            .invalidate_if(self.name.trim().is_empty(), Self::Invalidity::NameEmpty)
            .into()
    }
}
