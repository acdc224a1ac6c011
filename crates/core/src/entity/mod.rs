// SPDX-FileCopyrightText: Copyright (C) 2024-2026 The melodex authors
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::{fmt, str::FromStr};

use ulid::Ulid;

use crate::prelude::*;

///////////////////////////////////////////////////////////////////////
// EntityUid
///////////////////////////////////////////////////////////////////////

/// Opaque, globally unique identifier of a catalog entity.
///
/// Entities imported independently receive distinct uids, even if they
/// describe the same real-world record. Detecting such near-duplicates
/// is the job of the similarity engine.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct EntityUid(Ulid);

impl EntityUid {
    #[must_use]
    pub fn random() -> Self {
        Self(Ulid::new())
    }

    #[must_use]
    pub const fn nil() -> Self {
        Self(Ulid::nil())
    }

    #[must_use]
    pub const fn is_nil(self) -> bool {
        self.0.is_nil()
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum EntityUidInvalidity {
    Nil,
}

impl Validate for EntityUid {
    type Invalidity = EntityUidInvalidity;

    fn validate(&self) -> ValidationResult<Self::Invalidity> {
        ValidationContext::new()
            .invalidate_if(self.is_nil(), Self::Invalidity::Nil)
            .into()
    }
}

impl fmt::Display for EntityUid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self(ulid) = self;
        fmt::Display::fmt(ulid, f)
    }
}

impl FromStr for EntityUid {
    type Err = ulid::DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ulid::from_str(s).map(Self)
    }
}

///////////////////////////////////////////////////////////////////////
// EntityKind
///////////////////////////////////////////////////////////////////////

/// The closed set of entity types stored in the catalog.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum EntityKind {
    Album,
    Artist,
    Track,
    Genre,
    Playlist,
}

#[cfg(test)]
mod tests;
