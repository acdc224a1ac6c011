// SPDX-FileCopyrightText: Copyright (C) 2024-2026 The melodex authors
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Core domain model of the music catalog.
//!
//! All types are plain, passive data: loading and mutating them is the
//! responsibility of the (external) persistence layer. The similarity
//! engine only ever reads them.

pub mod audio;
pub mod music;
pub mod playback;
pub mod util;

mod entity;
pub use self::entity::{EntityKind, EntityUid, EntityUidInvalidity};

pub mod album;
pub use self::album::Album;

pub mod artist;
pub use self::artist::Artist;

pub mod track;
pub use self::track::Track;

pub mod genre;
pub use self::genre::Genre;

pub mod playlist;
pub use self::playlist::Playlist;

pub mod prelude {
    // Re-export main types and trait methods from semval
    pub use semval::{IsValid, Validate as _};
    pub(crate) use semval::prelude::*;

    pub(crate) use crate::{entity::*, util::clock::*};
}
