// SPDX-FileCopyrightText: Copyright (C) 2024-2026 The melodex authors
// SPDX-License-Identifier: AGPL-3.0-or-later

use crate::{audio::DurationMs, music::TempoBpm, playback::PlayCounts, prelude::*};

/// Distinguishes original recordings from derived versions.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum TrackKind {
    #[default]
    Original,
    Version,
}

/// How a version track relates to its original.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum VersionKind {
    #[default]
    Remix,
    Acoustic,
    Live,
    Cover,
    Instrumental,
}

/// Fields that only exist on version tracks, e.g. the acoustic
/// rendition or a remix of an original recording.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct TrackVersion {
    /// Uids of the artists who created this version (unordered set).
    pub artists: Vec<EntityUid>,

    /// Short label identifying the version, e.g. "Acoustic" or
    /// "Radio Edit".
    pub token: String,

    pub kind: VersionKind,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Track {
    pub uid: EntityUid,

    pub title: String,

    /// Title of an unlisted recording appended to this track, if any.
    pub hidden_track_title: Option<String>,

    pub kind: TrackKind,

    /// Present if and only if `kind` is [`TrackKind::Version`].
    pub version: Option<TrackVersion>,

    pub bpm: Option<TempoBpm>,

    /// Uids of the main artists (unordered set).
    pub main_artists: Vec<EntityUid>,

    /// Uids of the featured artists (unordered set).
    pub featured_artists: Vec<EntityUid>,

    /// Uids of the producers (unordered set).
    pub producers: Vec<EntityUid>,

    /// Uids of the genres assigned to this track (unordered set).
    pub genres: Vec<EntityUid>,

    pub duration: Option<DurationMs>,

    pub play_counts: PlayCounts,
}

impl Track {
    /// Returns the version fields of a version track.
    ///
    /// `None` for original tracks.
    #[must_use]
    pub fn version(&self) -> Option<&TrackVersion> {
        debug_assert!((self.kind == TrackKind::Version) == self.version.is_some());
        self.version.as_ref()
    }
}

#[derive(Copy, Clone, Debug)]
pub enum TrackInvalidity {
    Uid(EntityUidInvalidity),
    TitleEmpty,
    VersionWithoutKind,
    KindWithoutVersion,
    VersionTokenEmpty,
    Bpm(crate::music::TempoBpmInvalidity),
    Duration(crate::audio::DurationMsInvalidity),
}

impl Validate for Track {
    type Invalidity = TrackInvalidity;

    fn validate(&self) -> ValidationResult<Self::Invalidity> {
        ValidationContext::new()
            .validate_with(&self.uid, Self::Invalidity::Uid)
            .invalidate_if(self.title.trim().is_empty(), Self::Invalidity::TitleEmpty)
            .invalidate_if(
                self.kind != TrackKind::Version && self.version.is_some(),
                Self::Invalidity::VersionWithoutKind,
            )
            .invalidate_if(
                self.kind == TrackKind::Version && self.version.is_none(),
                Self::Invalidity::KindWithoutVersion,
            )
            .invalidate_if(
                self.version
                    .as_ref()
                    .is_some_and(|version| version.token.trim().is_empty()),
                Self::Invalidity::VersionTokenEmpty,
            )
            .validate_with(&self.bpm, Self::Invalidity::Bpm)
            .validate_with(&self.duration, Self::Invalidity::Duration)
            .into()
    }
}

#[cfg(test)]
mod tests;
