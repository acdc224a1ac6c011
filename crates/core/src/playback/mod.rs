// SPDX-FileCopyrightText: Copyright (C) 2024-2026 The melodex authors
// SPDX-License-Identifier: AGPL-3.0-or-later

use crate::util::clock::UtcInstantMs;

/// Playback statistics shared by all playable entities.
///
/// These counters describe listening behavior, not identity. They are
/// deliberately ignored by the similarity engine: two imports of the
/// same album remain near-duplicates no matter how often either copy
/// has been played.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct PlayCounts {
    pub times_played: u64,

    pub times_skipped: u64,

    pub last_played_at: Option<UtcInstantMs>,

    pub last_skipped_at: Option<UtcInstantMs>,
}
