// SPDX-FileCopyrightText: Copyright (C) 2024-2026 The melodex authors
// SPDX-License-Identifier: AGPL-3.0-or-later

use super::*;

const THRESHOLD: Threshold = Threshold::DEFAULT;

#[test]
fn equality_of_values_and_absence() {
    assert_eq!(0.0, equality(Some(&1), Some(&1), THRESHOLD));
    assert_eq!(THRESHOLD.value(), equality(Some(&1), Some(&2), THRESHOLD));
    // Two absent values are equal.
    assert_eq!(0.0, equality::<i32>(None, None, THRESHOLD));
    assert_eq!(THRESHOLD.value(), equality(Some(&1), None, THRESHOLD));
    assert_eq!(THRESHOLD.value(), equality(None, Some(&1), THRESHOLD));
}

#[test]
fn text_is_case_insensitive() {
    assert_eq!(0.0, text("One Title", "one title", THRESHOLD));
}

#[test]
fn text_distance_is_monotonic_in_edit_distance() {
    let close = text("one title", "one titles", THRESHOLD);
    let far = text("one title", "similar title", THRESHOLD);
    let farthest = text("one title", "completely different thing", THRESHOLD);
    assert_eq!(TEXT_EDIT_PENALTY, close);
    assert!(close < far);
    assert!(far < farthest);
}

#[test]
fn text_distance_is_capped_at_threshold() {
    let threshold = Threshold::new(30.0);
    assert_eq!(
        threshold.value(),
        text("one title", "completely different thing", threshold)
    );
}

#[test]
fn reverse_intersect_of_equal_sets() {
    let a = ["rock", "pop"];
    let b = ["pop", "rock"];
    assert_eq!(0.0, reverse_intersect(&a, &b, THRESHOLD));
}

#[test]
fn reverse_intersect_of_disjoint_sets() {
    let a = ["a", "b"];
    let b = ["c"];
    // max(2, 1) - 0 overlapping
    assert_eq!(2.0, reverse_intersect(&a, &b, THRESHOLD));
    assert_eq!(2.0, reverse_intersect(&b, &a, THRESHOLD));
}

#[test]
fn reverse_intersect_of_partially_overlapping_sets() {
    let a = ["a", "b", "c"];
    let b = ["b", "c", "d", "e"];
    assert_eq!(2.0, reverse_intersect(&a, &b, THRESHOLD));
}

#[test]
fn reverse_intersect_ignores_duplicates() {
    let a = ["a", "a", "b"];
    let b = ["b", "a"];
    assert_eq!(0.0, reverse_intersect(&a, &b, THRESHOLD));
}

#[test]
fn date_proximity_window() {
    let base = CalendarDate::new_unchecked(20_240_615);
    // Equal dates are identical.
    assert_eq!(
        0.0,
        date_proximity(base, base, RELEASE_DATE_WINDOW_MONTHS, THRESHOLD)
    );
    // 3 months within a window of 6 scale linearly.
    let shifted = CalendarDate::new_unchecked(20_240_915);
    assert_eq!(
        3.0 * THRESHOLD.value() / 6.0,
        date_proximity(base, shifted, RELEASE_DATE_WINDOW_MONTHS, THRESHOLD)
    );
    // 7 months saturate the window of 6.
    let saturated = CalendarDate::new_unchecked(20_250_115);
    assert_eq!(
        THRESHOLD.value(),
        date_proximity(base, saturated, RELEASE_DATE_WINDOW_MONTHS, THRESHOLD)
    );
    // Symmetric in both directions.
    assert_eq!(
        date_proximity(base, shifted, RELEASE_DATE_WINDOW_MONTHS, THRESHOLD),
        date_proximity(shifted, base, RELEASE_DATE_WINDOW_MONTHS, THRESHOLD)
    );
}

#[test]
fn numeric_interval_window() {
    assert_eq!(0.0, numeric_interval(128.0, 128.0, BPM_WINDOW, THRESHOLD));
    assert_eq!(
        5.0 * THRESHOLD.value() / BPM_WINDOW,
        numeric_interval(128.0, 133.0, BPM_WINDOW, THRESHOLD)
    );
    assert_eq!(
        THRESHOLD.value(),
        numeric_interval(128.0, 170.0, BPM_WINDOW, THRESHOLD)
    );
}
