//! Difficulty model for the iceberg game
//!
//! Score buys levels; levels buy a tighter gap, faster scroll and a shorter
//! spawn interval. All four functions are pure and total, so the tick loop
//! can recompute them every frame without caching.

use crate::consts::*;

/// Difficulty level for a score: one level per band of points, capped
pub fn level_for_score(score: u32) -> u32 {
    (score / SCORE_PER_LEVEL + 1).min(LEVEL_CAP)
}

/// Vertical gap between an iceberg pair at this level, floored
pub fn gap_for_level(level: u32) -> i32 {
    let shrink = level.saturating_sub(1) as i32 * GAP_STEP;
    (GAP_BASE - shrink).max(GAP_MIN)
}

/// Leftward scroll speed in pixels per nominal frame
pub fn speed_for_level(level: u32) -> f32 {
    SCROLL_BASE_SPEED + level.saturating_sub(1) as f32 * SCROLL_SPEED_STEP
}

/// Milliseconds between pair spawns, floored
pub fn spawn_interval_for_level(level: u32) -> u64 {
    let cut = level.saturating_sub(1) as u64 * SPAWN_STEP_MS;
    SPAWN_BASE_MS.saturating_sub(cut).max(SPAWN_MIN_MS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_level_bands() {
        // One level per 5 points
        for score in 0..5 {
            assert_eq!(level_for_score(score), 1);
        }
        assert_eq!(level_for_score(5), 2);
        assert_eq!(level_for_score(9), 2);
        assert_eq!(level_for_score(10), 3);
        assert_eq!(level_for_score(44), 9);
        // Saturates at the cap
        assert_eq!(level_for_score(45), 10);
        assert_eq!(level_for_score(10_000), 10);
    }

    #[test]
    fn test_gap_shrinks_toward_floor() {
        assert_eq!(gap_for_level(1), 220);
        assert_eq!(gap_for_level(2), 212);
        // At the level cap the gap is still above the floor
        assert_eq!(gap_for_level(10), 148);
        assert_eq!(gap_for_level(11), 140);
        assert_eq!(gap_for_level(100), 140);
    }

    #[test]
    fn test_speed_grows_linearly() {
        assert_eq!(speed_for_level(1), 4.0);
        assert!((speed_for_level(2) - 4.45).abs() < 1e-5);
        assert!((speed_for_level(10) - 8.05).abs() < 1e-5);
    }

    #[test]
    fn test_spawn_interval_shrinks_toward_floor() {
        assert_eq!(spawn_interval_for_level(1), 1500);
        assert_eq!(spawn_interval_for_level(2), 1420);
        assert_eq!(spawn_interval_for_level(10), 780);
        assert_eq!(spawn_interval_for_level(11), 700);
        assert_eq!(spawn_interval_for_level(50), 700);
    }

    #[test]
    fn test_second_band_values_line_up() {
        // Five points buys level 2, which tightens all three knobs at once
        let level = level_for_score(5);
        assert_eq!(level, 2);
        assert_eq!(gap_for_level(level), 212);
        assert!((speed_for_level(level) - 4.45).abs() < 1e-5);
        assert_eq!(spawn_interval_for_level(level), 1420);
    }

    proptest! {
        #[test]
        fn prop_level_in_band(score in 0u32..1_000_000) {
            let level = level_for_score(score);
            prop_assert!((1..=LEVEL_CAP).contains(&level));
        }

        #[test]
        fn prop_level_monotone(a in 0u32..100_000, delta in 0u32..100_000) {
            let b = a.saturating_add(delta);
            prop_assert!(level_for_score(a) <= level_for_score(b));
        }

        #[test]
        fn prop_knobs_respect_bounds(level in 0u32..512) {
            prop_assert!(gap_for_level(level) >= GAP_MIN);
            prop_assert!(gap_for_level(level) <= GAP_BASE);
            prop_assert!(speed_for_level(level) >= SCROLL_BASE_SPEED);
            let interval = spawn_interval_for_level(level);
            prop_assert!((SPAWN_MIN_MS..=SPAWN_BASE_MS).contains(&interval));
        }
    }
}
