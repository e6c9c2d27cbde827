//! Level derivation from experience.
//!
//! ```text
//! level            = floor((sqrt(2500 + 200 * experience) - 50) / 100)
//! until_next_level = 50 * (level + 1) * (level + 2) - experience
//! ```
//!
//! The square root is taken exactly over integers: `floor((s - 50) / 100)`
//! for real `s` equals `floor((isqrt - 50) / 100)` because every level
//! threshold `100k + 50` is an integer.

use crate::model::Player;

/// Level reached with the given experience.
///
/// Negative experience is clamped to zero; the validator keeps it out of
/// stored records anyway.
pub fn level_for(experience: i32) -> i32 {
    let experience = i64::from(experience.max(0));
    let root = isqrt(2500 + 200 * experience);
    // root >= 50 because the radicand is at least 2500
    ((root - 50) / 100) as i32
}

/// Experience still needed to reach the level after `level`.
pub fn until_next_level(level: i32, experience: i32) -> i32 {
    let level = i64::from(level);
    let needed = 50 * (level + 1) * (level + 2) - i64::from(experience);
    i32::try_from(needed).unwrap_or(i32::MAX)
}

/// Recomputes the derived attributes of `player` from its experience.
pub fn derive(player: &mut Player) {
    player.level = level_for(player.experience);
    player.until_next_level = until_next_level(player.level, player.experience);
}

/// Floor of the square root of a non-negative integer.
fn isqrt(n: i64) -> i64 {
    let mut root = (n as f64).sqrt() as i64;
    while root * root > n {
        root -= 1;
    }
    while (root + 1) * (root + 1) <= n {
        root += 1;
    }
    root
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_level(experience: i32) -> i32 {
        ((((2500.0 + 200.0 * f64::from(experience)).sqrt()) - 50.0) / 100.0) as i32
    }

    #[test]
    fn zero_experience_is_level_zero() {
        assert_eq!(level_for(0), 0);
        assert_eq!(until_next_level(0, 0), 100);
    }

    #[test]
    fn level_thresholds() {
        assert_eq!(level_for(99), 0);
        assert_eq!(level_for(100), 1);
        assert_eq!(level_for(299), 1);
        assert_eq!(level_for(300), 2);
    }

    #[test]
    fn matches_floating_point_formula() {
        for experience in [0, 1, 99, 100, 2_500, 50_000, 123_456, 9_999_999, 10_000_000] {
            assert_eq!(level_for(experience), reference_level(experience), "{experience}");
        }
    }

    #[test]
    fn until_next_level_reaches_next_threshold() {
        for experience in [0, 57, 2_500, 50_000, 10_000_000] {
            let level = level_for(experience);
            let remaining = until_next_level(level, experience);
            assert!(remaining > 0);
            assert_eq!(level_for(experience + remaining), level + 1);
            assert_eq!(level_for(experience + remaining - 1), level);
        }
    }

    #[test]
    fn isqrt_is_exact_around_squares() {
        for root in [0i64, 1, 50, 708, 44_721, 44_722] {
            assert_eq!(isqrt(root * root), root);
            if root > 0 {
                assert_eq!(isqrt(root * root - 1), root - 1);
            }
        }
    }
}
