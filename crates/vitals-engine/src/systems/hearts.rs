//! Heart row rendering.
//!
//! Maps `(lives, partial_damage, steps)` to the ordered icons shown in the HUD:
//! every heart but the last is full, the last (active) heart shows its damage,
//! and a dead player gets a single empty placeholder.

use crate::api::types::{DamageClass, HeartIcon};
use crate::core::config::DamageSteps;

/// Damage class of the active heart.
///
/// The remaining share `(steps - partial) / steps` is floored to whole quarters
/// and never drops below one quarter, since a living heart is never drawn empty.
/// With four steps this is the fixed table 0 full, 1 threequarter, 2 half, 3 quarter.
pub fn active_heart_class(partial_damage: u32, steps: DamageSteps) -> DamageClass {
    let steps = steps.get() as u64;
    let partial = (partial_damage as u64).min(steps - 1);
    let quarters = ((steps - partial) * 4 / steps).clamp(1, 4);
    DamageClass::from_quarters(quarters as u32)
}

/// Build the heart row, left to right.
///
/// Inputs are clamped rather than rejected: negative lives count as zero and
/// partial damage is pinned into `0..steps`.
pub fn render_lives(lives: i64, partial_damage: i64, steps: DamageSteps) -> Vec<HeartIcon> {
    let safe_lives = lives.max(0) as usize;
    let safe_partial = partial_damage.clamp(0, steps.max_partial() as i64) as u32;

    if safe_lives == 0 {
        return vec![HeartIcon::EMPTY];
    }

    let mut icons = Vec::with_capacity(safe_lives);
    icons.extend(std::iter::repeat(HeartIcon::FULL).take(safe_lives - 1));
    icons.push(HeartIcon::new(active_heart_class(safe_partial, steps)));
    icons
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::DamageClass::*;

    fn classes(icons: &[HeartIcon]) -> Vec<DamageClass> {
        icons.iter().map(|i| i.damage_class).collect()
    }

    fn steps(n: u32) -> DamageSteps {
        DamageSteps::new(n).unwrap()
    }

    #[test]
    fn fresh_row_is_three_full() {
        let row = render_lives(3, 0, DamageSteps::QUARTERS);
        assert_eq!(classes(&row), [Full, Full, Full]);
    }

    #[test]
    fn four_step_table() {
        let q = DamageSteps::QUARTERS;
        assert_eq!(active_heart_class(0, q), Full);
        assert_eq!(active_heart_class(1, q), ThreeQuarter);
        assert_eq!(active_heart_class(2, q), Half);
        assert_eq!(active_heart_class(3, q), Quarter);
    }

    #[test]
    fn active_heart_is_last() {
        let row = render_lives(2, 1, DamageSteps::QUARTERS);
        assert_eq!(classes(&row), [Full, ThreeQuarter]);
    }

    #[test]
    fn zero_lives_shows_one_empty() {
        assert_eq!(classes(&render_lives(0, 0, DamageSteps::QUARTERS)), [Empty]);
        assert_eq!(classes(&render_lives(0, 3, DamageSteps::QUARTERS)), [Empty]);
    }

    #[test]
    fn out_of_range_inputs_are_clamped() {
        assert_eq!(classes(&render_lives(-5, 10, DamageSteps::QUARTERS)), [Empty]);
        assert_eq!(classes(&render_lives(1, 10, DamageSteps::QUARTERS)), [Quarter]);
        assert_eq!(classes(&render_lives(2, -4, DamageSteps::QUARTERS)), [Full, Full]);
    }

    #[test]
    fn one_icon_per_life() {
        for lives in 1..=20i64 {
            for p in 0..4 {
                let row = render_lives(lives, p, DamageSteps::QUARTERS);
                assert_eq!(row.len(), lives as usize);
                assert!(row[..row.len() - 1].iter().all(|i| *i == HeartIcon::FULL));
                assert_eq!(row[row.len() - 1].damage_class, active_heart_class(p as u32, DamageSteps::QUARTERS));
            }
        }
    }

    #[test]
    fn same_inputs_same_row() {
        assert_eq!(
            render_lives(4, 2, DamageSteps::QUARTERS),
            render_lives(4, 2, DamageSteps::QUARTERS)
        );
    }

    #[test]
    fn two_steps_use_half() {
        assert_eq!(active_heart_class(0, steps(2)), Full);
        assert_eq!(active_heart_class(1, steps(2)), Half);
    }

    #[test]
    fn single_step_is_always_full() {
        assert_eq!(classes(&render_lives(1, 5, steps(1))), [Full]);
    }

    #[test]
    fn other_step_counts_never_empty_and_monotonic() {
        for n in 1..=16 {
            let s = steps(n);
            let mut prev = Full;
            assert_eq!(active_heart_class(0, s), Full);
            for p in 0..n {
                let class = active_heart_class(p, s);
                assert_ne!(class, Empty, "steps={n} partial={p}");
                assert!(class >= prev, "steps={n} partial={p}: {class:?} after {prev:?}");
                prev = class;
            }
        }
    }
}
