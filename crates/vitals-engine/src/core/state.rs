use serde::Serialize;

use crate::core::config::{DamageSteps, HudConfig};

/// What a transition did to the vitals. Also the event kind on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Transition {
    /// Fresh state from `init`.
    Reset = 0,
    /// The active heart took one step of damage.
    Damaged = 1,
    /// The active heart was consumed.
    LifeLost = 2,
    /// A hit landed with no lives left; nothing changed.
    Ignored = 3,
    /// One full heart was added.
    Healed = 4,
    /// The game loop was switched on.
    Started = 5,
}

impl Transition {
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Reset),
            1 => Some(Self::Damaged),
            2 => Some(Self::LifeLost),
            3 => Some(Self::Ignored),
            4 => Some(Self::Healed),
            5 => Some(Self::Started),
            _ => None,
        }
    }
}

/// Player vitals for one game session.
///
/// Transitions are pure: each takes the current value and returns the next one
/// together with the [`Transition`] that happened. Rendering lives elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VitalsState {
    /// Whether the game loop is active.
    pub running: bool,
    pub score: u64,
    pub level: u32,
    /// Remaining hearts. The last one may be partially damaged.
    pub lives: u32,
    /// Damage on the active heart, `0` = full, `steps - 1` = almost empty.
    /// Always `0` while `lives == 0`.
    pub partial_damage: u32,
}

impl VitalsState {
    /// The state `init` produces for the given config.
    pub fn new(config: &HudConfig) -> Self {
        Self {
            running: false,
            score: 0,
            level: config.starting_level,
            lives: config.starting_lives,
            partial_damage: 0,
        }
    }

    /// True once every heart is gone. Further hits are absorbed.
    pub fn is_dead(&self) -> bool {
        self.lives == 0
    }

    /// Apply one unit of damage.
    pub fn hit(self, steps: DamageSteps) -> (Self, Transition) {
        if self.lives == 0 {
            return (self, Transition::Ignored);
        }
        if self.partial_damage < steps.max_partial() {
            let next = Self {
                partial_damage: self.partial_damage + 1,
                ..self
            };
            (next, Transition::Damaged)
        } else {
            let next = Self {
                lives: self.lives - 1,
                partial_damage: 0,
                ..self
            };
            (next, Transition::LifeLost)
        }
    }

    /// Grant one full heart. Lives are not capped here.
    pub fn heal(self) -> (Self, Transition) {
        let next = Self {
            lives: self.lives.saturating_add(1),
            partial_damage: 0,
            ..self
        };
        (next, Transition::Healed)
    }

    /// Mark the game loop as running (the play button).
    pub fn start(self) -> (Self, Transition) {
        (Self { running: true, ..self }, Transition::Started)
    }
}

impl Default for VitalsState {
    fn default() -> Self {
        Self::new(&HudConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STEPS: DamageSteps = DamageSteps::QUARTERS;

    fn at(lives: u32, partial_damage: u32) -> VitalsState {
        VitalsState {
            lives,
            partial_damage,
            ..VitalsState::default()
        }
    }

    #[test]
    fn new_uses_config_defaults() {
        let s = VitalsState::default();
        assert!(!s.running);
        assert_eq!(s.score, 0);
        assert_eq!(s.level, 1);
        assert_eq!(s.lives, 3);
        assert_eq!(s.partial_damage, 0);
    }

    #[test]
    fn four_hits_consume_one_heart() {
        let mut s = at(3, 0);
        for expected in 1..=3 {
            let (next, t) = s.hit(STEPS);
            assert_eq!(t, Transition::Damaged);
            assert_eq!(next.lives, 3);
            assert_eq!(next.partial_damage, expected);
            s = next;
        }
        let (s, t) = s.hit(STEPS);
        assert_eq!(t, Transition::LifeLost);
        assert_eq!((s.lives, s.partial_damage), (2, 0));
    }

    #[test]
    fn last_heart_goes_to_zero_and_stays() {
        let (s, t) = at(1, 3).hit(STEPS);
        assert_eq!(t, Transition::LifeLost);
        assert_eq!((s.lives, s.partial_damage), (0, 0));
        assert!(s.is_dead());

        let mut dead = s;
        for _ in 0..10 {
            let (next, t) = dead.hit(STEPS);
            assert_eq!(t, Transition::Ignored);
            assert_eq!(next, s);
            dead = next;
        }
    }

    #[test]
    fn heal_revives_and_resets_damage() {
        let (s, t) = at(0, 0).heal();
        assert_eq!(t, Transition::Healed);
        assert_eq!((s.lives, s.partial_damage), (1, 0));

        let (s, _) = at(2, 2).heal();
        assert_eq!((s.lives, s.partial_damage), (3, 0));
    }

    #[test]
    fn heal_saturates() {
        let (s, _) = at(u32::MAX, 1).heal();
        assert_eq!(s.lives, u32::MAX);
    }

    #[test]
    fn single_step_hearts_lose_a_life_per_hit() {
        let one = DamageSteps::new(1).unwrap();
        let (s, t) = at(2, 0).hit(one);
        assert_eq!(t, Transition::LifeLost);
        assert_eq!((s.lives, s.partial_damage), (1, 0));
    }

    #[test]
    fn transitions_leave_score_and_level_alone() {
        let s = VitalsState {
            score: 120,
            level: 3,
            ..VitalsState::default()
        };
        let (s, _) = s.hit(STEPS);
        let (s, _) = s.heal();
        assert_eq!((s.score, s.level), (120, 3));
    }

    #[test]
    fn start_sets_running() {
        let (s, t) = VitalsState::default().start();
        assert_eq!(t, Transition::Started);
        assert!(s.running);
        let (again, _) = s.start();
        assert_eq!(again, s);
    }

    #[test]
    fn transition_round_trip_u8() {
        for v in 0..6u8 {
            assert_eq!(Transition::from_u8(v).unwrap().as_u8(), v);
        }
        assert!(Transition::from_u8(6).is_none());
    }
}
