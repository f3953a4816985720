use bytemuck::{Pod, Zeroable};
use serde::Serialize;

use crate::core::state::{Transition, VitalsState};

/// Visual damage state of one heart icon.
/// Ordered from fullest to emptiest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DamageClass {
    Full,
    ThreeQuarter,
    Half,
    Quarter,
    Empty,
}

impl DamageClass {
    /// CSS class name used by the page stylesheet.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::ThreeQuarter => "threequarter",
            Self::Half => "half",
            Self::Quarter => "quarter",
            Self::Empty => "empty",
        }
    }

    /// Share of the heart still filled, 0.0 to 1.0.
    pub fn fill_ratio(self) -> f32 {
        self.quarters() as f32 / 4.0
    }

    /// Filled quarters, 0 to 4.
    pub fn quarters(self) -> u32 {
        match self {
            Self::Full => 4,
            Self::ThreeQuarter => 3,
            Self::Half => 2,
            Self::Quarter => 1,
            Self::Empty => 0,
        }
    }

    pub fn from_quarters(quarters: u32) -> Self {
        match quarters {
            0 => Self::Empty,
            1 => Self::Quarter,
            2 => Self::Half,
            3 => Self::ThreeQuarter,
            _ => Self::Full,
        }
    }
}

/// One heart in the HUD row. Rebuilt on every render pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct HeartIcon {
    pub damage_class: DamageClass,
}

impl HeartIcon {
    pub const FULL: Self = Self::new(DamageClass::Full);
    pub const EMPTY: Self = Self::new(DamageClass::Empty);

    pub const fn new(damage_class: DamageClass) -> Self {
        Self { damage_class }
    }
}

/// A vitals change record handed to JavaScript through a flat f32 buffer.
/// `kind` is a [`Transition`] discriminant; the rest is the state after it.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct VitalsEvent {
    pub kind: f32,
    pub lives: f32,
    pub partial_damage: f32,
    pub score: f32,
}

impl VitalsEvent {
    pub const FLOATS: usize = 4;

    pub fn new(transition: Transition, state: &VitalsState) -> Self {
        Self {
            kind: transition.as_u8() as f32,
            lives: state.lives as f32,
            partial_damage: state.partial_damage as f32,
            score: state.score as f32,
        }
    }

    pub fn transition(&self) -> Option<Transition> {
        Transition::from_u8(self.kind as u8)
    }

    /// View a run of events as the flat float array JavaScript reads.
    pub fn as_floats(events: &[Self]) -> &[f32] {
        bytemuck::cast_slice(events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_names_match_stylesheet() {
        let names: Vec<_> = [
            DamageClass::Full,
            DamageClass::ThreeQuarter,
            DamageClass::Half,
            DamageClass::Quarter,
            DamageClass::Empty,
        ]
        .iter()
        .map(|c| c.as_str())
        .collect();
        assert_eq!(names, ["full", "threequarter", "half", "quarter", "empty"]);
    }

    #[test]
    fn serializes_as_class_name() {
        let json = serde_json::to_string(&HeartIcon::new(DamageClass::ThreeQuarter)).unwrap();
        assert_eq!(json, r#"{"damage_class":"threequarter"}"#);
    }

    #[test]
    fn ordering_is_fullest_first() {
        assert!(DamageClass::Full < DamageClass::ThreeQuarter);
        assert!(DamageClass::Quarter < DamageClass::Empty);
        assert_eq!(DamageClass::Half.fill_ratio(), 0.5);
        assert_eq!(DamageClass::from_quarters(9), DamageClass::Full);
    }

    #[test]
    fn event_is_four_floats() {
        assert_eq!(std::mem::size_of::<VitalsEvent>(), VitalsEvent::FLOATS * 4);
        let state = VitalsState {
            lives: 2,
            partial_damage: 1,
            score: 40,
            ..VitalsState::default()
        };
        let ev = VitalsEvent::new(Transition::Damaged, &state);
        let floats = VitalsEvent::as_floats(std::slice::from_ref(&ev));
        assert_eq!(floats, &[1.0, 2.0, 1.0, 40.0]);
        assert_eq!(ev.transition(), Some(Transition::Damaged));
    }
}
