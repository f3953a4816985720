use serde::Serialize;

use crate::api::types::DamageClass;
use crate::core::config::DamageSteps;
use crate::core::state::VitalsState;
use crate::systems::hearts::render_lives;

/// Serializable picture of the HUD: the vitals plus the heart row they render to.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HudSnapshot {
    pub running: bool,
    pub score: u64,
    pub level: u32,
    pub lives: u32,
    pub partial_damage: u32,
    pub hearts: Vec<DamageClass>,
}

impl HudSnapshot {
    pub fn capture(state: &VitalsState, steps: DamageSteps) -> Self {
        let hearts = render_lives(state.lives as i64, state.partial_damage as i64, steps)
            .into_iter()
            .map(|icon| icon.damage_class)
            .collect();
        Self {
            running: state.running,
            score: state.score,
            level: state.level,
            lives: state.lives,
            partial_damage: state.partial_damage,
            hearts,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
