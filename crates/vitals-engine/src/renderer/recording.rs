use crate::api::types::{DamageClass, HeartIcon};
use crate::renderer::traits::HudSurface;

/// Headless surface that keeps what was last written to it.
/// Used by tests and by hosts that read the HUD back instead of drawing it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordingSurface {
    /// Hearts currently in the row.
    pub hearts: Vec<HeartIcon>,
    /// Score text slot.
    pub score: String,
    /// Level text slot.
    pub level: String,
    /// Number of completed syncs.
    pub presents: u32,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Damage classes of the current row, left to right.
    pub fn classes(&self) -> Vec<DamageClass> {
        self.hearts.iter().map(|h| h.damage_class).collect()
    }
}

impl HudSurface for RecordingSurface {
    fn clear_hearts(&mut self) {
        self.hearts.clear();
    }

    fn push_heart(&mut self, icon: HeartIcon) {
        self.hearts.push(icon);
    }

    fn set_score(&mut self, score: u64) {
        self.score = score.to_string();
    }

    fn set_level(&mut self, level: u32) {
        self.level = level.to_string();
    }

    fn present(&mut self) {
        self.presents += 1;
    }
}
