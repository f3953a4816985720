//! Display surface contract for the HUD.
//!
//! The core never draws. It hands finished icons and numbers to a surface,
//! which decides what a heart looks like (SVG in the DOM, a canvas path,
//! or a plain record in tests).

use crate::api::types::HeartIcon;

/// Where the HUD is shown.
///
/// A sync always calls `clear_hearts`, then `push_heart` once per icon in
/// left-to-right order, then the two text slots, then `present`.
pub trait HudSurface {
    /// Remove every heart icon from the row.
    fn clear_hearts(&mut self);

    /// Append one heart icon at the right end of the row.
    fn push_heart(&mut self, icon: HeartIcon);

    /// Write the score as plain text.
    fn set_score(&mut self, score: u64);

    /// Write the level as plain text.
    fn set_level(&mut self, level: u32);

    /// Called once after all writes of a sync. Retained-mode surfaces ignore it.
    fn present(&mut self) {}
}

impl<S: HudSurface + ?Sized> HudSurface for &mut S {
    fn clear_hearts(&mut self) {
        (**self).clear_hearts();
    }

    fn push_heart(&mut self, icon: HeartIcon) {
        (**self).push_heart(icon);
    }

    fn set_score(&mut self, score: u64) {
        (**self).set_score(score);
    }

    fn set_level(&mut self, level: u32) {
        (**self).set_level(level);
    }

    fn present(&mut self) {
        (**self).present();
    }
}
