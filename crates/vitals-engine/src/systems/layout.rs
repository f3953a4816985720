//! Heart row placement for immediate-mode surfaces (canvas, GPU).
//!
//! Retained surfaces like the DOM let the browser flow icons; anything that
//! draws by coordinates asks this layout where each slot goes.

use glam::Vec2;

/// Horizontal row of square heart slots.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeartRowLayout {
    /// Top-left corner of the first slot.
    pub origin: Vec2,
    /// Edge length of one heart in surface units.
    pub icon_size: f32,
    /// Space between neighbouring hearts.
    pub gap: f32,
}

impl Default for HeartRowLayout {
    fn default() -> Self {
        Self {
            origin: Vec2::new(8.0, 8.0),
            icon_size: 24.0,
            gap: 4.0,
        }
    }
}

impl HeartRowLayout {
    pub fn new(origin: Vec2, icon_size: f32, gap: f32) -> Self {
        Self { origin, icon_size, gap }
    }

    /// Top-left corner of slot `index`.
    pub fn slot(&self, index: usize) -> Vec2 {
        self.origin + Vec2::X * (index as f32 * (self.icon_size + self.gap))
    }

    /// Top-left corners of the first `count` slots, left to right.
    pub fn slots(&self, count: usize) -> impl Iterator<Item = Vec2> + '_ {
        (0..count).map(move |i| self.slot(i))
    }

    /// Width and height covered by `count` hearts.
    pub fn extent(&self, count: usize) -> Vec2 {
        if count == 0 {
            return Vec2::ZERO;
        }
        let width = count as f32 * self.icon_size + (count - 1) as f32 * self.gap;
        Vec2::new(width, self.icon_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slots_advance_by_size_plus_gap() {
        let layout = HeartRowLayout::new(Vec2::new(10.0, 5.0), 20.0, 2.0);
        let slots: Vec<Vec2> = layout.slots(3).collect();
        assert_eq!(
            slots,
            vec![Vec2::new(10.0, 5.0), Vec2::new(32.0, 5.0), Vec2::new(54.0, 5.0)]
        );
    }

    #[test]
    fn extent_excludes_trailing_gap() {
        let layout = HeartRowLayout::new(Vec2::ZERO, 20.0, 2.0);
        assert_eq!(layout.extent(0), Vec2::ZERO);
        assert_eq!(layout.extent(1), Vec2::new(20.0, 20.0));
        assert_eq!(layout.extent(3), Vec2::new(64.0, 20.0));
    }
}
