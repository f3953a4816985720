//! Play overlay: visible until the game starts, shown again on reset.

use vitals_engine::{Transition, VitalsState};
use web_sys::Element;

use crate::dom::{document, find_element};

const HIDDEN_CLASS: &str = "hidden";

/// Whether a transition should hide (`Some(true)`) or show (`Some(false)`) the overlay.
pub fn overlay_hidden(transition: Transition) -> Option<bool> {
    match transition {
        Transition::Reset => Some(false),
        Transition::Started => Some(true),
        _ => None,
    }
}

/// The page's start overlay element.
pub struct Overlay {
    element: Option<Element>,
}

impl Overlay {
    pub fn bind(id: &str) -> Self {
        Self {
            element: document().and_then(|d| find_element(&d, id)),
        }
    }

    pub fn show(&self) {
        if let Some(el) = &self.element {
            let _ = el.class_list().remove_1(HIDDEN_CLASS);
        }
    }

    pub fn hide(&self) {
        if let Some(el) = &self.element {
            let _ = el.class_list().add_1(HIDDEN_CLASS);
        }
    }

    /// Turn the overlay into a vitals observer.
    pub fn into_observer(self) -> impl FnMut(Transition, &VitalsState) + 'static {
        move |transition, _state| match overlay_hidden(transition) {
            Some(true) => self.hide(),
            Some(false) => self.show(),
            None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_hides_reset_shows() {
        assert_eq!(overlay_hidden(Transition::Started), Some(true));
        assert_eq!(overlay_hidden(Transition::Reset), Some(false));
    }

    #[test]
    fn damage_leaves_overlay_alone() {
        for t in [
            Transition::Damaged,
            Transition::LifeLost,
            Transition::Ignored,
            Transition::Healed,
        ] {
            assert_eq!(overlay_hidden(t), None);
        }
    }
}
