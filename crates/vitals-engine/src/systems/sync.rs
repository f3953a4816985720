use crate::core::config::DamageSteps;
use crate::core::state::VitalsState;
use crate::renderer::traits::HudSurface;
use crate::systems::hearts::render_lives;

/// Push a vitals state onto a HUD surface.
///
/// The heart row is rebuilt from scratch on every call. Score and level are
/// written as text. Best score and sound mode have no slot yet and are left alone.
pub fn sync_display<S: HudSurface + ?Sized>(state: &VitalsState, steps: DamageSteps, surface: &mut S) {
    let icons = render_lives(state.lives as i64, state.partial_damage as i64, steps);

    surface.clear_hearts();
    for icon in icons {
        surface.push_heart(icon);
    }
    surface.set_score(state.score);
    surface.set_level(state.level);
    surface.present();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::DamageClass::*;
    use crate::renderer::recording::RecordingSurface;

    #[test]
    fn writes_hearts_and_text() {
        let state = VitalsState {
            score: 50,
            level: 2,
            lives: 2,
            partial_damage: 2,
            running: true,
        };
        let mut surface = RecordingSurface::new();
        sync_display(&state, DamageSteps::QUARTERS, &mut surface);

        assert_eq!(surface.classes(), [Full, Half]);
        assert_eq!(surface.score, "50");
        assert_eq!(surface.level, "2");
        assert_eq!(surface.presents, 1);
    }

    #[test]
    fn replaces_previous_row() {
        let mut surface = RecordingSurface::new();
        sync_display(&VitalsState::default(), DamageSteps::QUARTERS, &mut surface);
        assert_eq!(surface.hearts.len(), 3);

        let dead = VitalsState {
            lives: 0,
            ..VitalsState::default()
        };
        sync_display(&dead, DamageSteps::QUARTERS, &mut surface);
        assert_eq!(surface.classes(), [Empty]);
        assert_eq!(surface.presents, 2);
    }
}
