use vitals_engine::{
    render_lives, ConfigError, DamageSteps, HudConfig, HudSurface, Transition, Vitals,
    VitalsEvent, VitalsState,
};

/// Heart row for arbitrary inputs as a JSON array of class names.
/// Lives and damage are clamped; only a zero step count is an error.
pub fn preview_json(lives: i64, partial_damage: i64, steps: u32) -> Result<String, ConfigError> {
    let steps = DamageSteps::new(steps)?;
    let classes: Vec<&str> = render_lives(lives, partial_damage, steps)
        .into_iter()
        .map(|icon| icon.damage_class.as_str())
        .collect();
    Ok(serde_json::to_string(&classes)?)
}

/// Vitals session as seen from JavaScript.
///
/// Each concrete page creates a `thread_local!` VitalsRunner and exports free
/// functions via `#[wasm_bindgen]`, because wasm-bindgen cannot export generic
/// structs directly. The event buffer only holds what the latest call produced.
pub struct VitalsRunner<S: HudSurface> {
    vitals: Vitals<S>,
}

impl<S: HudSurface> VitalsRunner<S> {
    pub fn new(surface: S) -> Self {
        Self {
            vitals: Vitals::new(surface),
        }
    }

    pub fn with_config(config: HudConfig, surface: S) -> Self {
        Self {
            vitals: Vitals::with_config(config, surface),
        }
    }

    /// Register a page observer (overlay, sounds, analytics hooks).
    pub fn subscribe(&mut self, observer: impl FnMut(Transition, &VitalsState) + 'static) {
        self.vitals.subscribe(observer);
    }

    pub fn vitals(&self) -> &Vitals<S> {
        &self.vitals
    }

    pub fn init(&mut self) {
        self.vitals.clear_events();
        self.vitals.init();
    }

    pub fn hit(&mut self) {
        self.vitals.clear_events();
        self.vitals.hit();
    }

    pub fn heal(&mut self) {
        self.vitals.clear_events();
        self.vitals.heal();
    }

    pub fn start(&mut self) {
        self.vitals.clear_events();
        self.vitals.start();
    }

    /// Load a JSON config. The current state keeps running; `init` applies the new start values.
    pub fn configure(&mut self, json: &str) -> Result<(), ConfigError> {
        let config = HudConfig::from_json(json)?;
        self.vitals.set_config(config);
        Ok(())
    }

    pub fn set_score(&mut self, score: u64) {
        self.vitals.clear_events();
        self.vitals.set_score(score);
    }

    pub fn add_score(&mut self, points: u64) {
        self.vitals.clear_events();
        self.vitals.add_score(points);
    }

    pub fn set_level(&mut self, level: u32) {
        self.vitals.clear_events();
        self.vitals.set_level(level);
    }

    // ---- Reads ----

    pub fn score(&self) -> u64 {
        self.vitals.state().score
    }

    pub fn level(&self) -> u32 {
        self.vitals.state().level
    }

    pub fn lives(&self) -> u32 {
        self.vitals.state().lives
    }

    pub fn partial_damage(&self) -> u32 {
        self.vitals.state().partial_damage
    }

    pub fn running(&self) -> bool {
        self.vitals.state().running
    }

    /// HUD snapshot as JSON. Falls back to `{}` if serialization fails.
    pub fn hud_json(&self) -> String {
        match self.vitals.snapshot().to_json() {
            Ok(json) => json,
            Err(e) => {
                log::warn!("vitals: snapshot serialization failed: {e}");
                "{}".to_string()
            }
        }
    }

    /// CSS class names of the current heart row, left to right.
    pub fn heart_classes(&self) -> Vec<&'static str> {
        self.vitals
            .snapshot()
            .hearts
            .into_iter()
            .map(|c| c.as_str())
            .collect()
    }

    // ---- Event buffer accessors ----

    pub fn events_ptr(&self) -> *const f32 {
        self.vitals.events().as_ptr() as *const f32
    }

    pub fn events_len(&self) -> u32 {
        self.vitals.events().len() as u32
    }

    pub fn events_floats(&self) -> &[f32] {
        VitalsEvent::as_floats(self.vitals.events())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitals_engine::RecordingSurface;

    #[test]
    fn event_buffer_holds_latest_call_only() {
        let mut r = VitalsRunner::new(RecordingSurface::new());
        r.hit();
        assert_eq!(r.events_len(), 1);
        r.heal();
        assert_eq!(r.events_len(), 1);
        assert_eq!(r.events_floats(), &[4.0, 4.0, 0.0, 0.0]);

        r.set_score(10);
        assert_eq!(r.events_len(), 0);
    }

    #[test]
    fn configure_applies_on_init() {
        let mut r = VitalsRunner::new(RecordingSurface::new());
        r.configure(r#"{ "starting_lives": 5, "steps": 2 }"#).unwrap();
        assert_eq!(r.lives(), 3);
        r.init();
        assert_eq!(r.lives(), 5);
        r.hit();
        assert_eq!(r.heart_classes(), ["full", "full", "full", "full", "half"]);
    }

    #[test]
    fn configure_rejects_bad_json() {
        let mut r = VitalsRunner::new(RecordingSurface::new());
        assert!(r.configure("{ nope").is_err());
        assert!(r.configure(r#"{ "steps": 0 }"#).is_err());
        assert_eq!(r.vitals().config(), &HudConfig::default());
    }

    #[test]
    fn preview_clamps_and_rejects_zero_steps() {
        assert_eq!(preview_json(-5, 10, 4).unwrap(), r#"["empty"]"#);
        assert_eq!(preview_json(2, 1, 4).unwrap(), r#"["full","threequarter"]"#);
        assert!(preview_json(3, 0, 0).is_err());
    }

    #[test]
    fn hud_json_reflects_state() {
        let mut r = VitalsRunner::new(RecordingSurface::new());
        r.start();
        r.add_score(30);
        let json = r.hud_json();
        assert!(json.contains(r#""running":true"#), "{json}");
        assert!(json.contains(r#""score":30"#), "{json}");
        assert_eq!(r.score(), 30);
        assert!(r.running());
    }
}
