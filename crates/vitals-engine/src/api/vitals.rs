use crate::api::types::VitalsEvent;
use crate::core::config::HudConfig;
use crate::core::state::{Transition, VitalsState};
use crate::renderer::snapshot::HudSnapshot;
use crate::renderer::traits::HudSurface;
use crate::systems::sync::sync_display;

/// Callback notified after every transition, with the state it produced.
pub type Observer = Box<dyn FnMut(Transition, &VitalsState)>;

/// One game session's vitals, bound to the surface that displays them.
///
/// Every entry point applies a pure [`VitalsState`] transition, records a
/// [`VitalsEvent`], notifies observers and re-syncs the whole HUD.
pub struct Vitals<S: HudSurface> {
    config: HudConfig,
    state: VitalsState,
    surface: S,
    events: Vec<VitalsEvent>,
    observers: Vec<Observer>,
}

impl<S: HudSurface> Vitals<S> {
    /// Create a session with the default config and draw the starting HUD.
    pub fn new(surface: S) -> Self {
        Self::with_config(HudConfig::default(), surface)
    }

    /// Create a session with a custom config and draw the starting HUD.
    pub fn with_config(config: HudConfig, surface: S) -> Self {
        let mut vitals = Self {
            state: VitalsState::new(&config),
            config,
            surface,
            events: Vec::with_capacity(16),
            observers: Vec::new(),
        };
        vitals.sync();
        vitals
    }

    pub fn config(&self) -> &HudConfig {
        &self.config
    }

    pub fn state(&self) -> &VitalsState {
        &self.state
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Register an observer. It sees every transition from now on.
    pub fn subscribe(&mut self, observer: impl FnMut(Transition, &VitalsState) + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Replace the config. Takes effect at the next `init`; steps apply immediately.
    pub fn set_config(&mut self, config: HudConfig) {
        log::info!(
            "vitals: config steps={} lives={} level={}",
            config.steps.get(),
            config.starting_lives,
            config.starting_level
        );
        self.config = config;
        self.state.partial_damage = self.state.partial_damage.min(self.config.steps.max_partial());
        self.sync();
    }

    /// Reset every vital to its starting value.
    pub fn init(&mut self) {
        let next = VitalsState::new(&self.config);
        log::info!("vitals: init lives={} level={}", next.lives, next.level);
        self.apply(next, Transition::Reset);
    }

    /// Apply one step of damage to the active heart.
    pub fn hit(&mut self) {
        let (next, transition) = self.state.hit(self.config.steps);
        self.apply(next, transition);
    }

    /// Add one full heart.
    pub fn heal(&mut self) {
        let (next, transition) = self.state.heal();
        self.apply(next, transition);
    }

    /// Switch the game loop on.
    pub fn start(&mut self) {
        let (next, transition) = self.state.start();
        self.apply(next, transition);
    }

    /// Overwrite the score. Not validated; scoring rules live with the caller.
    pub fn set_score(&mut self, score: u64) {
        self.state.score = score;
        self.sync();
    }

    pub fn add_score(&mut self, points: u64) {
        self.set_score(self.state.score.saturating_add(points));
    }

    /// Overwrite the level. Not validated; progression lives with the caller.
    pub fn set_level(&mut self, level: u32) {
        self.state.level = level;
        self.sync();
    }

    /// Redraw the HUD from the current state.
    pub fn sync(&mut self) {
        sync_display(&self.state, self.config.steps, &mut self.surface);
    }

    /// Current HUD as a serializable value.
    pub fn snapshot(&self) -> HudSnapshot {
        HudSnapshot::capture(&self.state, self.config.steps)
    }

    /// Events recorded since the last drain, oldest first.
    pub fn events(&self) -> &[VitalsEvent] {
        &self.events
    }

    /// Take all recorded events and clear the buffer.
    pub fn drain_events(&mut self) -> Vec<VitalsEvent> {
        std::mem::take(&mut self.events)
    }

    /// Clear recorded events without returning them.
    pub fn clear_events(&mut self) {
        self.events.clear();
    }

    fn apply(&mut self, next: VitalsState, transition: Transition) {
        log::debug!(
            "vitals: {:?} lives={} partial={}",
            transition,
            next.lives,
            next.partial_damage
        );
        self.state = next;
        self.events.push(VitalsEvent::new(transition, &self.state));
        for observer in &mut self.observers {
            observer(transition, &self.state);
        }
        self.sync();
    }
}
