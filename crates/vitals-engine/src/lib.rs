pub mod api;
pub mod core;
pub mod renderer;
pub mod systems;

// Re-export key types at crate root for convenience
pub use api::vitals::{Vitals, Observer};
pub use api::types::{DamageClass, HeartIcon, VitalsEvent};
pub use core::config::{HudConfig, DamageSteps, ConfigError};
pub use core::state::{VitalsState, Transition};
pub use renderer::traits::HudSurface;
pub use renderer::recording::RecordingSurface;
pub use renderer::snapshot::HudSnapshot;
pub use systems::hearts::{render_lives, active_heart_class};
pub use systems::sync::sync_display;
pub use systems::layout::HeartRowLayout;
