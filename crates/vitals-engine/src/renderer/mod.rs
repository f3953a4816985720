pub mod traits;
pub mod recording;
pub mod snapshot;

pub use traits::HudSurface;
