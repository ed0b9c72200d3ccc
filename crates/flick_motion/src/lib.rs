//! flick motion model
//!
//! The post-release half of the scroll engine: a constant-deceleration
//! glide simulation ([`Momentum`]) clocked by host frame timestamps, plus
//! the [`Tween`]/[`Easing`] helpers renderer sinks use to honor animated
//! render frames.

pub mod easing;
pub mod momentum;
pub mod tween;

pub use easing::Easing;
pub use momentum::{Momentum, StepOutcome};
pub use tween::Tween;
