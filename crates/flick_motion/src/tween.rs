//! Fixed-duration eased interpolation between two offsets
//!
//! The controller hands animated render frames (snap-back, animated
//! `scroll_to`) to the external renderer as a target plus a duration.
//! A renderer that cannot animate natively can drive a [`Tween`] from its
//! frame clock to synthesize the same motion; the integration tests use
//! exactly that to emulate a transition-capable renderer.

use flick_core::geometry::Offset;

use crate::easing::Easing;

#[derive(Debug, Clone, Copy)]
pub struct Tween {
    from: Offset,
    to: Offset,
    start: f64,
    duration: f64,
    easing: Easing,
}

impl Tween {
    pub fn new(from: Offset, to: Offset, start: f64, duration: f64, easing: Easing) -> Self {
        Self {
            from,
            to,
            start,
            duration,
            easing,
        }
    }

    /// Interpolated offset at `now`, clamped to the endpoints
    pub fn sample(&self, now: f64) -> Offset {
        if self.duration <= 0.0 {
            return self.to;
        }
        let t = (((now - self.start) / self.duration).clamp(0.0, 1.0)) as f32;
        let k = self.easing.apply(t);
        Offset {
            x: self.from.x + (self.to.x - self.from.x) * k,
            y: self.from.y + (self.to.y - self.from.y) * k,
        }
    }

    pub fn is_finished(&self, now: f64) -> bool {
        self.duration <= 0.0 || now >= self.start + self.duration
    }

    pub fn target(&self) -> Offset {
        self.to
    }
}
