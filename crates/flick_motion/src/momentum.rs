//! Constant-deceleration settle simulation
//!
//! After a gesture releases with velocity, the offset keeps gliding while
//! a fixed-magnitude acceleration opposes the motion on each axis. The
//! integration is trapezoidal per frame; an axis stops the moment its
//! velocity crosses zero. The simulation is clocked by the host's frame
//! timestamps, so it never blocks and can be dropped to cancel.

use flick_core::geometry::{Bounds, Offset, Vec2};

/// Outcome of a single simulation step
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StepOutcome {
    /// Still moving; render the offset and schedule another frame
    Continue(Offset),
    /// Came to rest inside bounds
    Settled(Offset),
    /// Came to rest outside bounds; the caller should snap back
    Overflowed(Offset),
}

/// Per-axis deceleration state for the post-release glide
///
/// Owns the authoritative offset while active; the controller destroys it
/// on settle or cancellation.
#[derive(Debug, Clone, Copy)]
pub struct Momentum {
    offset: Offset,
    /// px/ms
    velocity: Vec2,
    /// px/ms², directed against the velocity; zero on a still axis
    accel: Vec2,
    last_tick: f64,
}

fn opposing(velocity: f32, magnitude: f32) -> f32 {
    if velocity == 0.0 {
        0.0
    } else if velocity > 0.0 {
        -magnitude
    } else {
        magnitude
    }
}

impl Momentum {
    pub fn new(offset: Offset, velocity: Vec2, deceleration: f32, now: f64) -> Self {
        Self {
            offset,
            velocity,
            accel: Vec2::new(
                opposing(velocity.x, deceleration),
                opposing(velocity.y, deceleration),
            ),
            last_tick: now,
        }
    }

    pub fn offset(&self) -> Offset {
        self.offset
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// Advance the simulation to `now`
    ///
    /// When `overflow_allowed` is false, an axis whose projected offset
    /// would exit bounds is stopped and the offset clamped before the
    /// caller renders. An axis still moving while out of bounds has its
    /// deceleration multiplied by 5 so the pull-back ends firmly instead
    /// of asymptotically (tuned heuristic, not physics).
    pub fn step(&mut self, now: f64, bounds: &Bounds, overflow_allowed: bool) -> StepOutcome {
        let dt = (now - self.last_tick) as f32;
        self.last_tick = now;

        let vx = self.velocity.x + self.accel.x * dt;
        let vy = self.velocity.y + self.accel.y * dt;

        // trapezoidal displacement: (v0 + v1) / 2 * dt
        self.offset.x += (self.velocity.x + vx) / 2.0 * dt;
        self.offset.y += (self.velocity.y + vy) / 2.0 * dt;

        // an axis whose velocity crossed zero has finished decelerating
        self.velocity.x = if vx * self.accel.x < 0.0 { vx } else { 0.0 };
        self.velocity.y = if vy * self.accel.y < 0.0 { vy } else { 0.0 };

        if !overflow_allowed {
            if bounds.is_out_x(self.offset.x) {
                self.velocity.x = 0.0;
            }
            if bounds.is_out_y(self.offset.y) {
                self.velocity.y = 0.0;
            }
            self.offset = bounds.clamp(self.offset);
        }

        // still moving past a boundary: firm up the remaining deceleration
        if self.velocity.x != 0.0 && bounds.is_out_x(self.offset.x) {
            self.accel.x *= 5.0;
        }
        if self.velocity.y != 0.0 && bounds.is_out_y(self.offset.y) {
            self.accel.y *= 5.0;
        }

        if self.velocity.x.abs() + self.velocity.y.abs() > 0.0 {
            StepOutcome::Continue(self.offset)
        } else if bounds.contains(self.offset) {
            tracing::trace!(x = self.offset.x, y = self.offset.y, "momentum settled");
            StepOutcome::Settled(self.offset)
        } else {
            tracing::trace!(x = self.offset.x, y = self.offset.y, "momentum overflowed");
            StepOutcome::Overflowed(self.offset)
        }
    }
}
