//! Gesture phase machine and pointer sample bookkeeping
//!
//! A contact moves through `Idle -> Prepare -> Scrolling`: `Prepare`
//! holds taps and near-stationary touches without disturbing the offset,
//! and only pointer travel past the drag threshold confirms a scroll.
//! The sample keeps just enough history (last delta + elapsed time) to
//! derive a release velocity.

use flick_core::fsm::{gesture_events, StateTransitions};
use flick_core::geometry::{AxisEnablement, Point, Vec2};

/// Phase of the touch interaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GesturePhase {
    /// No active contact, offset static
    #[default]
    Idle,
    /// Contact started, drag not yet confirmed (taps pass through)
    Prepare,
    /// Confirmed drag; the live offset follows the pointer
    Scrolling,
}

impl StateTransitions for GesturePhase {
    fn on_event(&self, event: u32) -> Option<Self> {
        use gesture_events::*;
        match (self, event) {
            (GesturePhase::Idle, CONTACT_START) => Some(GesturePhase::Prepare),
            (GesturePhase::Prepare, DRAG_CONFIRMED) => Some(GesturePhase::Scrolling),
            (GesturePhase::Prepare, CONTACT_END) => Some(GesturePhase::Idle),
            (GesturePhase::Scrolling, CONTACT_END) => Some(GesturePhase::Idle),
            _ => None,
        }
    }
}

/// Last observed pointer position/time plus the velocity signal captured
/// between the two most recent moves
///
/// Reset on every gesture start; meaningless outside an active contact.
#[derive(Debug, Clone, Copy, Default)]
pub struct GestureSample {
    /// Reference pointer position; advances only by applied deltas, so
    /// sub-threshold movement keeps accumulating against it
    pub point: Point,
    /// Time of the most recent applied move
    pub time: f64,
    /// Raw per-axis delta of the most recent applied move
    pub delta: Vec2,
    /// Time between the two most recent applied moves (ms)
    pub elapsed: f64,
}

impl GestureSample {
    /// Re-arm at contact start
    pub fn begin(point: Point, now: f64) -> Self {
        Self {
            point,
            time: now,
            delta: Vec2::ZERO,
            elapsed: 0.0,
        }
    }

    /// Raw move delta on the enabled axes; a disabled axis contributes 0
    pub fn masked_delta(&self, point: Point, axes: AxisEnablement) -> Vec2 {
        Vec2 {
            x: if axes.horizontal {
                point.x - self.point.x
            } else {
                0.0
            },
            y: if axes.vertical {
                point.y - self.point.y
            } else {
                0.0
            },
        }
    }

    /// Advance the reference point after an applied move
    pub fn advance(&mut self, delta: Vec2, now: f64) {
        self.point.x += delta.x;
        self.point.y += delta.y;
        self.delta = delta;
        self.elapsed = now - self.time;
        self.time = now;
    }

    /// Per-axis release velocity in px/ms, `None` without a time signal
    pub fn release_velocity(&self) -> Option<Vec2> {
        if self.elapsed <= 0.0 {
            return None;
        }
        let elapsed = self.elapsed as f32;
        Some(Vec2 {
            x: self.delta.x / elapsed,
            y: self.delta.y / elapsed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flick_core::fsm::gesture_events::*;

    #[test]
    fn phase_transition_table() {
        assert_eq!(
            GesturePhase::Idle.on_event(CONTACT_START),
            Some(GesturePhase::Prepare)
        );
        assert_eq!(
            GesturePhase::Prepare.on_event(DRAG_CONFIRMED),
            Some(GesturePhase::Scrolling)
        );
        assert_eq!(
            GesturePhase::Prepare.on_event(CONTACT_END),
            Some(GesturePhase::Idle)
        );
        assert_eq!(
            GesturePhase::Scrolling.on_event(CONTACT_END),
            Some(GesturePhase::Idle)
        );
        // no transition on anything else
        assert_eq!(GesturePhase::Idle.on_event(CONTACT_END), None);
        assert_eq!(GesturePhase::Scrolling.on_event(DRAG_CONFIRMED), None);
    }

    #[test]
    fn disabled_axis_contributes_nothing() {
        let sample = GestureSample::begin(Point::new(100.0, 100.0), 0.0);
        let axes = AxisEnablement {
            horizontal: false,
            vertical: true,
        };
        let delta = sample.masked_delta(Point::new(150.0, 60.0), axes);
        assert_eq!(delta, Vec2::new(0.0, -40.0));
    }

    #[test]
    fn reference_point_holds_until_a_move_applies() {
        let mut sample = GestureSample::begin(Point::new(0.0, 0.0), 0.0);
        let axes = AxisEnablement {
            horizontal: true,
            vertical: true,
        };

        // two ignored 6px nudges accumulate to 12px against the reference
        assert_eq!(
            sample.masked_delta(Point::new(0.0, 6.0), axes),
            Vec2::new(0.0, 6.0)
        );
        assert_eq!(
            sample.masked_delta(Point::new(0.0, 12.0), axes),
            Vec2::new(0.0, 12.0)
        );

        sample.advance(Vec2::new(0.0, 12.0), 32.0);
        assert_eq!(sample.point, Point::new(0.0, 12.0));
        assert_eq!(sample.elapsed, 32.0);
    }

    #[test]
    fn release_velocity_needs_a_time_signal() {
        let mut sample = GestureSample::begin(Point::new(0.0, 0.0), 0.0);
        assert!(sample.release_velocity().is_none());

        sample.advance(Vec2::new(0.0, -100.0), 100.0);
        assert_eq!(sample.release_velocity(), Some(Vec2::new(0.0, -1.0)));
    }
}
