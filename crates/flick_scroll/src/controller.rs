//! Scroll controller
//!
//! Owns the live offset and drives the full interaction cycle: pointer
//! input, rubber-band resistance at the boundaries, post-release
//! momentum, snap-back, and the notification channel. The host feeds it
//! pointer events plus a frame clock (`tick`); everything else is pull.

use flick_core::config::ScrollConfig;
use flick_core::error::{Result, ScrollError};
use flick_core::events::{
    Emitter, EventKind, ListenerId, RenderFrame, ScrollEvent, ScrollPosition,
};
use flick_core::fsm::{gesture_events, StateTransitions};
use flick_core::geometry::{AxisEnablement, Bounds, Extent, Offset, Point};
use flick_motion::{Momentum, StepOutcome};

use crate::extension::{ExtensionRegistry, ScrollExtension, ScrollViewport};
use crate::gesture::{GesturePhase, GestureSample};
use crate::measure::{ElementId, MeasureSource};

/// Offset plus interaction phase, the externally observable state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollState {
    pub offset: Offset,
    pub phase: GesturePhase,
}

/// Deadline of an in-flight eased render
///
/// Only a settle that closes a gesture (snap-back) reports `ScrollEnd`
/// when it passes; an animated `scroll_to` finishes silently.
#[derive(Debug, Clone, Copy)]
struct Settle {
    deadline: f64,
    notify: bool,
}

/// The scroll engine for one container
pub struct Scroller {
    config: ScrollConfig,
    measure: Box<dyn MeasureSource>,
    state: ScrollState,
    bounds: Bounds,
    axes: AxisEnablement,
    viewport: Extent,
    content: Extent,
    sample: GestureSample,
    emitter: Emitter,
    extensions: Vec<Box<dyn ScrollExtension>>,
    momentum: Option<Momentum>,
    settle: Option<Settle>,
    disabled: bool,
    destroyed: bool,
    /// Most recent host timestamp seen on any entry point
    clock: f64,
}

impl Scroller {
    /// Measure the container and build a controller
    ///
    /// Fails when the container has no content element. Extension
    /// factories run once here against the initial geometry.
    pub fn new(
        measure: Box<dyn MeasureSource>,
        config: ScrollConfig,
        registry: &ExtensionRegistry,
    ) -> Result<Self> {
        let viewport = measure.viewport();
        let content = measure.content().ok_or(ScrollError::EmptyContent)?;
        let bounds = Bounds::compute(viewport, content);
        let axes = AxisEnablement::derive(config.horizontal, config.vertical, &bounds);

        let mut scroller = Self {
            config,
            measure,
            state: ScrollState {
                offset: Offset::ZERO,
                phase: GesturePhase::Idle,
            },
            bounds,
            axes,
            viewport,
            content,
            sample: GestureSample::default(),
            emitter: Emitter::new(),
            extensions: Vec::new(),
            momentum: None,
            settle: None,
            disabled: false,
            destroyed: false,
            clock: 0.0,
        };
        scroller.extensions = registry.instantiate(&scroller.config, &scroller.view());
        tracing::debug!(
            min_x = bounds.min_x,
            min_y = bounds.min_y,
            extensions = scroller.extensions.len(),
            "scroller created"
        );
        Ok(scroller)
    }

    // ========================================================================
    // Touch input
    // ========================================================================

    /// Contact started; arms the gesture and freezes any animation
    pub fn touch_start(&mut self, point: Point, now: f64) {
        if self.disabled || self.destroyed {
            return;
        }
        self.clock = now;
        // a second finger during a confirmed drag changes nothing
        if self.state.phase == GesturePhase::Scrolling {
            return;
        }
        self.cancel_animation();
        self.sample = GestureSample::begin(point, now);
        self.set_phase(gesture_events::CONTACT_START);
    }

    /// Contact moved; returns true when the engine consumed the move (the
    /// host should then suppress its default handling)
    #[must_use]
    pub fn touch_move(&mut self, point: Point, now: f64) -> bool {
        if self.disabled || self.destroyed || self.state.phase == GesturePhase::Idle {
            return false;
        }
        self.clock = now;

        let delta = self.sample.masked_delta(point, self.axes);
        if self.state.phase == GesturePhase::Prepare {
            if delta.x.abs() < self.config.min_drag_distance
                && delta.y.abs() < self.config.min_drag_distance
            {
                return false;
            }
            self.set_phase(gesture_events::DRAG_CONFIRMED);
            self.emit(ScrollEvent::ScrollStart);
        }
        self.sample.advance(delta, now);

        let mut next = self.state.offset;
        // out-of-range drag fights a 3:1 resistance on the offending axis
        next.x += if self.bounds.is_out_x(next.x) {
            delta.x / 3.0
        } else {
            delta.x
        };
        next.y += if self.bounds.is_out_y(next.y) {
            delta.y / 3.0
        } else {
            delta.y
        };
        if !self.config.overflow {
            next = self.bounds.clamp(next);
        }

        tracing::trace!(x = next.x, y = next.y, "drag");
        self.commit(next, 0.0);
        self.emit(ScrollEvent::Scroll(ScrollPosition {
            left: -next.x,
            top: -next.y,
        }));
        true
    }

    /// Contact lifted; hands the offset to momentum or snap-back.
    /// Returns true when a scroll gesture actually ended.
    pub fn touch_end(&mut self, now: f64) -> bool {
        if self.disabled || self.destroyed || self.state.phase == GesturePhase::Idle {
            return false;
        }
        self.clock = now;

        if self.state.phase != GesturePhase::Scrolling {
            // a tap: release without ever having scrolled
            self.set_phase(gesture_events::CONTACT_END);
            return false;
        }
        self.set_phase(gesture_events::CONTACT_END);

        if !self.bounds.contains(self.state.offset) {
            self.start_snap_back();
        } else if let Some(velocity) = self.sample.release_velocity() {
            tracing::debug!(vx = velocity.x, vy = velocity.y, "momentum start");
            self.momentum = Some(Momentum::new(
                self.state.offset,
                velocity,
                self.config.deceleration,
                now,
            ));
        }
        // no velocity signal: rest where released, nothing to animate
        true
    }

    // ========================================================================
    // Frame clock
    // ========================================================================

    /// Advance animations to `now`; returns true while another frame is
    /// wanted
    pub fn tick(&mut self, now: f64) -> bool {
        if self.destroyed {
            return false;
        }
        self.clock = now;
        let mut busy = false;

        if let Some(mut momentum) = self.momentum.take() {
            match momentum.step(now, &self.bounds, self.config.overflow) {
                StepOutcome::Continue(offset) => {
                    self.commit(offset, 0.0);
                    self.momentum = Some(momentum);
                    busy = true;
                }
                StepOutcome::Settled(offset) => {
                    self.commit(offset, 0.0);
                    self.emit(ScrollEvent::ScrollEnd);
                }
                StepOutcome::Overflowed(offset) => {
                    self.commit(offset, 0.0);
                    self.start_snap_back();
                    busy = true;
                }
            }
        } else if let Some(settle) = self.settle {
            if now >= settle.deadline {
                self.settle = None;
                if settle.notify {
                    self.emit(ScrollEvent::ScrollEnd);
                }
            } else {
                busy = true;
            }
        }

        for extension in &mut self.extensions {
            busy |= extension.tick(now);
        }
        busy
    }

    // ========================================================================
    // Programmatic API
    // ========================================================================

    /// Scroll to an absolute position (positive page coordinates); a
    /// `None` axis keeps its current value, disabled axes ignore requests
    pub fn scroll_to(&mut self, top: Option<f32>, left: Option<f32>, duration: f64) {
        if self.disabled || self.destroyed {
            return;
        }
        self.cancel_animation();

        let mut target = self.state.offset;
        if self.axes.vertical {
            if let Some(top) = top {
                target.y = -top;
            }
        }
        if self.axes.horizontal {
            if let Some(left) = left {
                target.x = -left;
            }
        }
        let duration = duration.max(0.0);
        self.commit(self.bounds.clamp(target), duration);
        if duration > 0.0 {
            // not a gesture: the deadline only holds the frame loop open
            self.settle = Some(Settle {
                deadline: self.clock + duration,
                notify: false,
            });
        }
    }

    /// Scroll an element's content position to the viewport origin
    pub fn scroll_to_element(&mut self, element: ElementId, duration: f64) {
        let Some(position) = self.measure.element_position(element) else {
            tracing::debug!(?element, "scroll_to_element: unknown element");
            return;
        };
        self.scroll_to(Some(position.y), Some(position.x), duration);
    }

    /// Re-measure after a content or viewport change and re-constrain the
    /// offset to the new range
    pub fn repaint(&mut self) {
        if self.disabled || self.destroyed {
            return;
        }
        self.recalculate();
        let view = self.view();
        for extension in &mut self.extensions {
            extension.reset(&view);
        }
        self.commit(self.bounds.clamp(self.state.offset), 0.0);
    }

    /// Suspend input and programmatic scrolling; an in-flight gesture is
    /// ended first so listeners see a consistent close
    pub fn disable(&mut self) {
        if self.disabled || self.destroyed {
            return;
        }
        if self.state.phase == GesturePhase::Scrolling {
            let _ = self.touch_end(self.clock);
        }
        self.cancel_animation();
        self.state.phase = GesturePhase::Idle;
        self.disabled = true;
        tracing::debug!("scroller disabled");
    }

    /// Resume after `disable`
    pub fn enable(&mut self) {
        if self.destroyed {
            return;
        }
        self.disabled = false;
    }

    /// Tear down: drops animations, extensions and listeners. The
    /// controller refuses all further input.
    pub fn destroy(&mut self) {
        if self.destroyed {
            return;
        }
        self.cancel_animation();
        for extension in &mut self.extensions {
            extension.destroy();
        }
        self.extensions.clear();
        self.emitter.clear();
        self.state.phase = GesturePhase::Idle;
        self.destroyed = true;
        tracing::debug!("scroller destroyed");
    }

    // ========================================================================
    // Notifications
    // ========================================================================

    /// Subscribe to scroll notifications; `filter` of `None` receives all
    pub fn on<F>(&mut self, filter: Option<EventKind>, callback: F) -> ListenerId
    where
        F: FnMut(&ScrollEvent) + 'static,
    {
        self.emitter.subscribe(filter, callback)
    }

    /// Remove a listener; stale handles are harmless
    pub fn off(&mut self, id: ListenerId) -> bool {
        self.emitter.unsubscribe(id)
    }

    // ========================================================================
    // Getters
    // ========================================================================

    /// Vertical scroll position in page coordinates (>= 0 inside bounds)
    pub fn scroll_top(&self) -> f32 {
        -self.state.offset.y
    }

    /// Horizontal scroll position in page coordinates
    pub fn scroll_left(&self) -> f32 {
        -self.state.offset.x
    }

    pub fn offset(&self) -> Offset {
        self.state.offset
    }

    pub fn phase(&self) -> GesturePhase {
        self.state.phase
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn axes(&self) -> AxisEnablement {
        self.axes
    }

    pub fn config(&self) -> &ScrollConfig {
        &self.config
    }

    pub fn is_enabled(&self) -> bool {
        !self.disabled && !self.destroyed
    }

    /// True while momentum or snap-back owns the offset
    pub fn is_animating(&self) -> bool {
        self.momentum.is_some() || self.settle.is_some()
    }

    // ========================================================================
    // Internals
    // ========================================================================

    fn view(&self) -> ScrollViewport {
        ScrollViewport {
            offset: self.state.offset,
            bounds: self.bounds,
            axes: self.axes,
            viewport: self.viewport,
            content: self.content,
        }
    }

    /// Deliver to listeners first, then extensions, all against the
    /// already-updated state
    fn emit(&mut self, event: ScrollEvent) {
        self.emitter.emit(&event);
        let view = self.view();
        for extension in &mut self.extensions {
            extension.on_event(&event, &view, self.clock);
        }
    }

    /// Store the offset and notify the renderer
    fn commit(&mut self, offset: Offset, duration: f64) {
        self.state.offset = offset;
        self.emit(ScrollEvent::Render(RenderFrame {
            left: offset.x,
            top: offset.y,
            duration,
        }));
    }

    fn cancel_animation(&mut self) {
        if self.momentum.take().is_some() || self.settle.take().is_some() {
            tracing::trace!("animation cancelled");
        }
    }

    fn set_phase(&mut self, event: u32) {
        if let Some(next) = self.state.phase.on_event(event) {
            tracing::trace!(from = ?self.state.phase, to = ?next, "phase");
            self.state.phase = next;
        }
    }

    /// Ask the renderer to ease back inside bounds and arm the settle
    /// deadline that closes the gesture
    fn start_snap_back(&mut self) {
        let target = self.bounds.clamp(self.state.offset);
        let duration = self.config.snap_back_duration;
        tracing::debug!(x = target.x, y = target.y, "snap back");
        self.commit(target, duration);
        self.settle = Some(Settle {
            deadline: self.clock + duration,
            notify: true,
        });
    }

    fn recalculate(&mut self) {
        self.viewport = self.measure.viewport();
        self.content = self.measure.content().unwrap_or_default();
        self.bounds = Bounds::compute(self.viewport, self.content);
        self.axes =
            AxisEnablement::derive(self.config.horizontal, self.config.vertical, &self.bounds);
        tracing::debug!(min_x = self.bounds.min_x, min_y = self.bounds.min_y, "remeasured");
    }
}
