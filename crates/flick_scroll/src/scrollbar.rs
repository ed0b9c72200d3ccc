//! Scrollbar indicator extension
//!
//! A passive indicator: shows on scroll start, tracks render frames, and
//! fades out after an idle delay once motion settles. Thumb geometry is
//! pushed to a host sink (the stand-in for direct DOM writes) whenever it
//! changes.

use flick_core::config::ScrollConfig;
use flick_core::events::ScrollEvent;

use crate::extension::{ExtensionRegistry, ScrollExtension, ScrollViewport};

/// Indicator opacity while scrolling
const VISIBLE_OPACITY: f32 = 0.5;
/// Thumb length floor as a fraction of the track
const MIN_THUMB_LENGTH: f32 = 0.05;
/// Thumb travel ceiling as a fraction of the track
const MAX_THUMB_TRAVEL: f32 = 0.95;

/// Visual state of one bar's thumb
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarGeometry {
    /// Thumb displacement from the near edge of the track, px
    pub travel: f32,
    /// Thumb length as a fraction of the track, floored at 5%
    pub length: f32,
}

/// Frame delivered to the host sink
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollbarFrame {
    pub vertical: Option<BarGeometry>,
    pub horizontal: Option<BarGeometry>,
    pub opacity: f32,
    /// Duration hint carried over from the render frame (ms)
    pub duration: f64,
}

/// Host callback receiving scrollbar frames
pub type ScrollbarSink = Box<dyn FnMut(ScrollbarFrame)>;

/// The scrollbar indicator
pub struct Scrollbar {
    sink: ScrollbarSink,
    hide_delay: f64,
    opacity: f32,
    hide_deadline: Option<f64>,
    view: ScrollViewport,
}

impl Scrollbar {
    pub fn new(sink: ScrollbarSink, config: &ScrollConfig, view: &ScrollViewport) -> Self {
        let mut scrollbar = Self {
            sink,
            hide_delay: config.scrollbar_hide_delay,
            opacity: 0.0,
            hide_deadline: None,
            view: *view,
        };
        scrollbar.push(0.0);
        scrollbar
    }

    /// Register the scrollbar factory; it declines unless
    /// `config.scrollbar` is set. `make_sink` is invoked once per
    /// accepting controller.
    pub fn register<F>(registry: &mut ExtensionRegistry, make_sink: F)
    where
        F: Fn() -> ScrollbarSink + 'static,
    {
        registry.register("scrollbar", move |config, view| {
            if !config.scrollbar {
                return None;
            }
            Some(Box::new(Scrollbar::new(make_sink(), config, view)))
        });
    }

    fn vertical_geometry(&self) -> Option<BarGeometry> {
        if !self.view.axes.vertical {
            return None;
        }
        Some(bar_geometry(
            self.view.offset.y,
            self.view.bounds.min_y,
            self.view.viewport.height,
            self.view.content.height,
        ))
    }

    fn horizontal_geometry(&self) -> Option<BarGeometry> {
        if !self.view.axes.horizontal {
            return None;
        }
        Some(bar_geometry(
            self.view.offset.x,
            self.view.bounds.min_x,
            self.view.viewport.width,
            self.view.content.width,
        ))
    }

    fn push(&mut self, duration: f64) {
        let frame = ScrollbarFrame {
            vertical: self.vertical_geometry(),
            horizontal: self.horizontal_geometry(),
            opacity: self.opacity,
            duration,
        };
        (self.sink)(frame);
    }
}

/// Thumb geometry for one axis
///
/// While overscrolled the thumb shrinks by the overflow fraction, floored
/// at 5%; travel is clamped so the thumb never leaves the track.
fn bar_geometry(offset: f32, min: f32, viewport: f32, content: f32) -> BarGeometry {
    if content <= 0.0 {
        return BarGeometry {
            travel: 0.0,
            length: MIN_THUMB_LENGTH,
        };
    }

    let base = viewport / content;
    // the 5% floor only guards the overscroll shrink; an in-range thumb
    // keeps the raw visible fraction
    let length = if offset > 0.0 || offset < min {
        let over = offset.max(min - offset);
        (base - over / content).max(MIN_THUMB_LENGTH)
    } else {
        base
    };

    let travel = (-offset / content * viewport).clamp(0.0, viewport * MAX_THUMB_TRAVEL);

    BarGeometry { travel, length }
}

impl ScrollExtension for Scrollbar {
    fn name(&self) -> &'static str {
        "scrollbar"
    }

    fn on_event(&mut self, event: &ScrollEvent, view: &ScrollViewport, now: f64) {
        self.view = *view;
        match event {
            ScrollEvent::ScrollStart => {
                self.hide_deadline = None;
                self.opacity = VISIBLE_OPACITY;
                self.push(0.0);
            }
            ScrollEvent::Render(frame) => {
                self.push(frame.duration);
            }
            ScrollEvent::ScrollEnd => {
                self.hide_deadline = Some(now + self.hide_delay);
            }
            ScrollEvent::Scroll(_) => {}
        }
    }

    fn tick(&mut self, now: f64) -> bool {
        match self.hide_deadline {
            Some(deadline) if now >= deadline => {
                self.hide_deadline = None;
                self.opacity = 0.0;
                self.push(0.0);
                false
            }
            Some(_) => true,
            None => false,
        }
    }

    fn reset(&mut self, view: &ScrollViewport) {
        self.view = *view;
        self.push(0.0);
    }

    fn destroy(&mut self) {
        self.opacity = 0.0;
        self.hide_deadline = None;
        self.push(0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thumb_length_is_the_visible_fraction() {
        let bar = bar_geometry(0.0, -600.0, 300.0, 900.0);
        assert!((bar.length - 1.0 / 3.0).abs() < 1e-6);
        assert_eq!(bar.travel, 0.0);
    }

    #[test]
    fn in_range_thumb_is_not_floored() {
        // 1% visible fraction stays 1% while the offset is in range
        let bar = bar_geometry(0.0, -990.0, 10.0, 1000.0);
        assert!((bar.length - 0.01).abs() < 1e-6);
    }

    #[test]
    fn thumb_travel_follows_the_offset() {
        let bar = bar_geometry(-300.0, -600.0, 300.0, 900.0);
        assert!((bar.travel - 100.0).abs() < 1e-6);
    }

    #[test]
    fn overscroll_shrinks_the_thumb_with_a_floor() {
        // 300px past the far bound: length loses 300/900
        let bar = bar_geometry(-900.0, -600.0, 300.0, 900.0);
        assert!((bar.length - (1.0 / 3.0 - 300.0 / 900.0)).abs() < 1e-6 || bar.length == 0.05);
        assert!(bar.length >= 0.05);

        // far overscroll hits the floor
        let bar = bar_geometry(-5000.0, -600.0, 300.0, 900.0);
        assert_eq!(bar.length, 0.05);
    }

    #[test]
    fn travel_never_leaves_the_track() {
        let bar = bar_geometry(-5000.0, -600.0, 300.0, 900.0);
        assert_eq!(bar.travel, 300.0 * 0.95);
        let bar = bar_geometry(50.0, -600.0, 300.0, 900.0);
        assert_eq!(bar.travel, 0.0);
    }
}
