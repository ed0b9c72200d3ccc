//! Overflow hint extension
//!
//! Tells the host which edges still have content hidden beyond them so it
//! can draw affordances (shadows, chevrons). Hints fire only at the
//! extremes: an axis resting at one bound hints the opposite edge, and a
//! mid-range offset hints neither.

use flick_core::config::ScrollConfig;
use flick_core::events::ScrollEvent;

use crate::extension::{ExtensionRegistry, ScrollExtension, ScrollViewport};

/// Which edges currently hide content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EdgeHints {
    pub left: bool,
    pub right: bool,
    pub top: bool,
    pub bottom: bool,
}

impl EdgeHints {
    fn from_view(view: &ScrollViewport) -> Self {
        let mut hints = EdgeHints::default();
        if view.axes.horizontal {
            if view.offset.x >= 0.0 {
                hints.right = true;
            } else if view.offset.x <= view.bounds.min_x {
                hints.left = true;
            }
        }
        if view.axes.vertical {
            if view.offset.y >= 0.0 {
                hints.bottom = true;
            } else if view.offset.y <= view.bounds.min_y {
                hints.top = true;
            }
        }
        hints
    }
}

/// Host callback receiving edge hint updates
pub type HintSink = Box<dyn FnMut(EdgeHints)>;

/// The overflow hint
pub struct OverflowHint {
    sink: HintSink,
    last: Option<EdgeHints>,
}

impl OverflowHint {
    pub fn new(sink: HintSink, view: &ScrollViewport) -> Self {
        let mut hint = Self { sink, last: None };
        hint.push(view);
        hint
    }

    /// Register the hint factory; it declines unless
    /// `config.overflow_hint` is set.
    pub fn register<F>(registry: &mut ExtensionRegistry, make_sink: F)
    where
        F: Fn() -> HintSink + 'static,
    {
        registry.register("overflow_hint", move |config: &ScrollConfig, view| {
            if !config.overflow_hint {
                return None;
            }
            Some(Box::new(OverflowHint::new(make_sink(), view)))
        });
    }

    fn push(&mut self, view: &ScrollViewport) {
        let hints = EdgeHints::from_view(view);
        if self.last != Some(hints) {
            self.last = Some(hints);
            (self.sink)(hints);
        }
    }
}

impl ScrollExtension for OverflowHint {
    fn name(&self) -> &'static str {
        "overflow_hint"
    }

    fn on_event(&mut self, event: &ScrollEvent, view: &ScrollViewport, _now: f64) {
        match event {
            ScrollEvent::Render(_) | ScrollEvent::Scroll(_) | ScrollEvent::ScrollEnd => {
                self.push(view);
            }
            ScrollEvent::ScrollStart => {}
        }
    }

    fn reset(&mut self, view: &ScrollViewport) {
        self.last = None;
        self.push(view);
    }

    fn destroy(&mut self) {
        (self.sink)(EdgeHints::default());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flick_core::geometry::{AxisEnablement, Bounds, Extent, Offset};

    fn view(x: f32, y: f32) -> ScrollViewport {
        ScrollViewport {
            offset: Offset { x, y },
            bounds: Bounds {
                min_x: -200.0,
                min_y: -600.0,
            },
            axes: AxisEnablement {
                horizontal: true,
                vertical: true,
            },
            viewport: Extent::new(300.0, 300.0),
            content: Extent::new(500.0, 900.0),
        }
    }

    #[test]
    fn edges_light_up_at_the_extremes() {
        // resting at the origin: content hides beyond the far edges
        let hints = EdgeHints::from_view(&view(0.0, 0.0));
        assert!(!hints.left && hints.right);
        assert!(!hints.top && hints.bottom);

        // mid-range hints nothing
        assert_eq!(
            EdgeHints::from_view(&view(-100.0, -300.0)),
            EdgeHints::default()
        );

        // pinned to the far bounds: content hides beyond the near edges
        let hints = EdgeHints::from_view(&view(-200.0, -600.0));
        assert!(hints.left && !hints.right);
        assert!(hints.top && !hints.bottom);

        // overscroll counts as the matching extreme
        let hints = EdgeHints::from_view(&view(50.0, -700.0));
        assert!(hints.right && hints.top);
    }

    #[test]
    fn disabled_axis_stays_dark() {
        let mut v = view(0.0, 0.0);
        v.axes.horizontal = false;
        let hints = EdgeHints::from_view(&v);
        assert!(!hints.left && !hints.right);
        assert!(hints.bottom);
    }

    #[test]
    fn duplicate_frames_are_suppressed() {
        use std::cell::RefCell;
        use std::rc::Rc;

        let frames: Rc<RefCell<Vec<EdgeHints>>> = Rc::default();
        let sink = {
            let frames = frames.clone();
            Box::new(move |hints| frames.borrow_mut().push(hints))
        };
        let v = view(-100.0, -300.0);
        let mut hint = OverflowHint::new(sink, &v);
        assert_eq!(frames.borrow().len(), 1);

        // same geometry, no new frame
        hint.on_event(&ScrollEvent::ScrollEnd, &v, 0.0);
        assert_eq!(frames.borrow().len(), 1);

        hint.on_event(&ScrollEvent::ScrollEnd, &view(0.0, 0.0), 16.0);
        assert_eq!(frames.borrow().len(), 2);
    }
}
