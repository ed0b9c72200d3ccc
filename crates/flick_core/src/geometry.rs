//! Scroll geometry
//!
//! Pure data types for viewport/content measurement and the per-axis
//! scrollable range. Offsets are content translations relative to the
//! viewport: `0` is always the near edge, and the far edge is the most
//! negative reachable value. Nothing in this module has side effects.

/// Width/height of a measured region in pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Extent {
    pub width: f32,
    pub height: f32,
}

impl Extent {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Raw pointer position in viewport coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Per-axis delta or velocity (px, or px/ms for velocities)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Content translation relative to the viewport
///
/// `x` is the "left" translation, `y` the "top" translation; both go
/// negative as the content scrolls down/right.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Offset {
    pub x: f32,
    pub y: f32,
}

impl Offset {
    pub const ZERO: Offset = Offset { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Scrollable range per axis: valid offsets live in `[min, 0]`
///
/// Invariant: `min_x <= 0` and `min_y <= 0`. [`Bounds::compute`] always
/// upholds this, even when the content is smaller than the viewport (the
/// min collapses to zero and the axis has no room to scroll).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub min_x: f32,
    pub min_y: f32,
}

impl Bounds {
    /// Derive the scrollable range from viewport and content extents
    ///
    /// Each axis's minimum is `viewport - content`, never positive.
    pub fn compute(viewport: Extent, content: Extent) -> Self {
        Self {
            min_x: (viewport.width - content.width).min(0.0),
            min_y: (viewport.height - content.height).min(0.0),
        }
    }

    /// Constrain an offset into `[min, 0]` per axis; idempotent
    pub fn clamp(&self, offset: Offset) -> Offset {
        Offset {
            x: offset.x.clamp(self.min_x, 0.0),
            y: offset.y.clamp(self.min_y, 0.0),
        }
    }

    /// Whether a horizontal offset is outside the scrollable range
    pub fn is_out_x(&self, x: f32) -> bool {
        x > 0.0 || x < self.min_x
    }

    /// Whether a vertical offset is outside the scrollable range
    pub fn is_out_y(&self, y: f32) -> bool {
        y > 0.0 || y < self.min_y
    }

    /// Whether an offset is inside the scrollable range on both axes
    pub fn contains(&self, offset: Offset) -> bool {
        !self.is_out_x(offset.x) && !self.is_out_y(offset.y)
    }
}

/// Which axes may actually scroll
///
/// Derived from configured intent AND real overflow: an axis whose
/// content fits inside the viewport is never scrollable, regardless of
/// configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AxisEnablement {
    pub horizontal: bool,
    pub vertical: bool,
}

impl AxisEnablement {
    pub fn derive(horizontal: bool, vertical: bool, bounds: &Bounds) -> Self {
        Self {
            horizontal: horizontal && bounds.min_x < 0.0,
            vertical: vertical && bounds.min_y < 0.0,
        }
    }

    /// True when at least one axis can scroll
    pub fn any(&self) -> bool {
        self.horizontal || self.vertical
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_are_never_positive() {
        let cases = [
            (Extent::new(300.0, 300.0), Extent::new(300.0, 900.0)),
            (Extent::new(300.0, 300.0), Extent::new(900.0, 300.0)),
            (Extent::new(300.0, 300.0), Extent::new(100.0, 100.0)),
            (Extent::new(0.0, 0.0), Extent::new(0.0, 0.0)),
        ];
        for (viewport, content) in cases {
            let bounds = Bounds::compute(viewport, content);
            assert!(bounds.min_x <= 0.0);
            assert!(bounds.min_y <= 0.0);
        }
    }

    #[test]
    fn fitting_content_collapses_to_zero() {
        let bounds = Bounds::compute(Extent::new(300.0, 300.0), Extent::new(200.0, 300.0));
        assert_eq!(bounds.min_x, 0.0);
        assert_eq!(bounds.min_y, 0.0);
    }

    #[test]
    fn clamp_is_idempotent() {
        let bounds = Bounds::compute(Extent::new(300.0, 300.0), Extent::new(300.0, 900.0));
        let offsets = [
            Offset::new(0.0, 50.0),
            Offset::new(-10.0, -650.0),
            Offset::new(5.0, -300.0),
            Offset::new(0.0, -600.0),
        ];
        for offset in offsets {
            let once = bounds.clamp(offset);
            assert_eq!(bounds.clamp(once), once);
            assert!(bounds.contains(once));
        }
    }

    #[test]
    fn out_of_range_predicates() {
        let bounds = Bounds { min_x: -100.0, min_y: -600.0 };
        assert!(bounds.is_out_y(0.1));
        assert!(bounds.is_out_y(-600.1));
        assert!(!bounds.is_out_y(0.0));
        assert!(!bounds.is_out_y(-600.0));
        assert!(bounds.is_out_x(-150.0));
        assert!(!bounds.is_out_x(-50.0));
    }

    #[test]
    fn axis_without_overflow_is_never_enabled() {
        let bounds = Bounds::compute(Extent::new(300.0, 300.0), Extent::new(300.0, 900.0));
        let axes = AxisEnablement::derive(true, true, &bounds);
        assert!(!axes.horizontal);
        assert!(axes.vertical);

        let axes = AxisEnablement::derive(true, false, &bounds);
        assert!(!axes.any());
    }
}
