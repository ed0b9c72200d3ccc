//! Layout measurement boundary
//!
//! The engine never touches layout itself; a host-provided source reports
//! viewport/content extents on demand. Measurement happens at controller
//! construction and on every explicit `repaint()`, never implicitly.

use flick_core::geometry::{Extent, Point};

/// Identifier of an element inside the scrolled content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(pub u64);

/// On-demand source of viewport and content extents
pub trait MeasureSource {
    /// Extent of the fixed viewport
    fn viewport(&self) -> Extent;

    /// Extent of the scrolled content, or `None` when the container has
    /// no content element (construction fails on this)
    fn content(&self) -> Option<Extent>;

    /// Position of `element` relative to the content origin, for
    /// `scroll_to_element`; `None` for unknown elements
    fn element_position(&self, element: ElementId) -> Option<Point> {
        let _ = element;
        None
    }
}
