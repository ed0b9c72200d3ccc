//! Touch-driven inertial scroll engine
//!
//! Pointer events come in, offset notifications go out; rendering and
//! layout stay on the host's side of the [`MeasureSource`] boundary.
//!
//! ```no_run
//! use flick_core::config::ScrollConfig;
//! use flick_core::geometry::{Extent, Point};
//! use flick_scroll::{ExtensionRegistry, MeasureSource, Scroller};
//!
//! struct Fixed;
//! impl MeasureSource for Fixed {
//!     fn viewport(&self) -> Extent { Extent::new(300.0, 300.0) }
//!     fn content(&self) -> Option<Extent> { Some(Extent::new(300.0, 900.0)) }
//! }
//!
//! let registry = ExtensionRegistry::new();
//! let mut scroller =
//!     Scroller::new(Box::new(Fixed), ScrollConfig::default(), &registry).unwrap();
//! scroller.touch_start(Point::new(150.0, 200.0), 0.0);
//! let _ = scroller.touch_move(Point::new(150.0, 150.0), 16.0);
//! scroller.touch_end(32.0);
//! let mut now = 32.0;
//! while scroller.tick(now) {
//!     now += 16.0;
//! }
//! ```

pub mod controller;
pub mod extension;
pub mod gesture;
pub mod hint;
pub mod measure;
pub mod scrollbar;

pub use controller::{ScrollState, Scroller};
pub use extension::{ExtensionFactory, ExtensionRegistry, ScrollExtension, ScrollViewport};
pub use gesture::{GesturePhase, GestureSample};
pub use hint::{EdgeHints, HintSink, OverflowHint};
pub use measure::{ElementId, MeasureSource};
pub use scrollbar::{BarGeometry, Scrollbar, ScrollbarFrame, ScrollbarSink};
