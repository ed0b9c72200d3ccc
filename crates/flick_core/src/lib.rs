//! flick core primitives
//!
//! This crate provides the foundational types for the flick scroll engine:
//!
//! - **Geometry**: viewport/content extents, offsets and per-axis bounds
//! - **Configuration**: the immutable scroll config snapshot
//! - **Events**: the observer registry for scroll notifications
//! - **State machines**: the transition trait driving gesture phases
//!
//! # Example
//!
//! ```rust
//! use flick_core::geometry::{Bounds, Extent, Offset};
//!
//! let bounds = Bounds::compute(Extent::new(300.0, 300.0), Extent::new(300.0, 900.0));
//! assert_eq!(bounds.min_y, -600.0);
//!
//! // Clamping is idempotent and never fails
//! let clamped = bounds.clamp(Offset::new(0.0, -650.0));
//! assert_eq!(clamped, Offset::new(0.0, -600.0));
//! ```

pub mod config;
pub mod error;
pub mod events;
pub mod fsm;
pub mod geometry;

pub use config::ScrollConfig;
pub use error::{Result, ScrollError};
pub use events::{Emitter, EventKind, ListenerId, RenderFrame, ScrollEvent, ScrollPosition};
pub use fsm::StateTransitions;
pub use geometry::{AxisEnablement, Bounds, Extent, Offset, Point, Vec2};
