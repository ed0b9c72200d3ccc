//! Interaction state machine support
//!
//! Widget interaction phases are modeled as flat state machines: a state
//! enum plus a pure transition function keyed by u32 event ids. An event
//! with no matching transition leaves the state untouched.

/// Gesture event ids consumed by [`StateTransitions::on_event`]
pub mod gesture_events {
    /// A contact (finger/pointer) touched down
    pub const CONTACT_START: u32 = 1;
    /// Pointer travel crossed the drag threshold
    pub const DRAG_CONFIRMED: u32 = 2;
    /// The contact lifted or was cancelled
    pub const CONTACT_END: u32 = 3;
}

/// Transition function for an interaction state enum
///
/// # Example
///
/// ```
/// use flick_core::fsm::{gesture_events, StateTransitions};
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
/// enum Latch {
///     #[default]
///     Open,
///     Closed,
/// }
///
/// impl StateTransitions for Latch {
///     fn on_event(&self, event: u32) -> Option<Self> {
///         match (self, event) {
///             (Latch::Open, gesture_events::CONTACT_START) => Some(Latch::Closed),
///             (Latch::Closed, gesture_events::CONTACT_END) => Some(Latch::Open),
///             _ => None,
///         }
///     }
/// }
///
/// assert_eq!(
///     Latch::Open.on_event(gesture_events::CONTACT_START),
///     Some(Latch::Closed)
/// );
/// assert_eq!(Latch::Open.on_event(gesture_events::CONTACT_END), None);
/// ```
pub trait StateTransitions:
    Clone + Copy + PartialEq + Eq + std::hash::Hash + Send + Sync + std::fmt::Debug + 'static
{
    /// Handle an event and return the new state, or None if no transition
    fn on_event(&self, event: u32) -> Option<Self>;
}
