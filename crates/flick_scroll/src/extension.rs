//! Extension protocol
//!
//! Decorative attachments (scrollbar indicator, overflow hints) observe
//! the controller through this interface instead of reaching into its
//! state. Factories are registered by name; each one sees the merged
//! configuration at controller construction and may decline.

use rustc_hash::FxHashMap;

use flick_core::config::ScrollConfig;
use flick_core::events::ScrollEvent;
use flick_core::geometry::{AxisEnablement, Bounds, Extent, Offset};

/// Read-only snapshot of the controller handed to extensions
#[derive(Debug, Clone, Copy)]
pub struct ScrollViewport {
    pub offset: Offset,
    pub bounds: Bounds,
    pub axes: AxisEnablement,
    pub viewport: Extent,
    pub content: Extent,
}

/// A scroll-driven attachment
///
/// `tick`, `reset` and `destroy` are optional capabilities with no-op
/// defaults, mirroring plugins that only care about a subset of the
/// lifecycle.
pub trait ScrollExtension {
    fn name(&self) -> &'static str;

    /// Observe a controller notification; `now` is the shared frame clock
    fn on_event(&mut self, event: &ScrollEvent, view: &ScrollViewport, now: f64);

    /// Advance internal timers; return true to request another frame
    fn tick(&mut self, now: f64) -> bool {
        let _ = now;
        false
    }

    /// Re-sync visual state after a `repaint()`
    fn reset(&mut self, view: &ScrollViewport) {
        let _ = view;
    }

    /// Release resources before the controller goes away
    fn destroy(&mut self) {}
}

/// Factory evaluated once per controller; returns `None` to decline
pub type ExtensionFactory =
    Box<dyn Fn(&ScrollConfig, &ScrollViewport) -> Option<Box<dyn ScrollExtension>>>;

/// Named extension factories
#[derive(Default)]
pub struct ExtensionRegistry {
    factories: FxHashMap<&'static str, ExtensionFactory>,
}

impl ExtensionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a factory under `name`, replacing any previous one
    pub fn register<F>(&mut self, name: &'static str, factory: F)
    where
        F: Fn(&ScrollConfig, &ScrollViewport) -> Option<Box<dyn ScrollExtension>> + 'static,
    {
        self.factories.insert(name, Box::new(factory));
    }

    /// Instantiate every registered factory against a new controller
    pub(crate) fn instantiate(
        &self,
        config: &ScrollConfig,
        view: &ScrollViewport,
    ) -> Vec<Box<dyn ScrollExtension>> {
        let mut extensions = Vec::new();
        for (name, factory) in &self.factories {
            match factory(config, view) {
                Some(extension) => extensions.push(extension),
                None => tracing::debug!(name, "extension declined"),
            }
        }
        extensions
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}
