//! Scroll configuration
//!
//! An immutable snapshot captured when a controller is constructed. It is
//! re-read only on an explicit `repaint()`, never mid-gesture.

/// Configuration for a scroll controller
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollConfig {
    /// Attach the scrollbar indicator extension
    pub scrollbar: bool,
    /// Attach the overflow-edge hint extension
    pub overflow_hint: bool,
    /// Allow vertical scrolling (still requires vertical overflow)
    pub vertical: bool,
    /// Allow horizontal scrolling (still requires horizontal overflow)
    pub horizontal: bool,
    /// Allow the offset to leave bounds during drags and momentum
    /// (rubber-band); when false the offset is hard-clamped
    pub overflow: bool,
    /// Minimum per-axis pointer travel before a contact becomes a drag
    /// (suppresses accidental scrolls and preserves taps)
    pub min_drag_distance: f32,
    /// Deceleration magnitude in px/ms² applied against the release
    /// velocity
    pub deceleration: f32,
    /// Duration of the snap-back animation in ms
    pub snap_back_duration: f64,
    /// Idle delay before the scrollbar fades out, in ms
    pub scrollbar_hide_delay: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            scrollbar: false,
            overflow_hint: false,
            vertical: true,
            horizontal: true,
            overflow: true,
            min_drag_distance: 10.0,
            // empirically tuned feel constant, kept as-is
            deceleration: 0.0006,
            snap_back_duration: 500.0,
            scrollbar_hide_delay: 800.0,
        }
    }
}

impl ScrollConfig {
    /// Config that hard-clamps at the boundaries (no rubber-band)
    pub fn no_overflow() -> Self {
        Self {
            overflow: false,
            ..Default::default()
        }
    }

    /// Config with the scrollbar indicator enabled
    pub fn with_scrollbar() -> Self {
        Self {
            scrollbar: true,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_tuned_constants() {
        let config = ScrollConfig::default();
        assert_eq!(config.min_drag_distance, 10.0);
        assert_eq!(config.deceleration, 0.0006);
        assert_eq!(config.snap_back_duration, 500.0);
        assert!(config.overflow);
        assert!(!config.scrollbar);
    }

    #[test]
    fn presets() {
        assert!(!ScrollConfig::no_overflow().overflow);
        assert!(ScrollConfig::with_scrollbar().scrollbar);
    }
}
