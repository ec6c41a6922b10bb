//! Common types used across the landing page.
//!
//! # Categories
//!
//! - **Scan State** - lifecycle of the mock scan animation
//! - **Card Types** - static stat and feature card records

// =============================================================================
// Scan State
// =============================================================================

/// Lifecycle of the mock scan animation.
///
/// This is the page's single piece of meaningful view state. A scan is
/// either not running, or running with a progress percentage in
/// `0..=100` (multiples of [`SCAN_STEP`](crate::config::SCAN_STEP)).
///
/// There is deliberately no error or cancelled variant: the animation
/// cannot fail, and the only way it ends is by reaching 100.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScanState {
    /// No scan running; the progress card is not rendered.
    #[default]
    Idle,
    /// A mock scan is in flight.
    Scanning {
        /// Completion percentage, 0..=100.
        progress: u8,
    },
}

impl ScanState {
    /// Whether the progress card should be rendered.
    pub fn is_scanning(&self) -> bool {
        matches!(self, ScanState::Scanning { .. })
    }

    /// Current progress, or `None` when idle.
    pub fn progress(&self) -> Option<u8> {
        match self {
            ScanState::Idle => None,
            ScanState::Scanning { progress } => Some(*progress),
        }
    }
}

// =============================================================================
// Card Types
// =============================================================================

/// A single stat card (e.g. "Files scanned today: 1,247").
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stat {
    /// Caption under the number
    pub label: &'static str,
    /// The headline figure
    pub value: &'static str,
    /// CSS class selecting the accent colour
    pub color: &'static str,
}

/// A single feature card in the features grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Feature {
    /// Emoji glyph shown in the card's icon tile
    pub icon: &'static str,
    /// Card title
    pub title: &'static str,
    /// One-sentence description
    pub description: &'static str,
    /// CSS class selecting the icon tile gradient
    pub gradient: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_idle() {
        let state = ScanState::default();
        assert_eq!(state, ScanState::Idle);
        assert!(!state.is_scanning());
        assert_eq!(state.progress(), None);
    }

    #[test]
    fn test_scanning_exposes_progress() {
        let state = ScanState::Scanning { progress: 40 };
        assert!(state.is_scanning());
        assert_eq!(state.progress(), Some(40));
    }
}
