//! Application configuration.
//!
//! Centralized constants for the landing page. The scan timings drive the
//! mock animation; the stat and feature arrays are the page's only "data"
//! and are never computed or fetched.

use crate::types::{Feature, Stat};

/// Application name, shown in the header wordmark and page title.
pub const APP_NAME: &str = "SpectreScan";

/// Interval between mock scan progress ticks, in milliseconds.
pub const SCAN_TICK_MS: u32 = 200;

/// Progress added per tick, in percent.
pub const SCAN_STEP: u8 = 10;

/// Progress value at which the mock scan completes.
pub const SCAN_COMPLETE: u8 = 100;

/// Header navigation entries. All dead anchors; the page has no routes.
pub const NAV_LINKS: [&str; 5] = [
    "Scanning",
    "Documentation",
    "Contacts",
    "Statistics",
    "API",
];

/// The four stat cards, in display order.
pub const STATS: [Stat; 4] = [
    Stat {
        label: "Files scanned today",
        value: "1,247",
        color: "stat-primary",
    },
    Stat {
        label: "Threats detected",
        value: "23",
        color: "stat-danger",
    },
    Stat {
        label: "AI accuracy",
        value: "99.7%",
        color: "stat-secondary",
    },
    Stat {
        label: "Analysis time",
        value: "2.3s",
        color: "stat-info",
    },
];

/// The four feature cards, in display order.
pub const FEATURES: [Feature; 4] = [
    Feature {
        icon: "🛡️",
        title: "Multi-layer scanning",
        description: "70+ antivirus engines combined with AI analysis for maximum protection",
        gradient: "gradient-blue",
    },
    Feature {
        icon: "📦",
        title: "Virtual sandbox",
        description: "Suspicious files are detonated safely in an isolated environment",
        gradient: "gradient-green",
    },
    Feature {
        icon: "🧠",
        title: "AI detection",
        description: "Neural networks spot novel threats and behavioural anomalies",
        gradient: "gradient-purple",
    },
    Feature {
        icon: "⚡",
        title: "Instant analysis",
        description: "Scan results in seconds, with detailed reports",
        gradient: "gradient-orange",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_timings_line_up() {
        // A full scan is exactly 10 ticks of 200 ms: 2 seconds end to end.
        assert_eq!(SCAN_COMPLETE % SCAN_STEP, 0);
        let ticks = u32::from(SCAN_COMPLETE / SCAN_STEP);
        assert_eq!(ticks, 10);
        assert_eq!(ticks * SCAN_TICK_MS, 2000);
    }

    #[test]
    fn test_static_cards_are_complete() {
        assert_eq!(STATS.len(), 4);
        for stat in &STATS {
            assert!(!stat.label.is_empty());
            assert!(!stat.value.is_empty());
            assert!(!stat.color.is_empty());
        }

        assert_eq!(FEATURES.len(), 4);
        for feature in &FEATURES {
            assert!(!feature.icon.is_empty());
            assert!(!feature.title.is_empty());
            assert!(!feature.description.is_empty());
            assert!(!feature.gradient.is_empty());
        }
    }

    #[test]
    fn test_stat_order_is_fixed() {
        let labels: Vec<&str> = STATS.iter().map(|s| s.label).collect();
        assert_eq!(
            labels,
            [
                "Files scanned today",
                "Threats detected",
                "AI accuracy",
                "Analysis time",
            ]
        );
    }
}
