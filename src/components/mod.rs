//! UI Components for the SpectreScan landing page.
//!
//! This module contains all Leptos components organized by function:
//!
//! # Layout Components
//! - [`Header`] - Navigation bar with logo and links
//! - [`Hero`] - Main title, description, and the upload interaction
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`UploadZone`] - Drag & drop target and scan button
//! - [`ProgressCard`] - Mock scan progress indicator
//! - [`StatsSection`] - Static stat cards
//! - [`FeaturesSection`] - Static feature cards

mod header;
mod hero;
mod upload;
mod progress;
mod stats;
mod features;
mod footer;

pub use header::*;
pub use hero::*;
pub use upload::*;
pub use progress::*;
pub use stats::*;
pub use features::*;
pub use footer::*;
