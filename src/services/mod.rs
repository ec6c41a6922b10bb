//! Client-side services.
//!
//! The landing page talks to no backend; its only "service" is the mock
//! scan scheduler that animates the progress bar.
//!
//! - [`scan`] - finite progress sequence + interval-driven scheduler

pub mod scan;

pub use scan::*;
