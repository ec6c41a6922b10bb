//! SpectreScan - Landing Page
//!
//! A WebAssembly landing page mockup for an AI-powered file scanning
//! service. The page is fully static apart from one interaction: dropping
//! a file (or clicking the scan button) plays a simulated scan animation.
//! Nothing is uploaded, read, or analysed.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Header (logo, nav links)                                    │
//! ├─────────────────────────────────────────────────────────────┤
//! │  LandingPage                                                 │
//! │  ├── Hero (title, description)                              │
//! │  │   ├── UploadZone (drag & drop, scan button)              │
//! │  │   └── ProgressCard (only while a mock scan runs)         │
//! │  ├── StatsSection (4 static stat cards)                     │
//! │  └── FeaturesSection (4 static feature cards)               │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - View state ([`ScanState`]) and static card records
//! - [`config`] - Hard-coded timings and page content
//! - [`components`] - UI components (Header, UploadZone, etc.)
//! - [`services`] - The mock scan scheduler

use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::*;
use wasm_bindgen::prelude::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{Feature, ScanState, Stat};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// WASM entry point - called automatically by trunk.
#[wasm_bindgen(start)]
pub fn main() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 SpectreScan - Starting Leptos App");

    // Mount the application
    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="SpectreScan — See the hidden threat"/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=LandingPage/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn LandingPage() -> impl IntoView {
    // The only dynamic state on the page: the mock scan lifecycle.
    let (scan_state, set_scan_state) = create_signal(ScanState::Idle);
    let scanner = ScanScheduler::new(set_scan_state);

    view! {
        <Header/>

        <Hero scan_state=scan_state scanner=scanner/>

        <StatsSection/>

        <FeaturesSection/>

        <Footer/>
    }
}
