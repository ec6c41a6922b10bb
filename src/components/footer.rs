//! Footer component

use leptos::*;

use crate::config::APP_NAME;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer>
            <div class="brand">
                <span class="brand-mark">"🛡️"</span>
                <span class="brand-name">{APP_NAME}</span>
            </div>
            <div class="footer-copy">
                "© 2026 SpectreScan. Next-generation protection."
            </div>
        </footer>
    }
}
