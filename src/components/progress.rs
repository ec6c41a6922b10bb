//! Mock scan progress card.
//!
//! Rendered only while a scan is in flight; the parent unmounts it the
//! moment the state returns to idle.

use leptos::*;

use crate::config::SCAN_COMPLETE;
use crate::types::ScanState;

#[component]
pub fn ProgressCard(scan_state: ReadSignal<ScanState>) -> impl IntoView {
    // Inside the card the state is always Scanning; the fallback pins the
    // final frame at 100 rather than snapping the bar back to zero.
    let progress = move || scan_state.get().progress().unwrap_or(SCAN_COMPLETE);

    view! {
        <div class="progress-card">
            <div class="progress-header">
                <span class="progress-label">"Scanning…"</span>
                <span class="progress-percent">{move || format!("{}%", progress())}</span>
            </div>
            <div class="progress-track">
                <div
                    class="progress-fill"
                    style:width=move || format!("{}%", progress())
                ></div>
            </div>
            <div class="progress-note">
                <span class="pulse-dot"></span>
                <span>"Analysing with AI and antivirus databases"</span>
            </div>
        </div>
    }
}
