//! Hero section: headline, pitch, and the upload interaction.

use leptos::*;

use crate::components::{ProgressCard, UploadZone};
use crate::services::ScanScheduler;
use crate::types::ScanState;

#[component]
pub fn Hero(scan_state: ReadSignal<ScanState>, scanner: ScanScheduler) -> impl IntoView {
    view! {
        <section class="hero">
            <h1>
                "See the " <span class="gradient-text">"hidden threat"</span>
            </h1>
            <p class="subtitle">
                "File checking powered by AI and 70+ antivirus engines."
                <br/>
                "Maximum malware detection accuracy."
            </p>

            <div class="upload-area">
                <UploadZone scanner=scanner/>

                <Show
                    when=move || scan_state.get().is_scanning()
                    fallback=|| view! { }
                >
                    <ProgressCard scan_state=scan_state/>
                </Show>
            </div>
        </section>
    }
}
