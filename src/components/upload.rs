//! Drop zone component with drag & drop support.
//!
//! The zone accepts any dropped payload but never reads it: the file list
//! is only length-checked to decide whether to play the mock scan. The
//! scan button triggers the same animation without any file at all.

use leptos::*;
use web_sys::DragEvent;

use crate::services::ScanScheduler;

/// Number of files carried by a drop event.
///
/// Browsers hand back `None` for non-file drags (e.g. dragged text), which
/// counts as zero.
fn dropped_file_count(ev: &DragEvent) -> u32 {
    ev.data_transfer()
        .and_then(|transfer| transfer.files())
        .map(|files| files.length())
        .unwrap_or(0)
}

/// Whether a dropped payload should trigger the mock scan.
///
/// Any non-empty file list qualifies; type, size, and content are ignored.
fn should_start_scan(file_count: u32) -> bool {
    file_count > 0
}

#[component]
pub fn UploadZone(scanner: ScanScheduler) -> impl IntoView {
    let (is_drag_over, set_is_drag_over) = create_signal(false);

    // prevent_default on all three keeps the browser from navigating to
    // the dropped file.
    let on_drag_over = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_drag_over.set(true);
    };

    let on_drag_leave = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_drag_over.set(false);
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_drag_over.set(false);

        let file_count = dropped_file_count(&ev);
        if should_start_scan(file_count) {
            log::info!("📥 {file_count} file(s) dropped");
            scanner.start();
        }
    };

    view! {
        <div
            class="upload-zone"
            class=("drag-over", move || is_drag_over.get())
            on:dragover=on_drag_over
            on:dragleave=on_drag_leave
            on:drop=on_drop
        >
            <div class="upload-icon">"📤"</div>
            <h3>"Upload a file for scanning"</h3>
            <p class="upload-hint">
                "Files up to 100 MB: EXE, DLL, PDF, DOC, ZIP and more"
            </p>
            <button class="scan-button" on:click=move |_| scanner.start()>
                "🔍 Choose a file"
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_drop_does_not_start_scan() {
        // Dragged text or an empty file list leaves the page idle.
        assert!(!should_start_scan(0));
    }

    #[test]
    fn test_any_nonempty_drop_starts_scan() {
        assert!(should_start_scan(1));
        assert!(should_start_scan(42));
    }
}
