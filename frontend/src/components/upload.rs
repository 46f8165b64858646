//! Quiz file upload component with drag & drop support.
//!
//! Handles file selection, upload to the backend, and hands the parsed
//! questions to the parent through `on_file_processed`.

use leptos::*;
use web_sys::{DragEvent, Event, File, HtmlInputElement};

use crate::config::accept_attribute;
use crate::services::{HttpUploader, Uploader};
use crate::state::UploadForm;
use crate::types::Questions;

#[component]
pub fn UploadSection(
    /// Called once per successful upload with the backend's questions
    #[prop(into)]
    on_file_processed: Callback<Questions>,
) -> impl IntoView {
    let form = create_rw_signal(UploadForm::<File>::new());
    let uploader = HttpUploader::default();

    // Picker
    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            log::info!("📄 Selected file: {}", file.name());
            form.update(|f| f.select(file));
        }
    };

    // Drop zone
    let on_drag_over = move |ev: DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        form.update(|f| f.drag_enter());
    };

    let on_drag_leave = move |ev: DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        form.update(|f| f.drag_leave());
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        let file = ev
            .data_transfer()
            .and_then(|dt| dt.files())
            .and_then(|files| files.get(0));
        if let Some(file) = &file {
            log::info!("📄 Dropped file: {}", file.name());
        }
        form.update(|f| f.drop_file(file));
    };

    // Submit
    let on_submit = move |_| {
        let file = match form.try_update(|f| f.begin_upload()) {
            Some(Ok(file)) => file,
            Some(Err(e)) => {
                log::warn!("⚠️ Upload not started: {}", e);
                return;
            }
            None => return,
        };

        let uploader = uploader.clone();
        spawn_local(async move {
            log::info!("📤 Uploading {} to {}", file.name(), uploader.url());
            let outcome = uploader.upload(&file).await;
            match &outcome {
                Ok(_) => log::info!("✅ Upload successful"),
                Err(e) => log::warn!("❌ Upload failed: {}", e),
            }

            if let Some(Some(questions)) = form.try_update(|f| f.finish(outcome)) {
                on_file_processed.call(questions);
            }
        });
    };

    view! {
        <div class="upload-card fade-in">
            <h2 class="upload-title">"Upload your quiz file"</h2>
            <p class="upload-subtitle">
                "Supports .pdf, .xlsx, .docx, .txt and other formats"
            </p>

            <div
                class="upload-section"
                class:active=move || form.with(|f| f.drag_active())
                on:dragenter=on_drag_over
                on:dragover=on_drag_over
                on:dragleave=on_drag_leave
                on:drop=on_drop
            >
                <div class="upload-icon">"📤"</div>
                <p class="upload-text">"Drop the file here or"</p>

                <label class="upload-button">
                    <span>"choose a file"</span>
                    <input
                        type="file"
                        accept=accept_attribute()
                        style="display:none"
                        on:change=on_file_change
                    />
                </label>

                {move || form.with(|f| f.selected_label()).map(|label| view! {
                    <div class="selected-file">{label}</div>
                })}
            </div>

            <Show
                when=move || form.with(|f| f.error().is_some())
                fallback=|| view! { }
            >
                <div class="error-message">
                    {move || form.with(|f| f.error().map(str::to_string).unwrap_or_default())}
                </div>
            </Show>

            <div class="upload-actions">
                <button
                    class="btn btn-primary"
                    disabled=move || !form.with(|f| f.can_submit())
                    on:click=on_submit
                >
                    {move || if form.with(|f| f.is_uploading()) {
                        view! { <span class="spinner"></span>"Uploading..." }.into_view()
                    } else {
                        "Continue".into_view()
                    }}
                </button>
            </div>

            <FormatHint/>
        </div>
    }
}

/// Static description of the layout the backend expects.
#[component]
fn FormatHint() -> impl IntoView {
    view! {
        <div class="format-hint">
            <h3>"File format:"</h3>
            <p>"Questions should be written one per line in the following format:"</p>
            <code class="format-example">
                "question | option 1 | option 2 | option 3 | option 4 | correct answer"
            </code>
        </div>
    }
}
