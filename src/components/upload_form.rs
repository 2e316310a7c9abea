//! Upload form: file validation, drag-and-drop, domain select, submission.

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{DragEvent, FormData, HtmlFormElement, HtmlInputElement, SubmitEvent};

use crate::analytics;
use crate::api;
use crate::components::progress_bar::ProgressBar;
use crate::types::{AnalysisResponse, SubmitPhase, UploadedFile};

const FILE_INPUT_ID: &str = "resume-file";

fn file_input() -> Option<HtmlInputElement> {
    web_sys::window()?
        .document()?
        .get_element_by_id(FILE_INPUT_ID)?
        .dyn_into()
        .ok()
}

#[component]
pub fn UploadForm(
    phase: ReadSignal<SubmitPhase>,
    set_phase: WriteSignal<SubmitPhase>,
    set_error: WriteSignal<Option<String>>,
    set_response: WriteSignal<Option<AnalysisResponse>>,
) -> impl IntoView {
    let (domains, set_domains) = signal(Vec::<String>::new());
    let (selected_file, set_selected_file) = signal(None::<UploadedFile>);
    let (is_dragover, set_is_dragover) = signal(false);

    // Domain list population. A failure leaves the select unpopulated;
    // the rest of the form still works.
    spawn_local(async move {
        match api::fetch_domains().await {
            Ok(list) => set_domains.set(list),
            Err(err) => {
                web_sys::console::error_2(&"Failed to load domains:".into(), &err);
            }
        }
    });

    // Shared by the change handler and the drop path so both produce the
    // same validation outcome.
    let validate_selection = move || {
        let Some(input) = file_input() else {
            return;
        };
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };

        match UploadedFile::validate(&file.name(), file.size() as u64, &file.type_()) {
            Ok(selected) => {
                set_error.set(None);
                set_selected_file.set(Some(selected));
            }
            Err(err) => {
                // Abort the selection so a later submit cannot pick it up.
                input.set_value("");
                set_selected_file.set(None);
                set_error.set(Some(err.message().to_string()));
            }
        }
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        set_is_dragover.set(false);

        if let Some(files) = ev.data_transfer().and_then(|dt| dt.files()) {
            if files.length() > 0 {
                if let Some(input) = file_input() {
                    input.set_files(Some(&files));
                }
                validate_selection();
            }
        }
    };

    let on_dragenter = move |ev: DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        set_is_dragover.set(true);
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        set_is_dragover.set(true);
    };

    let on_dragleave = move |ev: DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        set_is_dragover.set(false);
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        // The button is disabled while submitting; this guards the
        // programmatic path too.
        if phase.get() == SubmitPhase::Submitting {
            return;
        }

        let Some(form) = ev
            .target()
            .and_then(|target| target.dyn_into::<HtmlFormElement>().ok())
        else {
            return;
        };
        let Ok(form_data) = FormData::new_with_form(&form) else {
            set_error.set(Some(api::GENERIC_ANALYZE_ERROR.to_string()));
            return;
        };
        let domain = form_data.get("domain").as_string().unwrap_or_default();

        set_error.set(None);
        set_response.set(None);
        set_phase.set(SubmitPhase::Submitting);

        spawn_local(async move {
            match api::analyze(&form_data).await {
                Ok(data) => {
                    analytics::track_event("analysis_completed", &domain);
                    set_response.set(Some(data));
                }
                Err(message) => set_error.set(Some(message)),
            }
            // Settles on every outcome so the form unlocks.
            set_phase.set(SubmitPhase::Settled);
        });
    };

    view! {
        <form class="upload-form" on:submit=on_submit>
            <div class="form-group">
                <label for="candidate-name">"Your Name"</label>
                <input
                    type="text"
                    id="candidate-name"
                    name="name"
                    required
                    placeholder="Full name..."
                />
            </div>

            <div class="form-group">
                <label for="domain">"Target Domain"</label>
                <select id="domain" name="domain" required>
                    <option value="">"Select Target Domain"</option>
                    <For
                        each=move || domains.get()
                        key=|domain| domain.clone()
                        children=move |domain| {
                            let value = domain.clone();
                            view! { <option value=value>{domain}</option> }
                        }
                    />
                </select>
            </div>

            <div
                class=move || {
                    if is_dragover.get() {
                        "drop-zone drag-over"
                    } else {
                        "drop-zone"
                    }
                }
                on:drop=on_drop
                on:dragenter=on_dragenter
                on:dragover=on_dragover
                on:dragleave=on_dragleave
            >
                <div class="upload-icon">"\u{1f4c4}"</div>
                <p>"Drag & drop your resume or use the file picker"</p>
                <p class="text-muted">"PDF, DOCX or TXT, up to 16 MB"</p>
                <input
                    type="file"
                    id=FILE_INPUT_ID
                    name="resume"
                    accept=".pdf,.docx,.txt"
                    on:change=move |_| validate_selection()
                />
            </div>

            {move || {
                selected_file
                    .get()
                    .map(|file| view! { <div class="alert alert-info">{file.info_line()}</div> })
            }}

            <button
                type="submit"
                class="btn btn-primary"
                disabled=move || phase.get().is_submitting()
            >
                {move || {
                    if phase.get().is_submitting() {
                        "Analyzing..."
                    } else {
                        "Analyze Resume"
                    }
                }}
            </button>

            <Show when=move || phase.get().is_submitting()>
                <ProgressBar />
            </Show>
        </form>
    }
}
