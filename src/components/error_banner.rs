//! Dismissible error banner.
//!
//! One banner serves the whole page; validation, submission and download
//! failures all land here.

use leptos::prelude::*;

#[component]
pub fn ErrorBanner(
    error: ReadSignal<Option<String>>,
    set_error: WriteSignal<Option<String>>,
) -> impl IntoView {
    view! {
        {move || {
            error
                .get()
                .map(|message| {
                    view! {
                        <div class="alert alert-danger alert-dismissible">
                            <span>{message}</span>
                            <button
                                type="button"
                                class="btn-close"
                                on:click=move |_| set_error.set(None)
                            >
                                "\u{00d7}"
                            </button>
                        </div>
                    }
                })
        }}
    }
}
