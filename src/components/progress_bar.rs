//! Indeterminate progress indicator shown while an analysis is in flight.

use leptos::prelude::*;

#[component]
pub fn ProgressBar() -> impl IntoView {
    view! {
        <div class="progress-container">
            <div class="progress-bar">
                <div class="progress-fill indeterminate" />
            </div>
            <p class="progress-text">"Analyzing resume..."</p>
        </div>
    }
}
