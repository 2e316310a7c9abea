//! Page header component.

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"AI Resume Checker"</h1>
            <p class="text-muted">"Upload your resume and see how it matches your target domain"</p>
        </header>
    }
}
