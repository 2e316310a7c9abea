//! Root application component and page state.

use leptos::prelude::*;

use crate::chart::ChartCapability;
use crate::components::{
    error_banner::ErrorBanner, header::Header, results::ResultsPanel, upload_form::UploadForm,
};
use crate::types::{AnalysisResponse, SubmitPhase};

/// Capabilities resolved once at startup and shared through context
/// instead of re-probed at call sites.
#[derive(Clone, Copy)]
pub struct AppContext {
    pub chart: Option<ChartCapability>,
}

#[component]
pub fn App() -> impl IntoView {
    provide_context(AppContext {
        chart: ChartCapability::detect(),
    });

    let (phase, set_phase) = signal(SubmitPhase::Idle);
    let (error, set_error) = signal(None::<String>);
    let (response, set_response) = signal(None::<AnalysisResponse>);

    view! {
        <div class="container">
            <Header />

            <ErrorBanner error=error set_error=set_error />

            <UploadForm
                phase=phase
                set_phase=set_phase
                set_error=set_error
                set_response=set_response
            />

            {move || {
                response
                    .get()
                    .map(|data| view! { <ResultsPanel data=data set_error=set_error /> })
            }}
        </div>
    }
}
