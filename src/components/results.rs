//! Result renderer: builds the analysis panel from an `AnalysisResponse`.
//!
//! Everything here is a function of the payload; each submission gets a
//! fresh subtree. The only outside effect is the chart draw, which goes
//! through the injected capability.

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::actions;
use crate::app::AppContext;
use crate::chart::SKILLS_CHART_CANVAS_ID;
use crate::types::{format_score, AnalysisResult, AnalysisResponse, ScoreColor};

/// Missing skills are capped to keep the panel scannable; the heading
/// still reports the full count.
pub const MISSING_SKILLS_SHOWN: usize = 10;

/// The slice of missing skills that actually renders as badges.
pub fn visible_missing_skills(missing: &[String]) -> &[String] {
    &missing[..missing.len().min(MISSING_SKILLS_SHOWN)]
}

#[component]
pub fn ResultsPanel(
    data: AnalysisResponse,
    set_error: WriteSignal<Option<String>>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>();
    let found_count = data.results.skills_found.len();
    let missing_count = data.results.missing_skills.len();

    // Chart.js needs the canvas mounted, so draw from an effect.
    Effect::new(move |_| {
        if let Some(chart) = ctx.and_then(|ctx| ctx.chart) {
            if let Err(err) =
                chart.render_skills_chart(SKILLS_CHART_CANVAS_ID, found_count, missing_count)
            {
                web_sys::console::error_2(&"Chart rendering failed:".into(), &err);
            }
        }
    });

    let results = data.results;

    view! {
        <div class="card results-card">
            <div class="card-header">
                <h4>{format!("Analysis Results for {}", data.candidate_name)}</h4>
            </div>
            <div class="card-body">
                <ScoreCard results=results.clone() />
                <SkillsSection
                    skills_found=results.skills_found.clone()
                    missing_skills=results.missing_skills.clone()
                />
                <SectionBadges sections=results.sections_detected.clone() />

                <div class="charts-container">
                    <canvas id=SKILLS_CHART_CANVAS_ID width="400" height="200" />
                </div>

                <SupplementaryMetrics results=results.clone() />
                <FeedbackList feedback=results.feedback.clone() />
                <ActionButtons analysis_id=data.analysis_id set_error=set_error />
            </div>
        </div>
    }
}

#[component]
fn ScoreCard(results: AnalysisResult) -> impl IntoView {
    let color = ScoreColor::for_score(results.match_score).as_str();

    view! {
        <div class="score-card">
            <div class=format!("score-tile border-{}", color)>
                <h2 class=format!("text-{}", color)>
                    {format!("{}%", format_score(results.match_score))}
                </h2>
                <p>"Match Score"</p>
            </div>
            <div class="score-tile">
                <h2>{results.word_count}</h2>
                <p>"Total Words"</p>
            </div>
            <div class="score-tile">
                <h2>{format!("{}%", format_score(results.section_completeness))}</h2>
                <p>"Completeness"</p>
            </div>
            <div class="score-tile">
                <h2>{results.readability.readability_level.clone()}</h2>
                <p>"Readability"</p>
            </div>
        </div>
    }
}

#[component]
fn SkillsSection(skills_found: Vec<String>, missing_skills: Vec<String>) -> impl IntoView {
    let found_heading = format!("Skills Found ({})", skills_found.len());
    let missing_heading = format!("Missing Skills ({})", missing_skills.len());
    let shown_missing: Vec<String> = visible_missing_skills(&missing_skills).to_vec();

    view! {
        <div class="skills-section">
            <div class="skills-column">
                <h5 class="text-success">{found_heading}</h5>
                <div class="badge-list">
                    {if skills_found.is_empty() {
                        view! { <em>"No skills detected"</em> }.into_any()
                    } else {
                        skills_found
                            .iter()
                            .map(|skill| {
                                view! { <span class="badge bg-success">{skill.clone()}</span> }
                            })
                            .collect_view()
                            .into_any()
                    }}
                </div>
            </div>
            <div class="skills-column">
                <h5 class="text-danger">{missing_heading}</h5>
                <div class="badge-list">
                    {if shown_missing.is_empty() {
                        view! { <em>"All skills found"</em> }.into_any()
                    } else {
                        shown_missing
                            .iter()
                            .map(|skill| {
                                view! { <span class="badge bg-danger">{skill.clone()}</span> }
                            })
                            .collect_view()
                            .into_any()
                    }}
                </div>
            </div>
        </div>
    }
}

#[component]
fn SectionBadges(sections: serde_json::Map<String, serde_json::Value>) -> impl IntoView {
    view! {
        <div class="sections-block">
            <h5>"Resume Sections"</h5>
            <div class="badge-list">
                {sections
                    .iter()
                    .map(|(section, found)| {
                        let class = if found.as_bool().unwrap_or(false) {
                            "badge bg-success"
                        } else {
                            "badge bg-secondary"
                        };
                        view! { <span class=class>{section.clone()}</span> }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

/// Metrics only newer backends send; the block collapses when absent.
#[component]
fn SupplementaryMetrics(results: AnalysisResult) -> impl IntoView {
    let ats = results.ats_score.map(|score| {
        view! {
            <div class="score-tile">
                <h2>{format!("{}%", format_score(score))}</h2>
                <p>"ATS Score"</p>
            </div>
        }
    });

    let strength = results.resume_strength.as_ref().map(|strength| {
        view! {
            <div class="score-tile">
                <h2>{strength.level.clone()}</h2>
                <p>{format!("Resume Strength ({})", format_score(strength.score))}</p>
            </div>
        }
    });

    let salary = results.salary_estimate.as_ref().map(|estimate| {
        view! {
            <p class="salary-line">
                {format!(
                    "Estimated salary: {} {} - {} (market growth {}%)",
                    estimate.currency,
                    estimate.min_salary,
                    estimate.max_salary,
                    format_score(estimate.growth_rate),
                )}
            </p>
        }
    });

    view! { <div class="supplementary-metrics">{ats}{strength}{salary}</div> }
}

#[component]
fn FeedbackList(feedback: Vec<String>) -> impl IntoView {
    view! {
        <div class="feedback-block">
            <h5>"AI Feedback & Recommendations"</h5>
            <ul class="list-group">
                {feedback
                    .iter()
                    .map(|item| view! { <li class="list-group-item">{item.clone()}</li> })
                    .collect_view()}
            </ul>
        </div>
    }
}

#[component]
fn ActionButtons(
    analysis_id: String,
    set_error: WriteSignal<Option<String>>,
) -> impl IntoView {
    let download_id = analysis_id.clone();
    let share_id = analysis_id.clone();
    let save_id = analysis_id;

    let on_download = move |_| {
        let analysis_id = download_id.clone();
        spawn_local(async move {
            if let Err(message) = actions::download_report(&analysis_id).await {
                set_error.set(Some(message));
            }
        });
    };

    let on_share = move |_| {
        let analysis_id = share_id.clone();
        spawn_local(async move {
            if let Err(message) = actions::share_results(&analysis_id).await {
                set_error.set(Some(message));
            }
        });
    };

    let on_save = move |_| {
        if let Err(message) = actions::save_analysis(&save_id) {
            set_error.set(Some(message));
        }
    };

    view! {
        <div class="action-buttons">
            <button class="btn btn-success" on:click=on_download>
                "Download PDF Report"
            </button>
            <button class="btn btn-info" on:click=on_share>
                "Share Results"
            </button>
            <button class="btn btn-secondary" on:click=on_save>
                "Save Analysis"
            </button>
        </div>
    }
}
