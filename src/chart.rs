//! Optional skills-distribution chart.
//!
//! Chart.js is a soft dependency loaded (or not) by the host page. The
//! capability is probed once at startup and injected through the app
//! context; when it is absent the chart container simply stays empty.

use js_sys::{Array, Function, Reflect};
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Id of the canvas the results panel renders for the chart.
pub const SKILLS_CHART_CANVAS_ID: &str = "skillsChart";

const CHART_GLOBAL: &str = "Chart";

/// Handle to the page-global `Chart` constructor, when it is loaded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartCapability;

impl ChartCapability {
    /// Probes the page for Chart.js; `None` keeps charts off for the
    /// whole session.
    pub fn detect() -> Option<Self> {
        let window = web_sys::window()?;
        let ctor = Reflect::get(&window, &JsValue::from_str(CHART_GLOBAL)).ok()?;
        ctor.is_function().then_some(Self)
    }

    /// Draws the found/missing doughnut into the canvas with the given id.
    pub fn render_skills_chart(
        &self,
        canvas_id: &str,
        found: usize,
        missing: usize,
    ) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let canvas = document
            .get_element_by_id(canvas_id)
            .ok_or_else(|| JsValue::from_str("chart canvas missing"))?;

        let ctor: Function = Reflect::get(&window, &JsValue::from_str(CHART_GLOBAL))?.dyn_into()?;
        let config = serde_wasm_bindgen::to_value(&skills_chart_config(found, missing))
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        Reflect::construct(&ctor, &Array::of2(&canvas, &config))?;
        Ok(())
    }
}

#[derive(Serialize)]
struct ChartConfig {
    #[serde(rename = "type")]
    kind: &'static str,
    data: ChartData,
    options: ChartOptions,
}

#[derive(Serialize)]
struct ChartData {
    labels: [&'static str; 2],
    datasets: [Dataset; 1],
}

#[derive(Serialize)]
struct Dataset {
    data: [usize; 2],
    #[serde(rename = "backgroundColor")]
    background_color: [&'static str; 2],
}

#[derive(Serialize)]
struct ChartOptions {
    responsive: bool,
    plugins: Plugins,
}

#[derive(Serialize)]
struct Plugins {
    title: Title,
}

#[derive(Serialize)]
struct Title {
    display: bool,
    text: &'static str,
}

fn skills_chart_config(found: usize, missing: usize) -> ChartConfig {
    ChartConfig {
        kind: "doughnut",
        data: ChartData {
            labels: ["Skills Found", "Missing Skills"],
            datasets: [Dataset {
                data: [found, missing],
                background_color: ["#28a745", "#dc3545"],
            }],
        },
        options: ChartOptions {
            responsive: true,
            plugins: Plugins {
                title: Title {
                    display: true,
                    text: "Skills Distribution",
                },
            },
        },
    }
}
