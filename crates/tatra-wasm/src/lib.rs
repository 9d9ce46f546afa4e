//! tatra-wasm: WebAssembly bindings for tatra-core
//!
//! Exposes the filter engine to the browser. Trails and criteria cross the
//! boundary as plain JS objects in the same camelCase shape the Rust types
//! serialize to.
//!
//! What it provides
//! ----------------
//! - `filter_trails(trails, criteria)`: stable filter, AND across dimensions
//! - `trail_markers(trails)`: map markers for trails with valid coordinates
//! - `paginate_trails(trails, pageSize, page)`: one page plus pager metadata
//! - `criteria_from_query(qs)` / `criteria_to_query(criteria)`: deep links
//! - `bundled_trails()`: the sample dataset compiled into the module
//! - `format_trail_stats(km, m, hours, lang)`: localized stat labels
//!
//! Quick start (browser)
//! ---------------------
//! ```javascript
//! import init, { bundled_trails, criteria_from_query, filter_trails } from 'tatra-wasm';
//!
//! async function main() {
//!   await init();
//!   const trails = bundled_trails();
//!   const criteria = criteria_from_query(window.location.search);
//!   console.log(filter_trails(trails, criteria));
//! }
//! main();
//! ```
use serde::Serialize;
use serde_wasm_bindgen::{from_value, Serializer};
use wasm_bindgen::prelude::*;

use tatra_core::format::{format_distance, format_duration, format_elevation};
use tatra_core::paginate::paginate;
use tatra_core::{filter, markers, FilterCriteria, Language, PageInfo, Trail, TrailDb};

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    match TrailDb::bundled() {
        Ok(db) => web_sys::console::log_1(
            &format!("tatra-wasm: {} bundled trails", db.trails.len()).into(),
        ),
        Err(e) => web_sys::console::error_1(&format!("tatra-wasm: {e}").into()),
    }
}

/// Plain objects (not `Map`s) and `null` for absent values.
fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    value
        .serialize(&Serializer::json_compatible())
        .map_err(Into::into)
}

fn js_error(e: impl std::fmt::Display) -> JsValue {
    JsError::new(&e.to_string()).into()
}

fn trails_from_js(trails: JsValue) -> Result<Vec<Trail>, JsValue> {
    from_value(trails).map_err(Into::into)
}

/// `undefined` and `null` mean the empty criteria.
fn criteria_from_js(criteria: JsValue) -> Result<FilterCriteria, JsValue> {
    if criteria.is_undefined() || criteria.is_null() {
        return Ok(FilterCriteria::default());
    }
    from_value(criteria).map_err(Into::into)
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageView<T> {
    pub items: Vec<T>,
    pub info: PageInfo,
}

pub fn page_view<T: Clone>(items: &[T], page_size: usize, page: usize) -> PageView<T> {
    PageView {
        items: paginate(items, page_size, page),
        info: PageInfo::new(items.len(), page_size, page),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatsView {
    pub distance: String,
    pub elevation: String,
    pub duration: String,
}

pub fn stats_view(distance_km: f64, elevation_m: f64, hours: f64, lang: Language) -> StatsView {
    StatsView {
        distance: format_distance(distance_km, lang),
        elevation: format_elevation(elevation_m, lang),
        duration: format_duration(hours, lang),
    }
}

/* --------------------------------------------------------------------------
   Engine
-------------------------------------------------------------------------- */

#[wasm_bindgen]
pub fn filter_trails(trails: JsValue, criteria: JsValue) -> Result<JsValue, JsValue> {
    let trails = trails_from_js(trails)?;
    let criteria = criteria_from_js(criteria)?;
    to_js(&filter::apply(&trails, &criteria))
}

#[wasm_bindgen]
pub fn trail_markers(trails: JsValue) -> Result<JsValue, JsValue> {
    let trails = trails_from_js(trails)?;
    to_js(&markers::project_markers(&trails))
}

#[wasm_bindgen]
pub fn paginate_trails(trails: JsValue, page_size: usize, page: usize) -> Result<JsValue, JsValue> {
    let trails = trails_from_js(trails)?;
    to_js(&page_view(&trails, page_size, page))
}

/* --------------------------------------------------------------------------
   Deep links
-------------------------------------------------------------------------- */

#[wasm_bindgen]
pub fn criteria_from_query(query: &str) -> Result<JsValue, JsValue> {
    to_js(&FilterCriteria::from_query_str(query))
}

#[wasm_bindgen]
pub fn criteria_to_query(criteria: JsValue) -> Result<String, JsValue> {
    Ok(criteria_from_js(criteria)?.to_query_string())
}

/* --------------------------------------------------------------------------
   Data & presentation
-------------------------------------------------------------------------- */

#[wasm_bindgen]
pub fn bundled_trails() -> Result<JsValue, JsValue> {
    let db = TrailDb::bundled().map_err(js_error)?;
    to_js(&db.trails)
}

#[wasm_bindgen]
pub fn format_trail_stats(
    distance_km: f64,
    elevation_m: f64,
    hours: f64,
    lang: &str,
) -> Result<JsValue, JsValue> {
    let lang: Language = lang.parse().map_err(js_error)?;
    to_js(&stats_view(distance_km, elevation_m, hours, lang))
}
