//! Backend API Bindings
//!
//! Typed async wrappers over the society's PostgREST-style backend,
//! organized by domain. Every call resolves to `Result<T, String>`;
//! callers degrade failures to a toast plus a defined fallback state.

mod budget;
mod bugs;
mod content;
mod events;
mod inventory;
mod meetings;
mod tasks;
mod team;

use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

use crate::config;

// Re-export all public items
pub use budget::*;
pub use bugs::*;
pub use content::*;
pub use events::*;
pub use inventory::*;
pub use meetings::*;
pub use tasks::*;
pub use team::*;

fn js_err(e: JsValue) -> String {
    format!("{:?}", e)
}

/// Perform one HTTP call and hand back the decoded JSON body.
async fn send(method: &str, path_and_query: &str, body: Option<String>) -> Result<JsValue, String> {
    let url = format!("{}/{}", config::API_URL, path_and_query);

    let init = RequestInit::new();
    init.set_method(method);

    let headers = Headers::new().map_err(js_err)?;
    headers.append("apikey", config::API_KEY).map_err(js_err)?;
    headers.append("Content-Type", "application/json").map_err(js_err)?;
    // Writes answer with the stored row so callers get backend-assigned fields
    headers.append("Prefer", "return=representation").map_err(js_err)?;
    init.set_headers(&headers);

    if let Some(body) = body {
        init.set_body(&JsValue::from_str(&body));
    }

    let request = Request::new_with_str_and_init(&url, &init).map_err(js_err)?;
    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_err)?;
    let response: Response = response
        .dyn_into()
        .map_err(|_| "fetch did not return a Response".to_string())?;

    if !response.ok() {
        return Err(format!("{} {}: HTTP {}", method, path_and_query, response.status()));
    }
    if response.status() == 204 {
        return Ok(JsValue::NULL);
    }

    JsFuture::from(response.json().map_err(js_err)?)
        .await
        .map_err(js_err)
}

/// GET rows matching a query string (e.g. `tasks?event_id=eq.X`).
pub(crate) async fn get_list<T: DeserializeOwned>(path_and_query: &str) -> Result<Vec<T>, String> {
    let value = send("GET", path_and_query, None).await?;
    serde_wasm_bindgen::from_value(value).map_err(|e| e.to_string())
}

/// POST one row; the backend assigns id/created_at and returns the stored row.
pub(crate) async fn insert_one<T: DeserializeOwned, B: Serialize>(
    table: &str,
    row: &B,
) -> Result<T, String> {
    let body = serde_json::to_string(row).map_err(|e| e.to_string())?;
    let value = send("POST", table, Some(body)).await?;
    first_row(value)
}

/// PATCH the row with this id and return the updated row.
pub(crate) async fn update_one<T: DeserializeOwned, B: Serialize>(
    table: &str,
    id: &str,
    patch: &B,
) -> Result<T, String> {
    let body = serde_json::to_string(patch).map_err(|e| e.to_string())?;
    let query = format!("{}?id=eq.{}", table, id);
    let value = send("PATCH", &query, Some(body)).await?;
    first_row(value)
}

/// DELETE the row with this id.
pub(crate) async fn delete_row(table: &str, id: &str) -> Result<(), String> {
    let query = format!("{}?id=eq.{}", table, id);
    let _ = send("DELETE", &query, None).await?;
    Ok(())
}

// Writes come back as a one-row representation array
fn first_row<T: DeserializeOwned>(value: JsValue) -> Result<T, String> {
    let rows: Vec<T> = serde_wasm_bindgen::from_value(value).map_err(|e| e.to_string())?;
    rows.into_iter()
        .next()
        .ok_or_else(|| "empty representation in response".to_string())
}
