use chrono::SecondsFormat;
use serde::Serialize;

use crate::data::units::{Unit, UnitsData};

pub const SERVICE_NAME: &str = "sft";

pub fn health_payload() -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&serde_json::json!({
        "status": "ok",
        "service": SERVICE_NAME,
        "version": env!("CARGO_PKG_VERSION")
    }))
}

#[derive(Debug, Serialize)]
struct UnitsResponse<'a> {
    units: &'a [Unit],
    count: usize,
    skipped: usize,
    loaded_at: String,
}

pub fn units_payload(data: &UnitsData) -> Result<String, serde_json::Error> {
    serde_json::to_string(&UnitsResponse {
        units: &data.units,
        count: data.units.len(),
        skipped: data.skipped,
        loaded_at: data.loaded_at.to_rfc3339_opts(SecondsFormat::Secs, true),
    })
}

pub fn error_payload(message: &str) -> String {
    serde_json::json!({ "status": "error", "message": message }).to_string()
}
