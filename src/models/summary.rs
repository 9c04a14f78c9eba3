//! Wire models for the summary endpoints.
//! Aggregate fields are displayed verbatim, never recomputed client-side.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One equipment reading as it appears in the uploaded CSV.
/// Field names mirror the CSV headers the backend standardizes on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EquipmentRow {
    #[serde(rename = "Equipment Name")]
    pub name: String,

    #[serde(rename = "Type")]
    pub equipment_type: String,

    #[serde(rename = "Flowrate")]
    pub flowrate: f64,

    #[serde(rename = "Pressure")]
    pub pressure: f64,

    #[serde(rename = "Temperature")]
    pub temperature: f64,
}

/// Backend-computed summary for one uploaded CSV.
///
/// `raw_data` is only present in the direct upload response (capped at 100
/// rows by the backend); history and summary projections omit it, so it
/// defaults to empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadSummary {
    pub id: i64,
    pub filename: String,
    pub uploaded_at: DateTime<Utc>,
    pub total_equipment_count: i64,
    pub avg_flowrate: f64,
    pub avg_pressure: f64,
    pub avg_temperature: f64,
    pub equipment_type_distribution: BTreeMap<String, i64>,
    #[serde(default)]
    pub raw_data: Vec<EquipmentRow>,
}
