//! Serde types for the napchart service JSON schema.
//!
//! These mirror the exact field names the service uses on the wire; the
//! in-memory [`Chart`](crate::model::Chart) converts to and from
//! [`ChartDocument`] rather than deriving serde itself.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::model::ChartShape;

/// The full chart document, as posted to `createSnapshot` and returned
/// inside the `getChart` envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartDocument {
    pub title: String,
    pub description: String,
    #[serde(rename = "chartData")]
    pub chart_data: ChartData,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartData {
    pub lanes: u32,
    pub shape: ChartShape,
    pub elements: Vec<WireElement>,
    #[serde(rename = "colorTags")]
    pub color_tags: Vec<ColorTagEntry>,
    #[serde(rename = "lanesConfig")]
    pub lanes_config: IndexMap<String, LaneConfig>,
}

/// One chart element as the service stores it. `lane` is zero-based here,
/// unlike the one-based numbering the model API presents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireElement {
    pub color: String,
    pub start: i32,
    pub end: i32,
    pub lane: i32,
    #[serde(default)]
    pub text: String,
}

/// A palette color with a non-empty user tag. Untagged colors are omitted
/// from the document entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorTagEntry {
    pub color: String,
    pub tag: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaneConfig {
    pub locked: bool,
}

/// Success body of `POST createSnapshot`.
#[derive(Debug, Clone, Deserialize)]
pub struct SnapshotResponse {
    #[serde(rename = "publicLink")]
    pub public_link: String,
}

/// Success body of `GET getChart/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct GetChartResponse {
    #[serde(rename = "chartDocument")]
    pub chart_document: ChartDocument,
}
