//! Event listing and detail types
//!
//! Events describe state changes on charges (created, confirmed, failed).
//! `GET /events` returns a page of events plus pagination cursors;
//! `GET /events/{id}` returns a single event. The cursors are surfaced to the
//! caller as-is; this client never follows them automatically.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

use super::charge::{Pricing, Redirects, Timeline, Web3Data};

/// Success envelope for `GET /events`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EventResponse {
    /// Cursor information for fetching further pages
    pub pagination: Pagination,
    /// Events in this page, newest first
    pub data: Vec<EventData>,
}

/// Success envelope for `GET /events/{id}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventDetailResponse {
    /// The requested event
    pub data: EventData,
}

/// Pagination cursors returned alongside event listings
///
/// `starting_after` / `ending_before` are opaque cursors the caller passes to
/// subsequent requests to page through results.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Pagination {
    /// Sort order of the page, "asc" or "desc"
    pub order: String,
    pub starting_after: Option<String>,
    pub ending_before: Option<String>,
    pub total: i32,
    pub limit: i32,
    /// Number of items actually returned in this page
    pub yielded: i32,
    pub previous_uri: String,
    pub next_uri: String,
    pub cursor_range: Vec<String>,
}

/// A single event record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventData {
    pub api_version: String,
    pub created_at: DateTime<Utc>,
    /// The charge snapshot the event describes
    pub data: DetailedData,
    pub id: String,
    /// Always "event"
    pub resource: String,
    /// e.g. "charge:created", "charge:confirmed"
    pub r#type: String,
}

/// Charge snapshot embedded in an event
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DetailedData {
    pub id: String,
    pub code: String,
    pub pricing: Pricing,
    pub metadata: Option<HashMap<String, Value>>,
    pub timeline: Vec<Timeline>,
    pub redirects: Redirects,
    pub web3_data: Web3Data,
    pub created_at: Option<DateTime<Utc>>,
    pub expires_at: Option<DateTime<Utc>>,
    pub hosted_url: String,
    pub brand_color: String,
    pub charge_kind: String,
    pub pricing_type: String,
    pub support_email: String,
    pub brand_logo_url: String,
    #[serde(rename = "organization_name")]
    pub org_name: String,
}
