use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single registrable event from the catalog service.
///
/// The catalog speaks camelCase on the wire (`eventName`). Fields
/// beyond the guaranteed `{id, eventName, venue}` triple are optional
/// so payloads from older service builds still decode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventSummary {
    pub id: u32,
    pub event_name: String,
    pub venue: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub date: Option<NaiveDate>,
}
