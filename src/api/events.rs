use tracing::{debug, instrument};

use crate::api;
use crate::error::Result;
use crate::model::EventSummary;

/// Fetch the full event catalog.
#[instrument(skip(client, base_url))]
pub(crate) async fn get_events(
    client: &reqwest::Client,
    base_url: &str,
) -> Result<Vec<EventSummary>> {
    let url = format!("{base_url}/events");
    let events: Vec<EventSummary> = api::get_json(client, &url).await?;
    debug!(count = events.len(), "fetched event catalog");
    Ok(events)
}

/// Fetch the catalog filtered to a course and year level.
#[instrument(skip(client, base_url))]
pub(crate) async fn get_student_events(
    client: &reqwest::Client,
    base_url: &str,
    course: &str,
    yearlevel: &str,
) -> Result<Vec<EventSummary>> {
    let url = format!("{base_url}/events/student-specific?course={course}&yearlevel={yearlevel}");
    let events: Vec<EventSummary> = api::get_json(client, &url).await?;
    debug!(count = events.len(), course, yearlevel, "fetched student events");
    Ok(events)
}
