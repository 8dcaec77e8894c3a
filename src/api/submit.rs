use reqwest::multipart::{Form, Part};
use tracing::{debug, instrument};

use crate::error::{RegistrarError, Result};
use crate::model::ProofFile;

/// POST a registration bundle as multipart form data.
///
/// Field order matches what the service expects: studentId, eventId,
/// proof, reason. Any 2xx status counts as accepted; no response body
/// is read.
#[instrument(skip(client, base_url, proof, reason))]
pub(crate) async fn submit_registration(
    client: &reqwest::Client,
    base_url: &str,
    student_id: &str,
    event_id: &str,
    proof: &ProofFile,
    reason: &str,
) -> Result<()> {
    let url = format!("{base_url}/events/submit");

    let part = Part::bytes(proof.bytes.clone())
        .file_name(proof.file_name.clone())
        .mime_str(&proof.content_type)
        .map_err(|e| RegistrarError::Http {
            url: url.clone(),
            source: e,
        })?;

    let form = Form::new()
        .text("studentId", student_id.to_owned())
        .text("eventId", event_id.to_owned())
        .part("proof", part)
        .text("reason", reason.to_owned());

    debug!(%url, proof_bytes = proof.bytes.len(), "submitting registration");

    let response = client
        .post(&url)
        .multipart(form)
        .send()
        .await
        .map_err(|e| RegistrarError::Http {
            url: url.clone(),
            source: e,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(RegistrarError::UnexpectedStatus { url, status });
    }

    Ok(())
}
