pub(crate) mod events;
pub(crate) mod submit;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{RegistrarError, Result};

/// Fetch a URL and decode the JSON response body.
pub(crate) async fn get_json<T: DeserializeOwned>(client: &reqwest::Client, url: &str) -> Result<T> {
    debug!(url, "fetching");

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| RegistrarError::Http {
            url: url.to_owned(),
            source: e,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(RegistrarError::UnexpectedStatus {
            url: url.to_owned(),
            status,
        });
    }

    let body = response
        .text()
        .await
        .map_err(|e| RegistrarError::ResponseBody {
            url: url.to_owned(),
            source: e,
        })?;

    serde_json::from_str(&body).map_err(|e| RegistrarError::Json {
        url: url.to_owned(),
        source: e,
    })
}
