use tracing::instrument;

use crate::api;
use crate::error::Result;
use crate::model::{EventSummary, ProofFile};

/// Development fixed point for the registration service authority.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8081";

/// The main entry point for talking to the registration service.
///
/// `RegistrarClient` wraps a [`reqwest::Client`] and exposes the three
/// service operations: the general event catalog, the course/year
/// scoped catalog, and the multipart registration submit.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> event_registrar::Result<()> {
/// use event_registrar::RegistrarClient;
///
/// let client = RegistrarClient::new();
/// let events = client.get_student_events("BSIT", "3").await?;
/// println!("{} events open for registration", events.len());
/// # Ok(())
/// # }
/// ```
pub struct RegistrarClient {
    http: reqwest::Client,
    base_url: String,
}

impl RegistrarClient {
    /// Create a new client against the default development authority.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Create a new client against the given service authority.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Create a new client using the provided [`reqwest::Client`].
    ///
    /// Use this when you need to configure timeouts, proxies, headers, etc.
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http: client,
            base_url: base_url.into(),
        }
    }

    /// The service authority this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the full event catalog.
    #[instrument(skip(self))]
    pub async fn get_events(&self) -> Result<Vec<EventSummary>> {
        api::events::get_events(&self.http, &self.base_url).await
    }

    /// Fetch the catalog filtered to a course and year level.
    #[instrument(skip(self))]
    pub async fn get_student_events(
        &self,
        course: &str,
        yearlevel: &str,
    ) -> Result<Vec<EventSummary>> {
        api::events::get_student_events(&self.http, &self.base_url, course, yearlevel).await
    }

    /// Submit a registration bundle for an event.
    #[instrument(skip(self, proof, reason))]
    pub async fn submit_registration(
        &self,
        student_id: &str,
        event_id: &str,
        proof: &ProofFile,
        reason: &str,
    ) -> Result<()> {
        api::submit::submit_registration(
            &self.http,
            &self.base_url,
            student_id,
            event_id,
            proof,
            reason,
        )
        .await
    }
}

impl Default for RegistrarClient {
    fn default() -> Self {
        Self::new()
    }
}
