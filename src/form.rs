use std::collections::BTreeMap;
use std::str::FromStr;

use tracing::{debug, error, warn};

use crate::client::RegistrarClient;
use crate::model::{EventSummary, ProofFile, StudentIdentity, SubmissionResult};
use crate::session::{SessionFile, View};

const CONFIRM_PROMPT: &str = "Confirm Submit?";
const SUBMIT_OK_TEXT: &str = "Form submitted successfully!";
const SUBMIT_ERR_TEXT: &str = "An error occurred. Please try again.";

/// Decides whether a completed form is actually sent.
///
/// The form asks exactly once per attempt, and only when a request
/// would otherwise go out; declining aborts silently.
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> bool;
}

impl<F: FnMut(&str) -> bool> Confirm for F {
    fn confirm(&mut self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// Form input names with special handling. Anything else is stored
/// verbatim and stays inert.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, strum_macros::EnumString)]
enum FieldKind {
    #[strum(serialize = "event")]
    Event,
    #[strum(serialize = "proof")]
    Proof,
    #[strum(serialize = "studentId")]
    StudentId,
    #[strum(serialize = "reason")]
    Reason,
    #[default]
    #[strum(disabled)]
    Other,
}

/// A single user input applied to the form.
#[derive(Debug, Clone)]
pub enum FormInput {
    /// A named text field changed.
    Field { name: String, value: String },
    /// A proof image was attached.
    Proof(ProofFile),
}

impl FormInput {
    /// Convenience constructor for named text fields.
    pub fn field(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Field {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Mutable form fields, consumed at submission time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    pub student_id: String,
    pub event_id: String,
    pub reason: String,
    pub proof: Option<ProofFile>,
    /// Field names without special handling, stored verbatim.
    pub extra: BTreeMap<String, String>,
}

/// What a call to [`FormSession::submit`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Request sent, server accepted.
    Submitted,
    /// Request sent, transport or server failure.
    Failed,
    /// The confirmation prompt was declined; nothing was sent.
    Declined,
    /// A required field is missing; nothing was sent.
    Incomplete,
    /// A submission is already outstanding; nothing was sent.
    InFlight,
}

/// Result of mounting the form: a live session, or a redirect for the
/// caller's router.
pub enum Mounted {
    /// Identity present; the form is ready.
    Form(FormSession),
    /// No usable persisted identity.
    Redirect(View),
}

impl Mounted {
    /// Destination a router should show for this mount outcome.
    pub fn view(&self) -> View {
        match self {
            Mounted::Form(_) => View::EventForm,
            Mounted::Redirect(view) => *view,
        }
    }
}

/// The event-registration form session.
///
/// Owns the student identity, the scoped event catalog, and the form
/// state. All field mutation goes through [`FormSession::apply`]; the
/// selected event and its venue are derived, never set directly.
pub struct FormSession {
    client: RegistrarClient,
    store: SessionFile,
    identity: StudentIdentity,
    events: Vec<EventSummary>,
    state: FormState,
    selected: Option<EventSummary>,
    message: Option<SubmissionResult>,
    in_flight: bool,
}

impl FormSession {
    /// Session guard: load the persisted identity and bring up the form.
    ///
    /// An absent (or undecodable) identity redirects to login without
    /// touching the catalog service.
    pub async fn mount(client: RegistrarClient, store: SessionFile) -> Mounted {
        let Some(identity) = store.load() else {
            debug!("no persisted identity, redirecting to {}", View::Login);
            return Mounted::Redirect(View::Login);
        };

        let mut session = Self {
            client,
            store,
            identity,
            events: Vec::new(),
            state: FormState::default(),
            selected: None,
            message: None,
            in_flight: false,
        };
        session.load_catalog().await;
        Mounted::Form(session)
    }

    /// Load the catalog: the general list first, then the scoped list.
    ///
    /// The two fetches are sequenced so the scoped result is always
    /// the last writer; its outcome, success or empty-on-failure, is
    /// the list the student sees.
    async fn load_catalog(&mut self) {
        match self.client.get_events().await {
            Ok(events) => self.events = events,
            Err(e) => error!(error = %e, "failed to fetch event catalog"),
        }
        self.refresh().await;
    }

    /// Re-run the scoped catalog fetch for the current identity.
    ///
    /// On failure the list is reset to empty, overriding whatever the
    /// general fetch loaded. The failure is not surfaced to the user.
    pub async fn refresh(&mut self) {
        match self
            .client
            .get_student_events(&self.identity.course, &self.identity.yearlevel)
            .await
        {
            Ok(events) => self.events = events,
            Err(e) => {
                error!(error = %e, "failed to fetch student events");
                self.events = Vec::new();
            }
        }
    }

    /// `"{first_name} {last_name}"`, as shown in the form header.
    pub fn student_name(&self) -> String {
        self.identity.display_name()
    }

    pub fn identity(&self) -> &StudentIdentity {
        &self.identity
    }

    /// The catalog currently offered for selection.
    pub fn events(&self) -> &[EventSummary] {
        &self.events
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// The catalog entry backing the read-only venue display.
    pub fn selected_event(&self) -> Option<&EventSummary> {
        self.selected.as_ref()
    }

    /// Venue of the selected event; empty until one is chosen.
    pub fn venue(&self) -> &str {
        self.selected
            .as_ref()
            .map(|e| e.venue.as_str())
            .unwrap_or_default()
    }

    /// Outcome of the most recent submit attempt.
    pub fn message(&self) -> Option<&SubmissionResult> {
        self.message.as_ref()
    }

    /// Whether a submission request is currently outstanding.
    pub fn is_submitting(&self) -> bool {
        self.in_flight
    }

    /// Apply a single user input to the form state.
    pub fn apply(&mut self, input: FormInput) {
        match input {
            FormInput::Proof(file) => {
                debug!(file_name = %file.file_name, "attached proof");
                self.state.proof = Some(file);
            }
            FormInput::Field { name, value } => self.apply_field(&name, value),
        }
    }

    fn apply_field(&mut self, name: &str, value: String) {
        match FieldKind::from_str(name).unwrap_or_default() {
            FieldKind::Event => self.select_event(value),
            FieldKind::StudentId => self.state.student_id = value,
            FieldKind::Reason => self.state.reason = value,
            // Binary proof arrives via FormInput::Proof; a text field
            // that happens to be named "proof" is stored like any
            // unknown name.
            FieldKind::Proof | FieldKind::Other => {
                self.state.extra.insert(name.to_owned(), value);
            }
        }
    }

    /// Select an event by its catalog name.
    ///
    /// A name matching no catalog entry clears the selection and the
    /// event id, so the id can never dangle. The raw name is kept
    /// under the "event" key either way.
    fn select_event(&mut self, name: String) {
        let event = self
            .events
            .iter()
            .find(|e| e.event_name == name)
            .cloned();
        match &event {
            Some(event) => self.state.event_id = event.id.to_string(),
            None => {
                warn!(name = %name, "selected event not in catalog");
                self.state.event_id = String::new();
            }
        }
        self.selected = event;
        self.state.extra.insert("event".to_owned(), name);
    }

    /// Run the submission flow: in-flight guard, required fields,
    /// confirmation, multipart POST.
    ///
    /// Only the two outcomes that sent a request touch the inline
    /// message; the other three leave it exactly as it was.
    pub async fn submit(&mut self, confirm: &mut impl Confirm) -> SubmitOutcome {
        if self.in_flight {
            warn!("submit ignored, request already in flight");
            return SubmitOutcome::InFlight;
        }
        if self.selected.is_none() || self.state.reason.is_empty() {
            return SubmitOutcome::Incomplete;
        }
        let Some(proof) = self.state.proof.clone() else {
            return SubmitOutcome::Incomplete;
        };
        if !confirm.confirm(CONFIRM_PROMPT) {
            debug!("submission declined");
            return SubmitOutcome::Declined;
        }

        self.in_flight = true;
        let result = self
            .client
            .submit_registration(
                &self.state.student_id,
                &self.state.event_id,
                &proof,
                &self.state.reason,
            )
            .await;
        self.in_flight = false;

        match result {
            Ok(()) => {
                self.message = Some(SubmissionResult {
                    text: SUBMIT_OK_TEXT.to_owned(),
                    success: true,
                });
                SubmitOutcome::Submitted
            }
            Err(e) => {
                error!(error = %e, "error submitting form");
                self.message = Some(SubmissionResult {
                    text: SUBMIT_ERR_TEXT.to_owned(),
                    success: false,
                });
                SubmitOutcome::Failed
            }
        }
    }

    /// Clear the persisted identity and navigate to login.
    ///
    /// No confirmation prompt, unlike submission.
    pub fn logout(self) -> View {
        if let Err(e) = self.store.clear() {
            warn!(error = %e, "failed to clear session record");
        }
        View::Login
    }
}
