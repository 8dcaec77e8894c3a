//! Shared test infrastructure: an in-process stand-in for the
//! registration service plus session-file fixtures.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use tempfile::TempDir;

use event_registrar::model::{EventSummary, StudentIdentity};
use event_registrar::SessionFile;

/// What the stub captured from a submission POST.
pub struct SubmitCapture {
    pub content_type: String,
    pub body: Vec<u8>,
}

/// Mutable behavior and recordings of the stub service.
pub struct StubState {
    pub general: Vec<EventSummary>,
    pub scoped: Vec<EventSummary>,
    pub general_status: StatusCode,
    pub scoped_status: StatusCode,
    pub submit_status: Mutex<StatusCode>,
    pub general_hits: AtomicUsize,
    pub scoped_hits: AtomicUsize,
    pub submit_hits: AtomicUsize,
    pub last_scoped_query: Mutex<Option<(String, String)>>,
    pub last_submit: Mutex<Option<SubmitCapture>>,
}

impl Default for StubState {
    fn default() -> Self {
        Self {
            general: Vec::new(),
            scoped: Vec::new(),
            general_status: StatusCode::OK,
            scoped_status: StatusCode::OK,
            submit_status: Mutex::new(StatusCode::OK),
            general_hits: AtomicUsize::new(0),
            scoped_hits: AtomicUsize::new(0),
            submit_hits: AtomicUsize::new(0),
            last_scoped_query: Mutex::new(None),
            last_submit: Mutex::new(None),
        }
    }
}

/// An in-process registration service bound to an ephemeral port.
pub struct StubService {
    pub base_url: String,
    pub state: Arc<StubState>,
}

impl StubService {
    pub async fn spawn(state: StubState) -> Self {
        let state = Arc::new(state);
        let app = Router::new()
            .route("/events", get(list_events))
            .route("/events/student-specific", get(list_student_events))
            .route("/events/submit", post(submit))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind stub listener");
        let addr = listener.local_addr().expect("stub local addr");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("serve stub");
        });

        Self {
            base_url: format!("http://{addr}"),
            state,
        }
    }

    pub fn general_hits(&self) -> usize {
        self.state.general_hits.load(Ordering::SeqCst)
    }

    pub fn scoped_hits(&self) -> usize {
        self.state.scoped_hits.load(Ordering::SeqCst)
    }

    pub fn submit_hits(&self) -> usize {
        self.state.submit_hits.load(Ordering::SeqCst)
    }

    pub fn set_submit_status(&self, status: StatusCode) {
        *self.state.submit_status.lock().unwrap() = status;
    }
}

#[derive(Deserialize)]
struct ScopeParams {
    course: String,
    yearlevel: String,
}

async fn list_events(
    State(state): State<Arc<StubState>>,
) -> (StatusCode, Json<Vec<EventSummary>>) {
    state.general_hits.fetch_add(1, Ordering::SeqCst);
    (state.general_status, Json(state.general.clone()))
}

async fn list_student_events(
    State(state): State<Arc<StubState>>,
    Query(params): Query<ScopeParams>,
) -> (StatusCode, Json<Vec<EventSummary>>) {
    state.scoped_hits.fetch_add(1, Ordering::SeqCst);
    *state.last_scoped_query.lock().unwrap() = Some((params.course, params.yearlevel));
    (state.scoped_status, Json(state.scoped.clone()))
}

async fn submit(
    State(state): State<Arc<StubState>>,
    headers: HeaderMap,
    body: Bytes,
) -> StatusCode {
    state.submit_hits.fetch_add(1, Ordering::SeqCst);
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    *state.last_submit.lock().unwrap() = Some(SubmitCapture {
        content_type,
        body: body.to_vec(),
    });
    *state.submit_status.lock().unwrap()
}

pub fn event(id: u32, name: &str, venue: &str) -> EventSummary {
    EventSummary {
        id,
        event_name: name.to_string(),
        venue: venue.to_string(),
        description: None,
        date: None,
    }
}

pub fn ana_cruz() -> StudentIdentity {
    StudentIdentity {
        first_name: "Ana".to_string(),
        last_name: "Cruz".to_string(),
        course: "BSIT".to_string(),
        yearlevel: "3".to_string(),
    }
}

/// A session file in a fresh temp dir, with the identity already
/// persisted. The `TempDir` must be kept alive by the caller.
pub fn logged_in_session(identity: &StudentIdentity) -> (TempDir, SessionFile) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let store = SessionFile::new(dir.path().join("student.json"));
    store.save(identity).expect("persist identity");
    (dir, store)
}

/// A session file path with no persisted identity.
pub fn logged_out_session() -> (TempDir, SessionFile) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let store = SessionFile::new(dir.path().join("student.json"));
    (dir, store)
}

/// Whether `needle` occurs anywhere in `haystack`.
pub fn body_contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|w| w == needle)
}
