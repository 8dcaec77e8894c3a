use serde::Serialize;

/// An attached proof-of-attendance image, as picked by the student.
#[derive(Debug, Clone, PartialEq)]
pub struct ProofFile {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl ProofFile {
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }
}

/// Outcome of the most recent submit attempt, shown inline under the
/// form. Overwritten by the next attempt, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubmissionResult {
    pub text: String,
    pub success: bool,
}
