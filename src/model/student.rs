use serde::{Deserialize, Serialize};

/// The minimal persisted record identifying the logged-in student.
///
/// Written by the login flow, read once when the form mounts, deleted
/// at logout. Never mutated in between.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentIdentity {
    pub first_name: String,
    pub last_name: String,
    pub course: String,
    pub yearlevel: String,
}

impl StudentIdentity {
    /// Display name shown in the form header.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
