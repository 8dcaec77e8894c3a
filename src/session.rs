use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::Result;
use crate::model::StudentIdentity;

/// Navigation destinations reachable from the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum View {
    EventForm,
    Login,
}

/// File-backed store for the persisted student identity.
///
/// One JSON record per session. The login flow writes it, the form
/// reads it once at mount, logout deletes it.
#[derive(Debug, Clone)]
pub struct SessionFile {
    path: PathBuf,
}

impl SessionFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the persisted identity, if any.
    ///
    /// A record that exists but cannot be read or decoded counts as
    /// absent: the caller redirects to login exactly as it would with
    /// no record at all.
    pub fn load(&self) -> Option<StudentIdentity> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "failed to read session record");
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(identity) => Some(identity),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "discarding undecodable session record");
                None
            }
        }
    }

    /// Persist an identity. This is the login flow's side of the
    /// contract; the form itself never writes.
    pub fn save(&self, identity: &StudentIdentity) -> Result<()> {
        let raw = serde_json::to_string(identity)?;
        std::fs::write(&self.path, raw)?;
        Ok(())
    }

    /// Delete the persisted identity. A missing record is not an error.
    pub fn clear(&self) -> Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {
                debug!(path = %self.path.display(), "cleared session record");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
