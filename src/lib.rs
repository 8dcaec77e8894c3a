pub use client::{RegistrarClient, DEFAULT_BASE_URL};
pub use error::{RegistrarError, Result};
pub use form::{Confirm, FormInput, FormSession, FormState, Mounted, SubmitOutcome};
pub use session::{SessionFile, View};

pub mod client;
pub mod error;
pub mod form;
pub mod model;
pub mod session;
pub(crate) mod api;
