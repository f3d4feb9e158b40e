//! Vocabulary shared by the endpoint abstractions.
//!
//! Endpoints either answer with a status and payload or signal a transport
//! failure through [`NetworkError`]. The use cases translate both into a
//! plain status; none of these types escape past them.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Transport-level failure raised by an endpoint instead of a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("network error while calling the endpoint")]
pub struct NetworkError;

/// Status carried by a reply from the user endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EndpointStatus {
    Success,
    AuthError,
    ServerError,
    GeneralError,
}

impl EndpointStatus {
    pub fn is_success(self) -> bool {
        matches!(self, EndpointStatus::Success)
    }
}

/// Status carried by the reputation endpoint, which reports network
/// trouble in-band rather than through [`NetworkError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReputationStatus {
    Success,
    GeneralError,
    NetworkError,
}

/// Why a contacts or question details fetch failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailReason {
    #[error("endpoint rejected the credentials")]
    AuthError,
    #[error("endpoint reported a general error")]
    GeneralError,
    #[error("network error while calling the endpoint")]
    NetworkError,
}
