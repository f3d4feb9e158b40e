use serde::Serialize;

use crate::data::{EndpointStatus, FailReason, NetworkError};

/// Outcome of a single use case invocation.
///
/// Every endpoint status and transport failure collapses into one of these
/// three values at the use case boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UseCaseStatus {
    Success,
    Failure,
    NetworkError,
}

impl UseCaseStatus {
    pub fn is_success(self) -> bool {
        matches!(self, UseCaseStatus::Success)
    }
}

impl From<EndpointStatus> for UseCaseStatus {
    fn from(status: EndpointStatus) -> Self {
        match status {
            EndpointStatus::Success => UseCaseStatus::Success,
            EndpointStatus::AuthError | EndpointStatus::ServerError | EndpointStatus::GeneralError => {
                UseCaseStatus::Failure
            }
        }
    }
}

impl From<NetworkError> for UseCaseStatus {
    fn from(_: NetworkError) -> Self {
        UseCaseStatus::NetworkError
    }
}

impl From<FailReason> for UseCaseStatus {
    fn from(reason: FailReason) -> Self {
        match reason {
            FailReason::AuthError | FailReason::GeneralError => UseCaseStatus::Failure,
            FailReason::NetworkError => UseCaseStatus::NetworkError,
        }
    }
}
