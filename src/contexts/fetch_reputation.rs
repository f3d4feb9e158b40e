use serde::Serialize;

use crate::contexts::UseCaseStatus;
use crate::data::ReputationStatus;

/// Reply of the reputation endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReputationReply {
    pub status: ReputationStatus,
    pub reputation: i32,
}

/// Trait for reading the current user's reputation
pub trait ReputationEndpoint {
    fn get_reputation_sync(&self) -> ReputationReply;
}

impl<E: ReputationEndpoint + ?Sized> ReputationEndpoint for &E {
    fn get_reputation_sync(&self) -> ReputationReply {
        (**self).get_reputation_sync()
    }
}

/// Status and reputation reported to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReputationResult {
    pub status: UseCaseStatus,
    pub reputation: i32,
}

pub struct FetchReputationUseCase<E: ReputationEndpoint> {
    endpoint: E,
}

impl<E: ReputationEndpoint> FetchReputationUseCase<E> {
    pub fn new(endpoint: E) -> Self {
        Self { endpoint }
    }

    /// Any non-success status, network trouble included, is reported as
    /// [`UseCaseStatus::Failure`] together with whatever reputation the
    /// endpoint sent along.
    pub fn fetch_reputation(&self) -> ReputationResult {
        tracing::info!("[FetchReputationUseCase] fetch_reputation");

        let reply = self.endpoint.get_reputation_sync();
        let status = match reply.status {
            ReputationStatus::Success => UseCaseStatus::Success,
            ReputationStatus::GeneralError | ReputationStatus::NetworkError => {
                tracing::warn!(
                    "[FetchReputationUseCase] fetch_reputation, status={:?}",
                    reply.status
                );
                UseCaseStatus::Failure
            }
        };

        ReputationResult {
            status,
            reputation: reply.reputation,
        }
    }
}
