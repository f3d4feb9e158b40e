use serde::Serialize;

use crate::contexts::UseCaseStatus;
use crate::data::{EndpointStatus, EntityCache, NetworkError, User};

/// Reply of the fetch user endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchUserReply {
    pub status: EndpointStatus,
    pub user_id: String,
    pub username: String,
}

/// Trait for fetching a single user from the server
pub trait FetchUserEndpoint {
    fn fetch_user_sync(&self, user_id: &str) -> Result<FetchUserReply, NetworkError>;
}

impl<E: FetchUserEndpoint + ?Sized> FetchUserEndpoint for &E {
    fn fetch_user_sync(&self, user_id: &str) -> Result<FetchUserReply, NetworkError> {
        (**self).fetch_user_sync(user_id)
    }
}

/// Status and, on success, the user that was found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FetchUserResult {
    pub status: UseCaseStatus,
    pub user: Option<User>,
}

impl FetchUserResult {
    fn success(user: User) -> Self {
        Self {
            status: UseCaseStatus::Success,
            user: Some(user),
        }
    }

    fn without_user(status: UseCaseStatus) -> Self {
        Self { status, user: None }
    }
}

/// Cache-first user lookup: the endpoint is only called on a cache miss.
pub struct FetchUserUseCase<E, C>
where
    E: FetchUserEndpoint,
    C: EntityCache<User>,
{
    endpoint: E,
    users_cache: C,
}

impl<E, C> FetchUserUseCase<E, C>
where
    E: FetchUserEndpoint,
    C: EntityCache<User>,
{
    pub fn new(endpoint: E, users_cache: C) -> Self {
        Self {
            endpoint,
            users_cache,
        }
    }

    pub fn fetch_user_sync(&self, user_id: &str) -> FetchUserResult {
        tracing::info!("[FetchUserUseCase] fetch_user_sync, user_id={}", user_id);

        if let Some(user) = self.users_cache.get(user_id) {
            tracing::debug!("[FetchUserUseCase] fetch_user_sync, cache hit, user_id={}", user_id);
            return FetchUserResult::success(user);
        }

        let reply = match self.endpoint.fetch_user_sync(user_id) {
            Ok(reply) => reply,
            Err(e) => {
                tracing::warn!(
                    "[FetchUserUseCase] fetch_user_sync, user_id={}, error={}",
                    user_id,
                    e
                );
                return FetchUserResult::without_user(e.into());
            }
        };

        if !reply.status.is_success() {
            tracing::warn!(
                "[FetchUserUseCase] fetch_user_sync, user_id={}, status={:?}",
                user_id,
                reply.status
            );
            return FetchUserResult::without_user(reply.status.into());
        }

        let user = User::new(reply.user_id, reply.username);
        self.users_cache.put(user.clone());
        FetchUserResult::success(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::doubles::{CannedReply, FakeFetchUserEndpoint, RecordingCache};

    const USER_ID: &str = "USER_ID";
    const USER_NAME: &str = "USER_NAME";

    fn endpoint() -> FakeFetchUserEndpoint {
        FakeFetchUserEndpoint::returning(User::new(USER_ID, USER_NAME))
    }

    #[test]
    fn test_user_id_passed_to_endpoint() {
        let endpoint = endpoint();
        let cache = RecordingCache::new();

        FetchUserUseCase::new(&endpoint, &cache).fetch_user_sync(USER_ID);

        assert_eq!(endpoint.calls(), vec![USER_ID.to_string()]);
    }

    #[test]
    fn test_success_caches_and_returns_user() {
        let endpoint = endpoint();
        let cache = RecordingCache::new();

        let result = FetchUserUseCase::new(&endpoint, &cache).fetch_user_sync(USER_ID);

        assert_eq!(result.status, UseCaseStatus::Success);
        assert_eq!(result.user, Some(User::new(USER_ID, USER_NAME)));
        assert_eq!(cache.writes(), vec![User::new(USER_ID, USER_NAME)]);
    }

    #[test]
    fn test_failures_only_read_the_cache() {
        for (reply, expected) in [
            (CannedReply::AuthError, UseCaseStatus::Failure),
            (CannedReply::ServerError, UseCaseStatus::Failure),
            (CannedReply::GeneralError, UseCaseStatus::Failure),
            (CannedReply::NetworkError, UseCaseStatus::NetworkError),
        ] {
            let endpoint = endpoint();
            endpoint.set_reply(reply);
            let cache = RecordingCache::new();

            let result = FetchUserUseCase::new(&endpoint, &cache).fetch_user_sync(USER_ID);

            assert_eq!(result, FetchUserResult::without_user(expected), "{:?}", reply);
            assert_eq!(cache.reads(), vec![USER_ID.to_string()], "{:?}", reply);
            assert!(cache.writes().is_empty(), "{:?}", reply);
        }
    }

    #[test]
    fn test_cached_user_skips_endpoint() {
        let endpoint = endpoint();
        let cache = RecordingCache::new();
        cache.seed(User::new(USER_ID, "CACHED_NAME"));

        let result = FetchUserUseCase::new(&endpoint, &cache).fetch_user_sync(USER_ID);

        assert_eq!(result.user, Some(User::new(USER_ID, "CACHED_NAME")));
        assert_eq!(endpoint.call_count(), 0);
        assert!(cache.writes().is_empty());
    }
}
