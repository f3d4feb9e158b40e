use crate::contexts::UseCaseStatus;
use crate::data::{EndpointStatus, EntityCache, NetworkError, UserProfile};

/// Reply of the user profile endpoint. Payload fields are empty unless
/// `status` is [`EndpointStatus::Success`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfileReply {
    pub status: EndpointStatus,
    pub user_id: String,
    pub full_name: String,
    pub image_url: String,
}

/// Trait for fetching a user's profile from the server
pub trait UserProfileEndpoint {
    fn get_user_profile(&self, user_id: &str) -> Result<UserProfileReply, NetworkError>;
}

impl<E: UserProfileEndpoint + ?Sized> UserProfileEndpoint for &E {
    fn get_user_profile(&self, user_id: &str) -> Result<UserProfileReply, NetworkError> {
        (**self).get_user_profile(user_id)
    }
}

/// Fetches a user profile and caches it on success.
pub struct FetchUserProfileUseCase<E, C>
where
    E: UserProfileEndpoint,
    C: EntityCache<UserProfile>,
{
    endpoint: E,
    users_cache: C,
}

impl<E, C> FetchUserProfileUseCase<E, C>
where
    E: UserProfileEndpoint,
    C: EntityCache<UserProfile>,
{
    pub fn new(endpoint: E, users_cache: C) -> Self {
        Self {
            endpoint,
            users_cache,
        }
    }

    pub fn fetch_user_profile_sync(&self, user_id: &str) -> UseCaseStatus {
        tracing::info!("[FetchUserProfileUseCase] fetch_user_profile_sync, user_id={}", user_id);

        let reply = match self.endpoint.get_user_profile(user_id) {
            Ok(reply) => reply,
            Err(e) => {
                tracing::warn!(
                    "[FetchUserProfileUseCase] fetch_user_profile_sync, user_id={}, error={}",
                    user_id,
                    e
                );
                return e.into();
            }
        };

        if !reply.status.is_success() {
            tracing::warn!(
                "[FetchUserProfileUseCase] fetch_user_profile_sync, user_id={}, status={:?}",
                user_id,
                reply.status
            );
            return reply.status.into();
        }

        let profile = UserProfile::new(reply.user_id, reply.full_name, reply.image_url);
        tracing::debug!(
            "[FetchUserProfileUseCase] fetch_user_profile_sync, caching user_id={}",
            profile.user_id
        );
        self.users_cache.put(profile);

        UseCaseStatus::Success
    }
}
