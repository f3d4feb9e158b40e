use crate::contexts::UseCaseStatus;
use crate::data::{
    EndpointStatus, EntityCache, Event, EventBusPoster, NetworkError, User,
    UserDetailsChangedEvent,
};

/// Reply of the update username endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateUsernameReply {
    pub status: EndpointStatus,
    pub user_id: String,
    pub username: String,
}

/// Trait for changing a user's name on the server
pub trait UpdateUsernameEndpoint {
    fn update_username(
        &self,
        user_id: &str,
        username: &str,
    ) -> Result<UpdateUsernameReply, NetworkError>;
}

impl<E: UpdateUsernameEndpoint + ?Sized> UpdateUsernameEndpoint for &E {
    fn update_username(
        &self,
        user_id: &str,
        username: &str,
    ) -> Result<UpdateUsernameReply, NetworkError> {
        (**self).update_username(user_id, username)
    }
}

/// Updates a username, caches the updated user and announces the change on
/// the event bus.
pub struct UpdateUsernameUseCase<E, C, B>
where
    E: UpdateUsernameEndpoint,
    C: EntityCache<User>,
    B: EventBusPoster,
{
    endpoint: E,
    users_cache: C,
    event_bus: B,
}

impl<E, C, B> UpdateUsernameUseCase<E, C, B>
where
    E: UpdateUsernameEndpoint,
    C: EntityCache<User>,
    B: EventBusPoster,
{
    pub fn new(endpoint: E, users_cache: C, event_bus: B) -> Self {
        Self {
            endpoint,
            users_cache,
            event_bus,
        }
    }

    /// Sends the new username to the endpoint.
    ///
    /// Only a successful reply touches the cache and the event bus; the
    /// user stored and posted is built from the reply, not from the input.
    pub fn update_username_sync(&self, user_id: &str, username: &str) -> UseCaseStatus {
        tracing::info!(
            "[UpdateUsernameUseCase] update_username_sync, user_id={}, username={}",
            user_id,
            username
        );

        let reply = match self.endpoint.update_username(user_id, username) {
            Ok(reply) => reply,
            Err(e) => {
                tracing::warn!(
                    "[UpdateUsernameUseCase] update_username_sync, user_id={}, error={}",
                    user_id,
                    e
                );
                return e.into();
            }
        };

        match reply.status {
            EndpointStatus::Success => {
                let user = User::new(reply.user_id, reply.username);
                self.users_cache.put(user.clone());
                self.event_bus
                    .post_event(Event::UserDetailsChanged(UserDetailsChangedEvent { user }));
                tracing::debug!(
                    "[UpdateUsernameUseCase] update_username_sync, user_id={}, updated",
                    user_id
                );
                UseCaseStatus::Success
            }
            status @ (EndpointStatus::AuthError
            | EndpointStatus::ServerError
            | EndpointStatus::GeneralError) => {
                tracing::warn!(
                    "[UpdateUsernameUseCase] update_username_sync, user_id={}, status={:?}",
                    user_id,
                    status
                );
                UseCaseStatus::Failure
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::doubles::{CannedReply, FakeUpdateUsernameEndpoint, RecordingCache, RecordingEventBus};

    const USER_ID: &str = "USER_ID";
    const USER_NAME: &str = "USER_NAME";

    struct Fixture {
        endpoint: FakeUpdateUsernameEndpoint,
        cache: RecordingCache<User>,
        event_bus: RecordingEventBus,
    }

    impl Fixture {
        fn new(reply: CannedReply) -> Self {
            let endpoint = FakeUpdateUsernameEndpoint::new();
            endpoint.set_reply(reply);
            Self {
                endpoint,
                cache: RecordingCache::new(),
                event_bus: RecordingEventBus::new(),
            }
        }

        fn run(&self) -> UseCaseStatus {
            UpdateUsernameUseCase::new(&self.endpoint, &self.cache, &self.event_bus)
                .update_username_sync(USER_ID, USER_NAME)
        }
    }

    #[test]
    fn test_user_id_and_username_passed_to_endpoint() {
        let fixture = Fixture::new(CannedReply::Success);
        fixture.run();

        assert_eq!(
            fixture.endpoint.calls(),
            vec![(USER_ID.to_string(), USER_NAME.to_string())]
        );
    }

    #[test]
    fn test_success_caches_user_and_posts_event() {
        let fixture = Fixture::new(CannedReply::Success);

        assert_eq!(fixture.run(), UseCaseStatus::Success);

        let expected = User::new(USER_ID, USER_NAME);
        assert_eq!(fixture.cache.writes(), vec![expected.clone()]);
        assert_eq!(
            fixture.event_bus.events(),
            vec![Event::UserDetailsChanged(UserDetailsChangedEvent { user: expected })]
        );
    }

    #[test]
    fn test_endpoint_errors_leave_cache_and_bus_untouched() {
        for reply in [
            CannedReply::AuthError,
            CannedReply::ServerError,
            CannedReply::GeneralError,
        ] {
            let fixture = Fixture::new(reply);

            assert_eq!(fixture.run(), UseCaseStatus::Failure, "{:?}", reply);
            assert_eq!(fixture.cache.interactions(), 0, "{:?}", reply);
            assert!(fixture.event_bus.events().is_empty(), "{:?}", reply);
        }
    }

    #[test]
    fn test_network_error_leaves_cache_and_bus_untouched() {
        let fixture = Fixture::new(CannedReply::NetworkError);

        assert_eq!(fixture.run(), UseCaseStatus::NetworkError);
        assert_eq!(fixture.cache.interactions(), 0);
        assert!(fixture.event_bus.events().is_empty());
    }
}
