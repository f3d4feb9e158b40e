use serde::Serialize;

use super::User;

/// Posted after a user's details were changed on the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserDetailsChangedEvent {
    pub user: User,
}

/// Events that use cases can post to an [`EventBusPoster`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Event {
    UserDetailsChanged(UserDetailsChangedEvent),
}

/// Fire-and-forget sink for application events.
pub trait EventBusPoster {
    fn post_event(&self, event: Event);
}

impl<B: EventBusPoster + ?Sized> EventBusPoster for &B {
    fn post_event(&self, event: Event) {
        (**self).post_event(event)
    }
}
