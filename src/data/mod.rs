mod cache;
mod clock;
mod contact;
mod event_bus;
mod networking;
mod question;
mod user;

pub use cache::{Entity, EntityCache, InMemoryCache};
pub use clock::{SystemTimeProvider, TimeProvider};
pub use contact::{Contact, ContactSchema};
pub use event_bus::{Event, EventBusPoster, UserDetailsChangedEvent};
pub use networking::{EndpointStatus, FailReason, NetworkError, ReputationStatus};
pub use question::{QuestionDetails, QuestionSchema};
pub use user::{User, UserProfile};
