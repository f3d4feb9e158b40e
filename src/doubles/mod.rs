//! Hand-written test doubles for every collaborator the use cases consume.
//!
//! Each double keeps its state inspectable: endpoints hold a canned reply and
//! log the arguments they were called with, caches and sinks record what was
//! written to them. All of them use interior mutability so a test can lend a
//! `&double` to a use case and keep asserting on it afterwards.

mod call_log;
mod caches;
mod clock;
mod endpoints;
mod event_bus;
mod listeners;

pub use call_log::CallLog;
pub use caches::RecordingCache;
pub use clock::FakeTimeProvider;
pub use endpoints::{
    CannedReply, FakeContactsEndpoint, FakeFetchUserEndpoint, FakeQuestionDetailsEndpoint,
    FakeReputationEndpoint, FakeUpdateUsernameEndpoint, FakeUserProfileEndpoint,
};
pub use event_bus::RecordingEventBus;
pub use listeners::{RecordingContactsListener, RecordingQuestionDetailsListener};
