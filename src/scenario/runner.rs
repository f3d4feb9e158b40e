use std::rc::Rc;

use serde::Serialize;

use crate::contexts::{
    FetchQuestionDetailsUseCase, FetchReputationUseCase, FetchUserResult,
    FetchUserUseCase, FetchUserProfileUseCase, GetContactsUseCase, ReputationResult,
    UpdateUsernameUseCase, UseCaseStatus,
};
use crate::data::{Contact, Event, QuestionDetails, User, UserProfile};
use crate::doubles::{
    FakeContactsEndpoint, FakeFetchUserEndpoint, FakeQuestionDetailsEndpoint,
    FakeReputationEndpoint, FakeTimeProvider, FakeUpdateUsernameEndpoint,
    FakeUserProfileEndpoint, RecordingCache, RecordingContactsListener, RecordingEventBus,
    RecordingQuestionDetailsListener,
};

use super::{Scenario, ScenarioError, cache_window, timeline_instant};

/// Result of one use case invocation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Outcome {
    Status(UseCaseStatus),
    User(FetchUserResult),
    Reputation(ReputationResult),
}

impl Outcome {
    pub fn status(&self) -> UseCaseStatus {
        match self {
            Outcome::Status(status) => *status,
            Outcome::User(result) => result.status,
            Outcome::Reputation(result) => result.status,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CachedEntity {
    User(User),
    Profile(UserProfile),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ListenerPayload {
    Contacts(Vec<Contact>),
    Question(QuestionDetails),
}

/// Callbacks received by one registered listener.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListenerReport {
    pub successes: Vec<ListenerPayload>,
    pub failures: usize,
}

/// Everything the doubles observed during a scenario run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioReport {
    pub use_case: &'static str,
    pub outcomes: Vec<Outcome>,
    /// Arguments of each endpoint call, in order.
    pub endpoint_calls: Vec<Vec<String>>,
    pub cache_writes: Vec<CachedEntity>,
    pub events: Vec<Event>,
    pub listeners: Vec<ListenerReport>,
}

impl ScenarioReport {
    fn new(use_case: &'static str) -> Self {
        Self {
            use_case,
            outcomes: Vec::new(),
            endpoint_calls: Vec::new(),
            cache_writes: Vec::new(),
            events: Vec::new(),
            listeners: Vec::new(),
        }
    }
}

/// Runs `scenario` against fresh doubles.
pub fn run(scenario: &Scenario) -> Result<ScenarioReport, ScenarioError> {
    tracing::info!("[Scenario] run, use_case={}", scenario.use_case());
    let mut report = ScenarioReport::new(scenario.use_case());

    match scenario {
        Scenario::FetchUserProfile {
            user_id,
            profile,
            reply,
            invocations,
        } => {
            let endpoint = FakeUserProfileEndpoint::returning(profile.clone());
            endpoint.set_reply(*reply);
            let cache = RecordingCache::new();
            let use_case = FetchUserProfileUseCase::new(&endpoint, &cache);

            for _ in 0..*invocations {
                report
                    .outcomes
                    .push(Outcome::Status(use_case.fetch_user_profile_sync(user_id)));
            }

            report.endpoint_calls = endpoint.calls().into_iter().map(|id| vec![id]).collect();
            report.cache_writes = cache.writes().into_iter().map(CachedEntity::Profile).collect();
        }
        Scenario::UpdateUsername {
            user_id,
            username,
            reply,
            invocations,
        } => {
            let endpoint = FakeUpdateUsernameEndpoint::new();
            endpoint.set_reply(*reply);
            let cache = RecordingCache::new();
            let event_bus = RecordingEventBus::new();
            let use_case = UpdateUsernameUseCase::new(&endpoint, &cache, &event_bus);

            for _ in 0..*invocations {
                report
                    .outcomes
                    .push(Outcome::Status(use_case.update_username_sync(user_id, username)));
            }

            report.endpoint_calls = endpoint
                .calls()
                .into_iter()
                .map(|(id, name)| vec![id, name])
                .collect();
            report.cache_writes = cache.writes().into_iter().map(CachedEntity::User).collect();
            report.events = event_bus.events();
        }
        Scenario::FetchUser {
            user_id,
            user,
            reply,
            cached,
            invocations,
        } => {
            let endpoint = FakeFetchUserEndpoint::returning(user.clone());
            endpoint.set_reply(*reply);
            let cache = RecordingCache::new();
            if let Some(cached) = cached {
                cache.seed(cached.clone());
            }
            let use_case = FetchUserUseCase::new(&endpoint, &cache);

            for _ in 0..*invocations {
                report
                    .outcomes
                    .push(Outcome::User(use_case.fetch_user_sync(user_id)));
            }

            report.endpoint_calls = endpoint.calls().into_iter().map(|id| vec![id]).collect();
            report.cache_writes = cache.writes().into_iter().map(CachedEntity::User).collect();
        }
        Scenario::FetchReputation {
            status,
            reputation,
            invocations,
        } => {
            let endpoint = FakeReputationEndpoint::new(*status, *reputation);
            let use_case = FetchReputationUseCase::new(&endpoint);

            for _ in 0..*invocations {
                report
                    .outcomes
                    .push(Outcome::Reputation(use_case.fetch_reputation()));
            }

            report.endpoint_calls = vec![Vec::new(); endpoint.call_count()];
        }
        Scenario::GetContacts {
            filter_term,
            contacts,
            failure,
            listeners,
            invocations,
        } => {
            let endpoint = match failure {
                Some(reason) => FakeContactsEndpoint::failing(*reason),
                None => FakeContactsEndpoint::succeeding(contacts.clone()),
            };
            let use_case = GetContactsUseCase::new(&endpoint);
            let recorders: Vec<Rc<RecordingContactsListener>> = (0..*listeners)
                .map(|_| Rc::new(RecordingContactsListener::new()))
                .collect();
            for recorder in &recorders {
                use_case.register_listener(recorder.clone())?;
            }

            for _ in 0..*invocations {
                report
                    .outcomes
                    .push(Outcome::Status(use_case.fetch_contacts_and_notify(filter_term)));
            }

            report.endpoint_calls = endpoint.calls().into_iter().map(|term| vec![term]).collect();
            report.listeners = recorders
                .iter()
                .map(|recorder| ListenerReport {
                    successes: recorder
                        .successes()
                        .into_iter()
                        .map(ListenerPayload::Contacts)
                        .collect(),
                    failures: recorder.failures(),
                })
                .collect();
        }
        Scenario::FetchQuestionDetails {
            question_id,
            question,
            failure,
            listeners,
            cache_window_ms,
            at_ms,
        } => {
            let endpoint = match failure {
                Some(reason) => FakeQuestionDetailsEndpoint::failing(*reason),
                None => FakeQuestionDetailsEndpoint::succeeding(question.clone()),
            };
            let clock = FakeTimeProvider::at(timeline_instant(0)?);
            let window = cache_window(*cache_window_ms)?;
            let use_case = FetchQuestionDetailsUseCase::with_cache_window(&endpoint, &clock, window);
            let recorders: Vec<Rc<RecordingQuestionDetailsListener>> = (0..*listeners)
                .map(|_| Rc::new(RecordingQuestionDetailsListener::new()))
                .collect();
            for recorder in &recorders {
                use_case.register_listener(recorder.clone())?;
            }

            for offset in at_ms {
                clock.set(timeline_instant(*offset)?);
                report.outcomes.push(Outcome::Status(
                    use_case.fetch_question_details_and_notify(question_id),
                ));
            }

            report.endpoint_calls = endpoint.calls().into_iter().map(|id| vec![id]).collect();
            report.listeners = recorders
                .iter()
                .map(|recorder| ListenerReport {
                    successes: recorder
                        .successes()
                        .into_iter()
                        .map(ListenerPayload::Question)
                        .collect(),
                    failures: recorder.failures(),
                })
                .collect();
        }
    }

    tracing::debug!(
        "[Scenario] run, use_case={}, endpoint_calls={}, cache_writes={}",
        report.use_case,
        report.endpoint_calls.len(),
        report.cache_writes.len()
    );
    Ok(report)
}
