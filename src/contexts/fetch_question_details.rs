use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use chrono::{DateTime, Duration, Utc};

use crate::contexts::{ListenerError, ListenerSet, UseCaseStatus};
use crate::data::{FailReason, QuestionDetails, QuestionSchema, TimeProvider};

/// How long fetched question details are served from the cache.
pub const DEFAULT_CACHE_WINDOW: Duration = Duration::milliseconds(60_000);

/// Trait for fetching a question's details from the server
pub trait QuestionDetailsEndpoint {
    fn fetch_question_details(&self, question_id: &str) -> Result<QuestionSchema, FailReason>;
}

impl<E: QuestionDetailsEndpoint + ?Sized> QuestionDetailsEndpoint for &E {
    fn fetch_question_details(&self, question_id: &str) -> Result<QuestionSchema, FailReason> {
        (**self).fetch_question_details(question_id)
    }
}

/// Receives the outcome of
/// [`FetchQuestionDetailsUseCase::fetch_question_details_and_notify`].
pub trait QuestionDetailsListener {
    fn on_question_details_fetched(&self, details: &QuestionDetails);
    fn on_question_details_fetch_failed(&self);
}

#[derive(Debug, Clone)]
struct CachedQuestion {
    details: QuestionDetails,
    cached_at: DateTime<Utc>,
}

/// Fetches question details, serving repeated requests from a per-question
/// cache until the entry is older than the cache window.
///
/// An entry cached at `t` is stale once `now - t` exceeds the window, as
/// measured by the injected [`TimeProvider`].
pub struct FetchQuestionDetailsUseCase<E, T>
where
    E: QuestionDetailsEndpoint,
    T: TimeProvider,
{
    endpoint: E,
    time_provider: T,
    cache_window: Duration,
    cache: RefCell<HashMap<String, CachedQuestion>>,
    listeners: ListenerSet<dyn QuestionDetailsListener>,
}

impl<E, T> FetchQuestionDetailsUseCase<E, T>
where
    E: QuestionDetailsEndpoint,
    T: TimeProvider,
{
    pub fn new(endpoint: E, time_provider: T) -> Self {
        Self::with_cache_window(endpoint, time_provider, DEFAULT_CACHE_WINDOW)
    }

    pub fn with_cache_window(endpoint: E, time_provider: T, cache_window: Duration) -> Self {
        Self {
            endpoint,
            time_provider,
            cache_window,
            cache: RefCell::new(HashMap::new()),
            listeners: ListenerSet::new(),
        }
    }

    pub fn register_listener(
        &self,
        listener: Rc<dyn QuestionDetailsListener>,
    ) -> Result<(), ListenerError> {
        self.listeners.register(listener)
    }

    pub fn unregister_listener(
        &self,
        listener: &Rc<dyn QuestionDetailsListener>,
    ) -> Result<(), ListenerError> {
        self.listeners.unregister(listener)
    }

    pub fn fetch_question_details_and_notify(&self, question_id: &str) -> UseCaseStatus {
        tracing::info!(
            "[FetchQuestionDetailsUseCase] fetch_question_details_and_notify, question_id={}",
            question_id
        );

        let now = self.time_provider.now();
        if let Some(details) = self.fresh_entry(question_id, now) {
            tracing::debug!(
                "[FetchQuestionDetailsUseCase] fetch_question_details_and_notify, cache hit, question_id={}",
                question_id
            );
            self.notify_success(&details);
            return UseCaseStatus::Success;
        }

        match self.endpoint.fetch_question_details(question_id) {
            Ok(schema) => {
                let details = QuestionDetails::from(schema);
                self.cache.borrow_mut().insert(
                    question_id.to_string(),
                    CachedQuestion {
                        details: details.clone(),
                        cached_at: now,
                    },
                );
                self.notify_success(&details);
                UseCaseStatus::Success
            }
            Err(FailReason::AuthError) => {
                tracing::warn!(
                    "[FetchQuestionDetailsUseCase] fetch_question_details_and_notify, question_id={}, auth error, listeners not notified",
                    question_id
                );
                UseCaseStatus::Failure
            }
            Err(reason) => {
                tracing::warn!(
                    "[FetchQuestionDetailsUseCase] fetch_question_details_and_notify, question_id={}, error={}",
                    question_id,
                    reason
                );
                self.listeners
                    .notify(|listener| listener.on_question_details_fetch_failed());
                reason.into()
            }
        }
    }

    fn fresh_entry(&self, question_id: &str, now: DateTime<Utc>) -> Option<QuestionDetails> {
        let cache = self.cache.borrow();
        let entry = cache.get(question_id)?;
        if now - entry.cached_at > self.cache_window {
            tracing::debug!(
                "[FetchQuestionDetailsUseCase] fresh_entry, expired, question_id={}",
                question_id
            );
            return None;
        }
        Some(entry.details.clone())
    }

    fn notify_success(&self, details: &QuestionDetails) {
        self.listeners
            .notify(|listener| listener.on_question_details_fetched(details));
    }
}
