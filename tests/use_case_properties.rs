use std::rc::Rc;

use chrono::Duration;
use exercises::contexts::{
    FetchQuestionDetailsUseCase, FetchReputationUseCase, FetchUserProfileUseCase,
    FetchUserUseCase, GetContactsUseCase, QuestionDetailsListener, UpdateUsernameUseCase,
    UseCaseStatus,
};
use exercises::data::{
    ContactSchema, Event, FailReason, QuestionSchema, ReputationStatus, User, UserDetailsChangedEvent,
    UserProfile,
};
use exercises::doubles::{
    CannedReply, FakeContactsEndpoint, FakeFetchUserEndpoint, FakeQuestionDetailsEndpoint,
    FakeReputationEndpoint, FakeTimeProvider, FakeUpdateUsernameEndpoint,
    FakeUserProfileEndpoint, RecordingCache, RecordingContactsListener, RecordingEventBus,
    RecordingQuestionDetailsListener,
};
use rstest::rstest;

const USER_ID: &str = "USER_ID";
const USER_NAME: &str = "USER_NAME";

#[rstest]
#[case(CannedReply::AuthError, UseCaseStatus::Failure)]
#[case(CannedReply::ServerError, UseCaseStatus::Failure)]
#[case(CannedReply::GeneralError, UseCaseStatus::Failure)]
#[case(CannedReply::NetworkError, UseCaseStatus::NetworkError)]
fn update_username_error_leaves_cache_and_bus_untouched(
    #[case] reply: CannedReply,
    #[case] expected: UseCaseStatus,
) {
    let endpoint = FakeUpdateUsernameEndpoint::new();
    endpoint.set_reply(reply);
    let cache = RecordingCache::<User>::new();
    let event_bus = RecordingEventBus::new();
    let use_case = UpdateUsernameUseCase::new(&endpoint, &cache, &event_bus);

    let result = use_case.update_username_sync(USER_ID, USER_NAME);

    assert_eq!(result, expected);
    assert_eq!(cache.interactions(), 0);
    assert!(event_bus.events().is_empty());
}

#[test]
fn update_username_success_writes_once_and_posts_once() {
    let endpoint = FakeUpdateUsernameEndpoint::new();
    let cache = RecordingCache::new();
    let event_bus = RecordingEventBus::new();
    let use_case = UpdateUsernameUseCase::new(&endpoint, &cache, &event_bus);

    let result = use_case.update_username_sync(USER_ID, USER_NAME);

    assert_eq!(result, UseCaseStatus::Success);
    assert_eq!(cache.writes(), vec![User::new(USER_ID, USER_NAME)]);
    assert_eq!(
        event_bus.events(),
        vec![Event::UserDetailsChanged(UserDetailsChangedEvent {
            user: User::new(USER_ID, USER_NAME),
        })]
    );
}

#[rstest]
#[case(CannedReply::AuthError)]
#[case(CannedReply::ServerError)]
#[case(CannedReply::GeneralError)]
#[case(CannedReply::NetworkError)]
fn fetch_user_profile_error_is_not_cached(#[case] reply: CannedReply) {
    let endpoint = FakeUserProfileEndpoint::returning(UserProfile::new(USER_ID, "Full Name", "url"));
    endpoint.set_reply(reply);
    let cache = RecordingCache::new();
    let use_case = FetchUserProfileUseCase::new(&endpoint, &cache);

    let result = use_case.fetch_user_profile_sync(USER_ID);

    assert!(!result.is_success());
    assert!(cache.writes().is_empty());
    assert_eq!(endpoint.calls(), vec![USER_ID.to_string()]);
}

#[test]
fn fetch_user_prefers_cached_entry() {
    let endpoint = FakeFetchUserEndpoint::returning(User::new(USER_ID, "server name"));
    let cache = RecordingCache::new();
    cache.seed(User::new(USER_ID, USER_NAME));
    let use_case = FetchUserUseCase::new(&endpoint, &cache);

    let result = use_case.fetch_user_sync(USER_ID);

    assert_eq!(result.status, UseCaseStatus::Success);
    assert_eq!(result.user, Some(User::new(USER_ID, USER_NAME)));
    assert_eq!(endpoint.call_count(), 0);
}

#[rstest]
#[case(ReputationStatus::GeneralError)]
#[case(ReputationStatus::NetworkError)]
fn fetch_reputation_failure_statuses(#[case] status: ReputationStatus) {
    let endpoint = FakeReputationEndpoint::new(status, 0);
    let use_case = FetchReputationUseCase::new(&endpoint);

    let result = use_case.fetch_reputation();

    assert_eq!(result.status, UseCaseStatus::Failure);
    assert_eq!(endpoint.call_count(), 1);
}

#[rstest]
#[case(FailReason::GeneralError, UseCaseStatus::Failure)]
#[case(FailReason::NetworkError, UseCaseStatus::NetworkError)]
fn get_contacts_failure_notifies_every_listener(
    #[case] reason: FailReason,
    #[case] expected: UseCaseStatus,
) {
    let endpoint = FakeContactsEndpoint::failing(reason);
    let use_case = GetContactsUseCase::new(&endpoint);
    let first = Rc::new(RecordingContactsListener::new());
    let second = Rc::new(RecordingContactsListener::new());
    use_case.register_listener(first.clone()).unwrap();
    use_case.register_listener(second.clone()).unwrap();

    let result = use_case.fetch_contacts_and_notify("filter");

    assert_eq!(result, expected);
    assert_eq!(first.failures(), 1);
    assert_eq!(second.failures(), 1);
    assert!(first.successes().is_empty());
}

#[test]
fn get_contacts_auth_error_notifies_nobody() {
    let endpoint = FakeContactsEndpoint::failing(FailReason::AuthError);
    let use_case = GetContactsUseCase::new(&endpoint);
    let listener = Rc::new(RecordingContactsListener::new());
    use_case.register_listener(listener.clone()).unwrap();

    let result = use_case.fetch_contacts_and_notify("filter");

    assert_eq!(result, UseCaseStatus::Failure);
    assert_eq!(listener.interactions(), 0);
}

#[rstest]
#[case(FailReason::AuthError, UseCaseStatus::Failure, 0)]
#[case(FailReason::GeneralError, UseCaseStatus::Failure, 1)]
#[case(FailReason::NetworkError, UseCaseStatus::NetworkError, 1)]
fn question_details_failure_reaches_registered_listeners_only(
    #[case] reason: FailReason,
    #[case] expected: UseCaseStatus,
    #[case] notified_failures: usize,
) {
    let endpoint = FakeQuestionDetailsEndpoint::failing(reason);
    let clock = FakeTimeProvider::from_millis(0);
    let use_case = FetchQuestionDetailsUseCase::new(&endpoint, &clock);
    let registered = Rc::new(RecordingQuestionDetailsListener::new());
    let removed = Rc::new(RecordingQuestionDetailsListener::new());
    let removed_handle: Rc<dyn QuestionDetailsListener> = removed.clone();
    use_case.register_listener(registered.clone()).unwrap();
    use_case.register_listener(Rc::clone(&removed_handle)).unwrap();
    use_case.unregister_listener(&removed_handle).unwrap();

    let result = use_case.fetch_question_details_and_notify("Q1");
    let late = Rc::new(RecordingQuestionDetailsListener::new());
    use_case.register_listener(late.clone()).unwrap();

    assert_eq!(result, expected);
    assert_eq!(registered.failures(), notified_failures);
    assert!(registered.successes().is_empty());
    assert_eq!(removed.interactions(), 0);
    assert_eq!(late.interactions(), 0);
}

#[rstest]
#[case(CannedReply::AuthError, UseCaseStatus::Failure)]
#[case(CannedReply::ServerError, UseCaseStatus::Failure)]
#[case(CannedReply::GeneralError, UseCaseStatus::Failure)]
#[case(CannedReply::NetworkError, UseCaseStatus::NetworkError)]
fn fetch_user_error_returns_no_user_and_no_write(
    #[case] reply: CannedReply,
    #[case] expected: UseCaseStatus,
) {
    let endpoint = FakeFetchUserEndpoint::returning(User::new(USER_ID, USER_NAME));
    endpoint.set_reply(reply);
    let cache = RecordingCache::new();
    let use_case = FetchUserUseCase::new(&endpoint, &cache);

    let result = use_case.fetch_user_sync(USER_ID);

    assert_eq!(result.status, expected);
    assert_eq!(result.user, None);
    assert!(cache.writes().is_empty());
}

#[test]
fn get_contacts_maps_schemas_for_listeners() {
    let endpoint = FakeContactsEndpoint::succeeding(vec![ContactSchema {
        id: "1".to_string(),
        full_name: "Ada".to_string(),
        full_phone_number: "555".to_string(),
        image_url: "img".to_string(),
        age: 36.0,
    }]);
    let use_case = GetContactsUseCase::new(&endpoint);
    let listener = Rc::new(RecordingContactsListener::new());
    use_case.register_listener(listener.clone()).unwrap();

    assert_eq!(
        use_case.fetch_contacts_and_notify("Ad"),
        UseCaseStatus::Success
    );

    let successes = listener.successes();
    assert_eq!(successes.len(), 1);
    assert_eq!(successes[0][0].full_name, "Ada");
    assert_eq!(endpoint.calls(), vec!["Ad".to_string()]);
}

#[test]
fn question_details_freshness_follows_custom_window() {
    let endpoint = FakeQuestionDetailsEndpoint::succeeding(QuestionSchema {
        title: "Title".to_string(),
        id: "Q1".to_string(),
        body: "Body".to_string(),
    });
    let clock = FakeTimeProvider::from_millis(0);
    let use_case =
        FetchQuestionDetailsUseCase::with_cache_window(&endpoint, &clock, Duration::seconds(5));
    let listener = Rc::new(RecordingQuestionDetailsListener::new());
    use_case.register_listener(listener.clone()).unwrap();

    use_case.fetch_question_details_and_notify("Q1");
    clock.advance(Duration::seconds(5));
    use_case.fetch_question_details_and_notify("Q1");
    assert_eq!(endpoint.call_count(), 1);

    clock.advance(Duration::milliseconds(1));
    use_case.fetch_question_details_and_notify("Q1");
    assert_eq!(endpoint.call_count(), 2);
    assert_eq!(listener.successes().len(), 3);
}
