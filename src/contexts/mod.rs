mod fetch_question_details;
mod fetch_reputation;
mod fetch_user;
mod fetch_user_profile;
mod get_contacts;
mod listeners;
mod status;
mod update_username;

pub use fetch_question_details::{
    DEFAULT_CACHE_WINDOW, FetchQuestionDetailsUseCase, QuestionDetailsEndpoint,
    QuestionDetailsListener,
};
pub use fetch_reputation::{
    FetchReputationUseCase, ReputationEndpoint, ReputationReply, ReputationResult,
};
pub use fetch_user::{FetchUserEndpoint, FetchUserReply, FetchUserResult, FetchUserUseCase};
pub use fetch_user_profile::{FetchUserProfileUseCase, UserProfileEndpoint, UserProfileReply};
pub use get_contacts::{ContactsEndpoint, ContactsListener, GetContactsUseCase};
pub use listeners::{ListenerError, ListenerSet};
pub use status::UseCaseStatus;
pub use update_username::{UpdateUsernameEndpoint, UpdateUsernameReply, UpdateUsernameUseCase};
