use std::cell::{Cell, RefCell};

use serde::{Deserialize, Serialize};

use crate::contexts::{
    ContactsEndpoint, FetchUserEndpoint, FetchUserReply, QuestionDetailsEndpoint,
    ReputationEndpoint, ReputationReply, UpdateUsernameEndpoint, UpdateUsernameReply,
    UserProfileEndpoint, UserProfileReply,
};
use crate::data::{
    ContactSchema, EndpointStatus, FailReason, NetworkError, QuestionSchema, ReputationStatus,
    User, UserProfile,
};

use super::CallLog;

/// What a fake user endpoint answers with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CannedReply {
    #[default]
    Success,
    AuthError,
    ServerError,
    GeneralError,
    NetworkError,
}

impl CannedReply {
    /// Status to put on the reply, or the transport failure to raise instead.
    pub fn status(self) -> Result<EndpointStatus, NetworkError> {
        match self {
            CannedReply::Success => Ok(EndpointStatus::Success),
            CannedReply::AuthError => Ok(EndpointStatus::AuthError),
            CannedReply::ServerError => Ok(EndpointStatus::ServerError),
            CannedReply::GeneralError => Ok(EndpointStatus::GeneralError),
            CannedReply::NetworkError => Err(NetworkError),
        }
    }
}

/// User profile endpoint double. Succeeds with the configured profile,
/// error replies carry empty payload fields.
#[derive(Debug)]
pub struct FakeUserProfileEndpoint {
    reply: Cell<CannedReply>,
    profile: RefCell<UserProfile>,
    calls: CallLog<String>,
}

impl FakeUserProfileEndpoint {
    pub fn returning(profile: UserProfile) -> Self {
        Self {
            reply: Cell::new(CannedReply::Success),
            profile: RefCell::new(profile),
            calls: CallLog::new(),
        }
    }

    pub fn set_reply(&self, reply: CannedReply) {
        self.reply.set(reply);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.calls()
    }

    pub fn call_count(&self) -> usize {
        self.calls.count()
    }
}

impl UserProfileEndpoint for FakeUserProfileEndpoint {
    fn get_user_profile(&self, user_id: &str) -> Result<UserProfileReply, NetworkError> {
        self.calls.record(user_id.to_string());
        let status = self.reply.get().status()?;
        if !status.is_success() {
            return Ok(UserProfileReply {
                status,
                user_id: String::new(),
                full_name: String::new(),
                image_url: String::new(),
            });
        }
        let profile = self.profile.borrow().clone();
        Ok(UserProfileReply {
            status,
            user_id: profile.user_id,
            full_name: profile.full_name,
            image_url: profile.image_url,
        })
    }
}

/// Update username endpoint double. A successful reply echoes the request.
#[derive(Debug, Default)]
pub struct FakeUpdateUsernameEndpoint {
    reply: Cell<CannedReply>,
    calls: CallLog<(String, String)>,
}

impl FakeUpdateUsernameEndpoint {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_reply(&self, reply: CannedReply) {
        self.reply.set(reply);
    }

    /// `(user_id, username)` pairs, in call order.
    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.calls()
    }

    pub fn call_count(&self) -> usize {
        self.calls.count()
    }
}

impl UpdateUsernameEndpoint for FakeUpdateUsernameEndpoint {
    fn update_username(
        &self,
        user_id: &str,
        username: &str,
    ) -> Result<UpdateUsernameReply, NetworkError> {
        self.calls.record((user_id.to_string(), username.to_string()));
        let status = self.reply.get().status()?;
        let (user_id, username) = if status.is_success() {
            (user_id.to_string(), username.to_string())
        } else {
            (String::new(), String::new())
        };
        Ok(UpdateUsernameReply {
            status,
            user_id,
            username,
        })
    }
}

/// Fetch user endpoint double. Succeeds with the configured user.
#[derive(Debug)]
pub struct FakeFetchUserEndpoint {
    reply: Cell<CannedReply>,
    user: RefCell<User>,
    calls: CallLog<String>,
}

impl FakeFetchUserEndpoint {
    pub fn returning(user: User) -> Self {
        Self {
            reply: Cell::new(CannedReply::Success),
            user: RefCell::new(user),
            calls: CallLog::new(),
        }
    }

    pub fn set_reply(&self, reply: CannedReply) {
        self.reply.set(reply);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.calls()
    }

    pub fn call_count(&self) -> usize {
        self.calls.count()
    }
}

impl FetchUserEndpoint for FakeFetchUserEndpoint {
    fn fetch_user_sync(&self, user_id: &str) -> Result<FetchUserReply, NetworkError> {
        self.calls.record(user_id.to_string());
        let status = self.reply.get().status()?;
        let user = if status.is_success() {
            self.user.borrow().clone()
        } else {
            User::new("", "")
        };
        Ok(FetchUserReply {
            status,
            user_id: user.user_id,
            username: user.username,
        })
    }
}

/// Reputation endpoint double returning a fixed status and reputation.
#[derive(Debug)]
pub struct FakeReputationEndpoint {
    reply: Cell<ReputationReply>,
    calls: Cell<usize>,
}

impl FakeReputationEndpoint {
    pub fn new(status: ReputationStatus, reputation: i32) -> Self {
        Self {
            reply: Cell::new(ReputationReply { status, reputation }),
            calls: Cell::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.get()
    }
}

impl ReputationEndpoint for FakeReputationEndpoint {
    fn get_reputation_sync(&self) -> ReputationReply {
        self.calls.set(self.calls.get() + 1);
        self.reply.get()
    }
}

/// Contacts endpoint double.
#[derive(Debug)]
pub struct FakeContactsEndpoint {
    reply: Result<Vec<ContactSchema>, FailReason>,
    calls: CallLog<String>,
}

impl FakeContactsEndpoint {
    pub fn succeeding(contacts: Vec<ContactSchema>) -> Self {
        Self {
            reply: Ok(contacts),
            calls: CallLog::new(),
        }
    }

    pub fn failing(reason: FailReason) -> Self {
        Self {
            reply: Err(reason),
            calls: CallLog::new(),
        }
    }

    /// Filter terms, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.calls()
    }

    pub fn call_count(&self) -> usize {
        self.calls.count()
    }
}

impl ContactsEndpoint for FakeContactsEndpoint {
    fn get_contacts(&self, filter_term: &str) -> Result<Vec<ContactSchema>, FailReason> {
        self.calls.record(filter_term.to_string());
        self.reply.clone()
    }
}

/// Question details endpoint double.
#[derive(Debug)]
pub struct FakeQuestionDetailsEndpoint {
    reply: RefCell<Result<QuestionSchema, FailReason>>,
    calls: CallLog<String>,
}

impl FakeQuestionDetailsEndpoint {
    pub fn succeeding(question: QuestionSchema) -> Self {
        Self {
            reply: RefCell::new(Ok(question)),
            calls: CallLog::new(),
        }
    }

    pub fn failing(reason: FailReason) -> Self {
        Self {
            reply: RefCell::new(Err(reason)),
            calls: CallLog::new(),
        }
    }

    pub fn set_reply(&self, reply: Result<QuestionSchema, FailReason>) {
        *self.reply.borrow_mut() = reply;
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.calls()
    }

    pub fn call_count(&self) -> usize {
        self.calls.count()
    }
}

impl QuestionDetailsEndpoint for FakeQuestionDetailsEndpoint {
    fn fetch_question_details(&self, question_id: &str) -> Result<QuestionSchema, FailReason> {
        self.calls.record(question_id.to_string());
        self.reply.borrow().clone()
    }
}
