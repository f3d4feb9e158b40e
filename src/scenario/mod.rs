//! YAML-described runs of a single use case against test doubles.
//!
//! A scenario names the use case, its input and the canned endpoint reply;
//! [`run`] wires the doubles, invokes the use case and reports what every
//! collaborator observed.
//!
//! ```yaml
//! use_case: update_username
//! user_id: USER_ID
//! username: USER_NAME
//! reply: server_error
//! ```

mod runner;

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Duration, Utc};
use serde::Deserialize;
use thiserror::Error;

use crate::contexts::{DEFAULT_CACHE_WINDOW, ListenerError};
use crate::data::{ContactSchema, FailReason, QuestionSchema, ReputationStatus, User, UserProfile};
use crate::doubles::CannedReply;

pub use runner::{CachedEntity, ListenerPayload, ListenerReport, Outcome, ScenarioReport, run};

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("failed to read scenario {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse scenario: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("invalid scenario: {0}")]
    Invalid(String),
    #[error("failed to register listener: {0}")]
    Listener(#[from] ListenerError),
}

/// Clock reading `offset_ms` after the start of a scenario timeline, which
/// begins at the Unix epoch.
pub(crate) fn timeline_instant(offset_ms: i64) -> Result<DateTime<Utc>, ScenarioError> {
    DateTime::from_timestamp_millis(offset_ms).ok_or_else(|| {
        ScenarioError::Invalid(format!("at_ms offset {} is out of range", offset_ms))
    })
}

pub(crate) fn cache_window(window_ms: Option<i64>) -> Result<Duration, ScenarioError> {
    match window_ms {
        None => Ok(DEFAULT_CACHE_WINDOW),
        Some(ms) if ms < 0 => Err(ScenarioError::Invalid(
            "cache_window_ms must not be negative".to_string(),
        )),
        Some(ms) => Duration::try_milliseconds(ms).ok_or_else(|| {
            ScenarioError::Invalid(format!("cache_window_ms {} is out of range", ms))
        }),
    }
}

fn one() -> u32 {
    1
}

fn one_listener() -> usize {
    1
}

fn at_start() -> Vec<i64> {
    vec![0]
}

/// One use case run, tagged by `use_case` in YAML.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "use_case", rename_all = "snake_case")]
pub enum Scenario {
    FetchUserProfile {
        user_id: String,
        profile: UserProfile,
        #[serde(default)]
        reply: CannedReply,
        #[serde(default = "one")]
        invocations: u32,
    },
    UpdateUsername {
        user_id: String,
        username: String,
        #[serde(default)]
        reply: CannedReply,
        #[serde(default = "one")]
        invocations: u32,
    },
    FetchUser {
        user_id: String,
        user: User,
        #[serde(default)]
        reply: CannedReply,
        /// Pre-seeded cache entry.
        #[serde(default)]
        cached: Option<User>,
        #[serde(default = "one")]
        invocations: u32,
    },
    FetchReputation {
        status: ReputationStatus,
        reputation: i32,
        #[serde(default = "one")]
        invocations: u32,
    },
    GetContacts {
        filter_term: String,
        #[serde(default)]
        contacts: Vec<ContactSchema>,
        /// Endpoint fails with this reason instead of returning `contacts`.
        #[serde(default)]
        failure: Option<FailReason>,
        #[serde(default = "one_listener")]
        listeners: usize,
        #[serde(default = "one")]
        invocations: u32,
    },
    FetchQuestionDetails {
        question_id: String,
        question: QuestionSchema,
        #[serde(default)]
        failure: Option<FailReason>,
        #[serde(default = "one_listener")]
        listeners: usize,
        #[serde(default)]
        cache_window_ms: Option<i64>,
        /// Milliseconds into the timeline at which each call happens.
        #[serde(default = "at_start")]
        at_ms: Vec<i64>,
    },
}

impl Scenario {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ScenarioError> {
        let scenario: Scenario = serde_yaml::from_str(yaml)?;
        scenario.validate()?;
        Ok(scenario)
    }

    pub fn from_path(path: &Path) -> Result<Self, ScenarioError> {
        let yaml = fs::read_to_string(path).map_err(|source| ScenarioError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&yaml)
    }

    /// Name of the use case, as written in the `use_case` tag.
    pub fn use_case(&self) -> &'static str {
        match self {
            Scenario::FetchUserProfile { .. } => "fetch_user_profile",
            Scenario::UpdateUsername { .. } => "update_username",
            Scenario::FetchUser { .. } => "fetch_user",
            Scenario::FetchReputation { .. } => "fetch_reputation",
            Scenario::GetContacts { .. } => "get_contacts",
            Scenario::FetchQuestionDetails { .. } => "fetch_question_details",
        }
    }

    fn validate(&self) -> Result<(), ScenarioError> {
        match self {
            Scenario::FetchUserProfile { invocations, .. }
            | Scenario::UpdateUsername { invocations, .. }
            | Scenario::FetchUser { invocations, .. }
            | Scenario::FetchReputation { invocations, .. }
            | Scenario::GetContacts { invocations, .. } => {
                if *invocations == 0 {
                    return Err(ScenarioError::Invalid(
                        "invocations must be at least 1".to_string(),
                    ));
                }
            }
            Scenario::FetchQuestionDetails {
                at_ms,
                cache_window_ms,
                ..
            } => {
                if at_ms.is_empty() {
                    return Err(ScenarioError::Invalid("at_ms must not be empty".to_string()));
                }
                if at_ms.windows(2).any(|pair| pair[1] < pair[0]) {
                    return Err(ScenarioError::Invalid(
                        "at_ms must be in non-decreasing order".to_string(),
                    ));
                }
                for offset in at_ms {
                    timeline_instant(*offset)?;
                }
                cache_window(*cache_window_ms)?;
            }
        }
        Ok(())
    }
}

/// Use cases a scenario can name.
pub const USE_CASES: [&str; 6] = [
    "fetch_user_profile",
    "update_username",
    "fetch_user",
    "fetch_reputation",
    "get_contacts",
    "fetch_question_details",
];
