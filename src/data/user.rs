use serde::{Deserialize, Serialize};

use super::Entity;

/// A user as known to the username and fetch-user use cases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub user_id: String,
    pub username: String,
}

impl User {
    pub fn new(user_id: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            username: username.into(),
        }
    }
}

impl Entity for User {
    fn id(&self) -> &str {
        &self.user_id
    }
}

/// Profile details returned by the user profile endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub user_id: String,
    pub full_name: String,
    pub image_url: String,
}

impl UserProfile {
    pub fn new(
        user_id: impl Into<String>,
        full_name: impl Into<String>,
        image_url: impl Into<String>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            full_name: full_name.into(),
            image_url: image_url.into(),
        }
    }
}

impl Entity for UserProfile {
    fn id(&self) -> &str {
        &self.user_id
    }
}
