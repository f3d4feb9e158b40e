use serde::{Deserialize, Serialize};

/// Question payload as returned by the question details endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionSchema {
    pub title: String,
    pub id: String,
    pub body: String,
}

/// Question details handed to listeners.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionDetails {
    pub id: String,
    pub title: String,
    pub body: String,
}

impl QuestionDetails {
    pub fn new(id: impl Into<String>, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            body: body.into(),
        }
    }
}

impl From<QuestionSchema> for QuestionDetails {
    fn from(schema: QuestionSchema) -> Self {
        Self {
            id: schema.id,
            title: schema.title,
            body: schema.body,
        }
    }
}
