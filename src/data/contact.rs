use serde::{Deserialize, Serialize};

/// A contact as returned by the contacts endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactSchema {
    pub id: String,
    pub full_name: String,
    pub full_phone_number: String,
    pub image_url: String,
    pub age: f64,
}

/// A contact as shown to listeners. Phone number and age are dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: String,
    pub full_name: String,
    pub image_url: String,
}

impl From<&ContactSchema> for Contact {
    fn from(schema: &ContactSchema) -> Self {
        Self {
            id: schema.id.clone(),
            full_name: schema.full_name.clone(),
            image_url: schema.image_url.clone(),
        }
    }
}
