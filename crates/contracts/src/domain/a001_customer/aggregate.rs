use crate::domain::common::EntityId;
use serde::{Deserialize, Serialize};

/// ID type for the customer directory (server-assigned row id)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CustomerId(pub i64);

impl CustomerId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl EntityId for CustomerId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }
    fn from_string(s: &str) -> Result<Self, String> {
        s.parse::<i64>()
            .map(CustomerId::new)
            .map_err(|e| format!("Invalid customer id: {}", e))
    }
}

/// Customer record as returned by `/users`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Customer {
    pub id: CustomerId,
    pub username: String,
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// Payload for creating or updating a customer. The id is assigned (or
/// addressed) server-side and never travels in the body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CustomerDraft {
    pub username: String,
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl Customer {
    /// Pre-populate the edit form from an existing record
    pub fn to_draft(&self) -> CustomerDraft {
        CustomerDraft {
            username: self.username.clone(),
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
        }
    }
}
