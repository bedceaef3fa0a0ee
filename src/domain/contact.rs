use serde::{Deserialize, Serialize};

/// A single contact record. The id is assigned by the owning store; a
/// freshly constructed contact carries the placeholder 0 until it is added.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)] // For compatibility with hand-edited files missing a field.
pub struct Contact {
    pub id: u32,
    pub name: String,
    pub email: String,
}

impl Contact {
    pub fn new(name: String, email: String) -> Self {
        Contact { id: 0, name, email }
    }
}

pub enum ValidationReq {
    __,
}

impl ValidationReq {
    pub fn name_req() -> String {
        "Name must not be empty after trimming whitespace".to_string()
    }

    pub fn email_req() -> String {
        "Email must contain exactly one '@' with non-empty parts on both sides, \
        a dotted domain, and no whitespace or control characters"
            .to_string()
    }
}
