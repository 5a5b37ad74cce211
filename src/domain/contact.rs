use super::*;
use serde::{Deserialize, Serialize};

/// A single phone book entry.
///
/// Only `name` and `phone` are persisted. The `id` is handed out when the
/// contact is created or loaded and lives for the session, so a rendered row
/// always points back at the same record no matter how the list is filtered.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Contact {
    #[serde(skip, default = "Uuid::new_v4")]
    pub id: Uuid,

    pub name: String,
    pub phone: String,
}

pub enum ValidationReq {
    __,
}

impl ValidationReq {
    pub fn name_req() -> String {
        "Name must not be empty".to_string()
    }

    pub fn phone_req() -> String {
        "Phone number must not be empty".to_string()
    }
}

impl Contact {
    pub fn new(name: String, phone: String) -> Self {
        Contact {
            id: Uuid::new_v4(),
            name,
            phone,
        }
    }

    pub fn validate_name(&self) -> bool {
        !self.name.trim().is_empty()
    }

    pub fn validate_number(&self) -> bool {
        !self.phone.trim().is_empty()
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if !self.validate_name() {
            return Err(AppError::Validation(ValidationReq::name_req()));
        }
        if !self.validate_number() {
            return Err(AppError::Validation(ValidationReq::phone_req()));
        }
        Ok(())
    }

    /// Exact, case-sensitive comparison on both fields.
    pub fn matches(&self, name: &str, phone: &str) -> bool {
        self.name == name && self.phone == phone
    }
}

// Equality covers name and phone only, `id` is session-local.
impl PartialEq for Contact {
    fn eq(&self, other: &Self) -> bool {
        self.matches(&other.name, &other.phone)
    }
}

impl Eq for Contact {}

/// Strips every character outside `0-9`, the way the phone field does while
/// the user types.
pub fn sanitize_phone(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}
