use serde::{Deserialize, Serialize};

use crate::form::FormState;

/// The JSON body posted to the contact endpoint. Values are sent verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl From<FormState> for ContactRequest {
    fn from(value: FormState) -> Self {
        Self {
            name: value.name,
            email: value.email,
            phone: value.phone,
            message: value.message,
        }
    }
}
