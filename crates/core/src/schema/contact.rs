//! Contact form message.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::Record;
use super::checks::valid_email;
use crate::types::RecordKind;

/// A message sent through the contact form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ContactMessage {
    pub name: String,
    #[validate(custom(function = "valid_email"))]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub message: String,
}

impl Record for ContactMessage {
    const KIND: RecordKind = RecordKind::ContactMessage;
}
