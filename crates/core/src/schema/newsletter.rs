//! Newsletter signup.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::Record;
use super::checks::valid_email;
use crate::types::RecordKind;

/// A newsletter subscription.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Newsletter {
    #[validate(custom(function = "valid_email"))]
    pub email: String,
    /// Where the signup came from (e.g. "footer").
    #[serde(default)]
    pub source: Option<String>,
}

impl Record for Newsletter {
    const KIND: RecordKind = RecordKind::Newsletter;
}
