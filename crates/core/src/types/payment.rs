//! Payment method chosen at checkout.

use serde::{Deserialize, Serialize};

/// How an order will be paid for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    /// Card payment.
    Card,
    /// Cash on delivery.
    #[default]
    Cod,
    /// Bank transfer.
    Bank,
}

impl PaymentMethod {
    /// The wire value for this method.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Card => "card",
            Self::Cod => "cod",
            Self::Bank => "bank",
        }
    }
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
