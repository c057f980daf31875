//! Checkout order and its nested line items and shipping address.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::Record;
use super::checks::{valid_email, whole_number};
use crate::types::{PaymentMethod, RecordKind};

/// One line of an order. Has no identity of its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct OrderItem {
    pub product_id: String,
    pub title: String,
    /// Unit price, `>= 0`.
    #[validate(range(min = 0.0))]
    pub price: f64,
    /// At least 1.
    #[serde(deserialize_with = "whole_number")]
    #[validate(range(min = 1))]
    pub quantity: u32,
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

/// Shipping address attached to an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Address {
    pub full_name: String,
    pub phone: String,
    pub street: String,
    pub city: String,
    #[serde(default)]
    pub state: Option<String>,
    pub postal_code: String,
    pub country: String,
}

/// A placed order.
///
/// Totals are stored as submitted; they are range-checked but not
/// recomputed from the line items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Order {
    /// Never empty.
    #[validate(length(min = 1, code = "empty", message = "nothing to order"), nested)]
    pub items: Vec<OrderItem>,
    #[validate(range(min = 0.0))]
    pub subtotal: f64,
    #[serde(default)]
    #[validate(range(min = 0.0))]
    pub delivery_fee: f64,
    #[validate(range(min = 0.0))]
    pub total: f64,
    #[validate(custom(function = "valid_email"))]
    pub email: String,
    #[validate(nested)]
    pub shipping_address: Address,
    #[serde(default)]
    pub payment_method: PaymentMethod,
    #[serde(default)]
    pub notes: Option<String>,
}

impl Record for Order {
    const KIND: RecordKind = RecordKind::Order;
}
