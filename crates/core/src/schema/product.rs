//! Catalog product.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::Record;
use super::checks::{not_blank, whole_number};
use crate::types::RecordKind;

/// A product in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Product {
    /// Product title. Never blank.
    #[validate(custom(function = "not_blank"))]
    pub title: String,
    /// Detailed description.
    #[serde(default)]
    pub description: Option<String>,
    /// Price in USD, `>= 0`.
    #[validate(range(min = 0.0))]
    pub price: f64,
    /// Image URLs, in display order.
    #[serde(default)]
    pub images: Vec<String>,
    /// Occasion category (e.g. "birthday").
    #[serde(default)]
    pub occasion: Option<String>,
    /// Style tag.
    #[serde(default)]
    pub style: Option<String>,
    /// Dominant color.
    #[serde(default)]
    pub color: Option<String>,
    /// Available size options.
    #[serde(default = "Product::default_sizes")]
    pub sizes: Vec<String>,
    /// Featured on the homepage.
    #[serde(default)]
    pub is_featured: bool,
    /// Average rating in `[0, 5]`.
    #[serde(default)]
    #[validate(range(min = 0.0, max = 5.0))]
    pub rating: f64,
    /// Number of ratings.
    #[serde(default, deserialize_with = "whole_number")]
    pub rating_count: u32,
}

impl Product {
    /// Sizes offered when none are given.
    #[must_use]
    pub fn default_sizes() -> Vec<String> {
        ["S", "M", "L"].map(String::from).to_vec()
    }
}

impl Record for Product {
    const KIND: RecordKind = RecordKind::Product;
}
