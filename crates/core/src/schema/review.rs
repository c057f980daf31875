//! Product review.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::Record;
use super::checks::whole_number;
use crate::types::RecordKind;

/// A customer review of a product.
///
/// `product_id` refers to a product's identifier by convention; it is not
/// checked against the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Review {
    pub product_id: String,
    pub name: String,
    /// Star rating, 1 through 5.
    #[serde(deserialize_with = "whole_number")]
    #[validate(range(min = 1, max = 5))]
    pub rating: u8,
    #[serde(default)]
    pub comment: Option<String>,
}

impl Record for Review {
    const KIND: RecordKind = RecordKind::Review;
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::{Value, json};

    use super::*;
    use crate::schema::{Rule, ValidationErrors};

    fn review(rating: Value) -> Result<Review, ValidationErrors> {
        Review::from_json(json!({
            "product_id": "65a1f0c2e4b0a1b2c3d4e5f6",
            "name": "Ada",
            "rating": rating,
            "comment": "Lovely"
        }))
    }

    #[test]
    fn test_rating_edges_accepted() {
        assert_eq!(review(json!(1)).unwrap().rating, 1);
        assert_eq!(review(json!(5)).unwrap().rating, 5);
        assert_eq!(review(json!(4.0)).unwrap().rating, 4);
    }

    #[test]
    fn test_rating_outside_range_rejected() {
        for bad in [json!(0), json!(6), json!(-1), json!(300)] {
            let errors = review(bad).unwrap_err();
            assert_eq!(errors.rule_for("rating"), Some(Rule::OutOfRange));
        }
    }

    #[test]
    fn test_fractional_rating_rejected() {
        let errors = review(json!(4.5)).unwrap_err();
        assert_eq!(errors.rule_for("rating"), Some(Rule::WrongType));
    }

    #[test]
    fn test_required_fields() {
        let errors = Review::from_json(json!({"name": "Ada", "rating": 3})).unwrap_err();
        assert_eq!(errors.rule_for("product_id"), Some(Rule::Missing));
        assert!(!errors.cites("comment"));
    }
}
