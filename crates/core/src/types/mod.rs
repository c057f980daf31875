//! Core types for Flori Mart.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod email;
pub mod kind;
pub mod payment;

pub use email::{Email, EmailError};
pub use kind::RecordKind;
pub use payment::PaymentMethod;
