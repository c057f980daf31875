//! Flori Mart Core - Record schemas and validation.
//!
//! This crate provides the types shared by the storefront API and its tests:
//! - Record schemas for every persisted record kind
//! - Validation of raw JSON input into typed records
//! - Newtype wrappers such as [`Email`]
//!
//! # Architecture
//!
//! The core crate contains only types and traits - no I/O, no database access,
//! no HTTP handling. Turning a request body into a record is a pure function;
//! persistence lives in the `storefront` crate.
//!
//! # Modules
//!
//! - [`types`] - Email addresses, record kinds, payment methods
//! - [`schema`] - Record definitions and their field-level validation

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod schema;
pub mod types;

pub use schema::{
    Address, ContactMessage, Newsletter, Order, OrderItem, Product, Record, Review, Rule,
    ValidationError, ValidationErrors,
};
pub use types::*;
