//! Flori Mart storefront library.
//!
//! JSON API over a document store: catalog, reviews, newsletter signups,
//! contact messages, and orders. Exposed as a library so the router can be
//! driven in tests without binding a socket.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod routes;
pub mod state;
