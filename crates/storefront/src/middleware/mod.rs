//! HTTP middleware for the storefront API.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (hub per request, HTTP transaction)
//! 2. CORS
//! 3. `TraceLayer` (`http_request` span)
//! 4. Request ID (recorded on the span above)

pub mod request_id;

pub use request_id::{REQUEST_ID_HEADER, request_id_middleware};
