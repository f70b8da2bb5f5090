//! Adapters layer
//!
//! Inbound adapters that translate HTTP requests into application use cases.

pub mod http;
