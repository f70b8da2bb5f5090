//! Infrastructure layer
//!
//! Adapters that implement the domain ports against real systems: Postgres
//! for invoices, Redis for cached pages, and the configuration loader.

pub mod cache;
pub mod config;
pub mod persistence;
