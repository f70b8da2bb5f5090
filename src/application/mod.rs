//! Application layer
//!
//! Form actions that turn raw submissions into domain operations and
//! report the outcome back as a redirect or a form state.

pub mod invoice;
