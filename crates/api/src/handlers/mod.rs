//! Request handlers.
//!
//! Handlers parse the wire shape, delegate to `intake_core` and map errors
//! via [`crate::error::AppError`].

pub mod case_questions;
pub mod discovery;
pub mod requests;
