//! Request validation engine.
//!
//! Pure functions over a [`RequestDraft`](crate::request::RequestDraft):
//! whether the current step may advance, the reasons it may not, and the
//! advisory banners that apply. Nothing here performs I/O.

pub mod discovery;
pub mod engine;
pub mod exhibit;
pub mod result;

pub use engine::{can_continue, evaluate, evaluate_fields};
pub use result::{Advisory, AdvisoryCode, ValidationResult};
