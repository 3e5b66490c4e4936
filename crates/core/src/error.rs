/// Errors raised by intake rules.
///
/// Incomplete drafts are not errors; they are reported through
/// `ValidationResult`. This is for operations that refuse their input.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    Validation(String),
}
