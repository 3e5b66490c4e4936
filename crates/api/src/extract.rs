//! Body and query extractors that reject with the JSON error envelope.
//!
//! axum's own `Json` and `Query` reply to malformed input with plain text
//! (and `Json` with 422). These wrappers route the rejection through
//! [`AppError::BadRequest`] so every 4xx carries `{ error, code }`.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

/// `axum::Json` with [`AppError`] rejections.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// `axum::extract::Query` with [`AppError`] rejections.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct AppQuery<T>(pub T);
