// src/presentation/http/extractors.rs
use axum::extract::FromRequest;

use super::error::HttpError;

/// `axum::Json` whose rejections are rendered as [`HttpError`] bodies instead
/// of plain-text responses.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(HttpError))]
pub struct JsonBody<T>(pub T);
