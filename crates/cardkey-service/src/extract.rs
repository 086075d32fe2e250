//! Request extractors.

use axum::extract::FromRequest;

use crate::error::ApiError;

/// A JSON body whose rejections render through [`ApiError`], so a missing
/// field or a non-JSON body still gets the error envelope.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);
