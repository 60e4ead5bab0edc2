//! Form submission boundary: JSON bodies sent by the UI pages.
//!
//! A browser form posts `null` or `""` for a field the user left empty, and
//! either must surface as a missing field rather than a body rejection.

use axum::extract::FromRequest;
use serde::{Deserialize, Deserializer};

use crate::errors::AppError;

/// `Json` extractor whose rejections come back as `AppError::Validation`.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct FormJson<T>(pub T);

/// Text field where `null` reads as empty.
pub fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
