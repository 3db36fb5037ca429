//! Request extractors that reject with the application error contract.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::response::{IntoResponse, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::AppError;

/// JSON body extractor.
///
/// Same as [`axum::Json`] but a structurally invalid body (missing or
/// mistyped fields, malformed JSON) rejects with 400 and the standard
/// `{error, code}` body instead of axum's default 422. Structural
/// errors therefore surface before business validation runs.
pub struct Json<T>(pub T);

impl<S, T> FromRequest<S> for Json<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let axum::Json(value) = axum::Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection: JsonRejection| AppError::BadRequest(rejection.body_text()))?;
        Ok(Json(value))
    }
}

// Responses serialize exactly as axum's Json, so handlers can use one
// type for both directions.
impl<T: Serialize> IntoResponse for Json<T> {
    fn into_response(self) -> Response {
        axum::Json(self.0).into_response()
    }
}
