// Two security tiers:
// Public (no token) → Elevated (admin token, enforced by `ensure_admin`)
pub mod public;
pub mod elevated;

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use crate::error::ApiError;

/// `:id` path segment of the job routes. A non-integer id is answered with
/// the usual JSON error body instead of axum's plain-text rejection.
pub struct JobId(pub i32);

#[async_trait]
impl<S> FromRequestParts<S> for JobId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i32>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| ApiError::bad_request(format!("Invalid job id: {}", rejection.body_text())))?;
        Ok(JobId(id))
    }
}
