use axum::extract::{Extension, Json};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};

use crate::database::models::{JobUpdate, NewJob};
use crate::database::{DbPool, JobRepository};
use crate::error::ApiError;
use crate::handlers::JobId;
use crate::middleware::{ApiResponse, ApiResult, AuthUser};

fn parse_payload<T: DeserializeOwned>(payload: Value) -> Result<T, ApiError> {
    serde_json::from_value(payload).map_err(|e| ApiError::validation_error(e.to_string(), None))
}

/// POST /jobs - create a job posting
pub async fn create(
    Extension(DbPool(pool)): Extension<DbPool>,
    Extension(user): Extension<AuthUser>,
    Json(payload): Json<Value>,
) -> ApiResult<Value> {
    let new_job: NewJob = parse_payload(payload)?;
    new_job.validate()?;

    let job = JobRepository::new(pool).create(&new_job).await?;
    tracing::info!("Job {} created by {}", job.id, user.username);
    Ok(ApiResponse::created(json!({ "job": job })))
}

/// PATCH /jobs/:id - update any of title, salary, equity
pub async fn patch(
    JobId(id): JobId,
    Extension(DbPool(pool)): Extension<DbPool>,
    Json(payload): Json<Value>,
) -> ApiResult<Value> {
    let update: JobUpdate = parse_payload(payload)?;
    update.validate()?;

    let job = JobRepository::new(pool).update(id, &update.into_fields()).await?;
    Ok(ApiResponse::success(json!({ "job": job })))
}

/// DELETE /jobs/:id
pub async fn delete(JobId(id): JobId, Extension(DbPool(pool)): Extension<DbPool>) -> ApiResult<Value> {
    JobRepository::new(pool).remove(id).await?;
    Ok(ApiResponse::success(json!({ "deleted": id })))
}
