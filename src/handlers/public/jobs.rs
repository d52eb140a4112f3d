use std::collections::HashMap;

use axum::extract::{Extension, Query};
use serde_json::{json, Value};

use crate::database::{DbPool, JobRepository};
use crate::error::ApiError;
use crate::filter::{validate_filter_keys, FilterCriteria};
use crate::handlers::JobId;
use crate::middleware::{ApiResponse, ApiResult};

/// GET /jobs - list jobs, optionally filtered by `title`, `minSalary` and
/// `hasEquity`
pub async fn list(
    Query(query): Query<HashMap<String, String>>,
    Extension(DbPool(pool)): Extension<DbPool>,
) -> ApiResult<Value> {
    if !validate_filter_keys(query.keys()) {
        return Err(ApiError::not_found("This includes an invalid query string"));
    }
    let criteria = criteria_from_query(&query)?;

    let jobs = JobRepository::new(pool).find_all(criteria).await?;
    Ok(ApiResponse::success(json!({ "jobs": jobs })))
}

/// GET /jobs/:id
pub async fn get(JobId(id): JobId, Extension(DbPool(pool)): Extension<DbPool>) -> ApiResult<Value> {
    let job = JobRepository::new(pool).get(id).await?;
    Ok(ApiResponse::success(json!({ "job": job })))
}

/// Coerce raw query-string values into typed criteria. `hasEquity` only
/// counts when it is the literal `"true"`.
pub fn criteria_from_query(query: &HashMap<String, String>) -> Result<FilterCriteria, ApiError> {
    let min_salary = query
        .get("minSalary")
        .map(|raw| {
            raw.trim()
                .parse::<i64>()
                .map_err(|_| ApiError::bad_request(format!("minSalary must be an integer, got '{}'", raw)))
        })
        .transpose()?;

    Ok(FilterCriteria {
        title: query.get("title").cloned(),
        min_salary,
        has_equity: query.get("hasEquity").map(|v| v == "true"),
    })
}
