mod common;

use anyhow::Result;
use axum::http::{Method, StatusCode};

#[tokio::test]
async fn health_endpoint_responds() -> Result<()> {
    let res = common::send(common::app(), Method::GET, "/health", None, None).await?;

    // No database behind the test pool, so degraded is the expected answer
    assert!(
        res.status == StatusCode::OK || res.status == StatusCode::SERVICE_UNAVAILABLE,
        "unexpected status: {}",
        res.status
    );
    assert!(res.body.get("success").is_some(), "missing success: {}", res.body);
    Ok(())
}

#[tokio::test]
async fn root_describes_service() -> Result<()> {
    let res = common::send(common::app(), Method::GET, "/", None, None).await?;

    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["success"], true);
    assert_eq!(res.body["data"]["name"], "Jobly API");
    Ok(())
}
