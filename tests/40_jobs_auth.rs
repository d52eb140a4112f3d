mod common;

use anyhow::Result;
use axum::http::{Method, StatusCode};
use serde_json::json;

fn new_job() -> serde_json::Value {
    json!({ "title": "new", "salary": 100000, "equity": "0.1", "company_handle": "c1" })
}

#[tokio::test]
async fn create_requires_token() -> Result<()> {
    let res = common::send(common::app(), Method::POST, "/jobs", None, Some(new_job())).await?;

    assert_eq!(res.status, StatusCode::UNAUTHORIZED);
    assert_eq!(res.body["code"], "UNAUTHORIZED");
    Ok(())
}

#[tokio::test]
async fn create_rejects_non_admin() -> Result<()> {
    let token = common::user_token();
    let res = common::send(common::app(), Method::POST, "/jobs", Some(&token), Some(new_job())).await?;

    assert_eq!(res.status, StatusCode::UNAUTHORIZED);
    Ok(())
}

#[tokio::test]
async fn garbage_token_is_treated_as_anonymous() -> Result<()> {
    let res = common::send(common::app(), Method::DELETE, "/jobs/1", Some("not-a-jwt"), None).await?;

    assert_eq!(res.status, StatusCode::UNAUTHORIZED);
    Ok(())
}

#[tokio::test]
async fn patch_and_delete_reject_non_admin() -> Result<()> {
    let token = common::user_token();

    let res = common::send(common::app(), Method::PATCH, "/jobs/1", Some(&token), Some(json!({"title": "x"}))).await?;
    assert_eq!(res.status, StatusCode::UNAUTHORIZED);

    let res = common::send(common::app(), Method::DELETE, "/jobs/1", Some(&token), None).await?;
    assert_eq!(res.status, StatusCode::UNAUTHORIZED);
    Ok(())
}

#[tokio::test]
async fn admin_create_with_invalid_body_is_bad_request() -> Result<()> {
    let token = common::admin_token();
    let body = json!({ "title": "new", "salary": "lots", "company_handle": "c1" });
    let res = common::send(common::app(), Method::POST, "/jobs", Some(&token), Some(body)).await?;

    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.body["code"], "VALIDATION_ERROR");
    Ok(())
}

#[tokio::test]
async fn admin_create_with_out_of_range_values_is_bad_request() -> Result<()> {
    let token = common::admin_token();
    let body = json!({ "title": "new", "salary": -1, "equity": "2", "company_handle": "c1" });
    let res = common::send(common::app(), Method::POST, "/jobs", Some(&token), Some(body)).await?;

    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.body["field_errors"]["salary"], "must be non-negative");
    assert_eq!(res.body["field_errors"]["equity"], "must be between 0 and 1");
    Ok(())
}

#[tokio::test]
async fn admin_patch_with_no_fields_is_bad_request() -> Result<()> {
    let token = common::admin_token();
    let res = common::send(common::app(), Method::PATCH, "/jobs/0", Some(&token), Some(json!({}))).await?;

    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.body["message"], "No data");
    Ok(())
}

#[tokio::test]
async fn admin_patch_rejects_immutable_fields() -> Result<()> {
    let token = common::admin_token();
    for body in [json!({"id": 5}), json!({"company_handle": "c2"}), json!({"title": "ok", "bogus": 1})] {
        let res = common::send(common::app(), Method::PATCH, "/jobs/1", Some(&token), Some(body.clone())).await?;
        assert_eq!(res.status, StatusCode::BAD_REQUEST, "body {}", body);
    }
    Ok(())
}

#[tokio::test]
async fn admin_patch_rejects_null_title() -> Result<()> {
    let token = common::admin_token();
    for body in [json!({"title": null}), json!({"title": null, "salary": 5})] {
        let res = common::send(common::app(), Method::PATCH, "/jobs/1", Some(&token), Some(body.clone())).await?;
        assert_eq!(res.status, StatusCode::BAD_REQUEST, "body {}", body);
        assert_eq!(res.body["code"], "VALIDATION_ERROR");
        assert_eq!(res.body["field_errors"]["title"], "must not be null");
    }
    Ok(())
}

#[tokio::test]
async fn non_numeric_id_gets_json_error() -> Result<()> {
    let res = common::send(common::app(), Method::GET, "/jobs/abc", None, None).await?;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.body["error"], true);
    assert_eq!(res.body["code"], "BAD_REQUEST");

    let token = common::admin_token();
    let res = common::send(common::app(), Method::PATCH, "/jobs/abc", Some(&token), Some(json!({"title": "x"}))).await?;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.body["error"], true);

    let res = common::send(common::app(), Method::DELETE, "/jobs/abc", Some(&token), None).await?;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.body["error"], true);
    Ok(())
}
