use axum::{
    extract::Request,
    http::{header::AUTHORIZATION, HeaderMap},
    middleware::Next,
    response::Response,
};

use crate::auth::{validate_jwt, Claims};
use crate::error::ApiError;

/// Authenticated user context extracted from JWT
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub username: String,
    pub is_admin: bool,
}

impl From<Claims> for AuthUser {
    fn from(claims: Claims) -> Self {
        Self {
            username: claims.username,
            is_admin: claims.is_admin,
        }
    }
}

/// Verify a bearer token when one is sent and attach its [`AuthUser`].
///
/// A missing or invalid token is not an error here; routes that need a user
/// check for the extension themselves.
pub async fn authenticate_jwt(headers: HeaderMap, mut request: Request, next: Next) -> Response {
    if let Some(token) = extract_jwt_from_headers(&headers) {
        match validate_jwt(&token) {
            Ok(claims) => {
                request.extensions_mut().insert(AuthUser::from(claims));
            }
            Err(e) => tracing::debug!("Ignoring bearer token: {}", e),
        }
    }
    next.run(request).await
}

/// Reject the request unless the authenticated user is an admin.
pub async fn ensure_admin(request: Request, next: Next) -> Result<Response, ApiError> {
    let user = request.extensions().get::<AuthUser>().cloned();
    match user {
        Some(user) if user.is_admin => Ok(next.run(request).await),
        Some(user) => {
            tracing::warn!("Non-admin user '{}' attempted {} {}", user.username, request.method(), request.uri());
            Err(ApiError::unauthorized("Unauthorized"))
        }
        None => Err(ApiError::unauthorized("Unauthorized")),
    }
}

/// Token from `Authorization: Bearer <token>`; the scheme's first letter may
/// be either case.
fn extract_jwt_from_headers(headers: &HeaderMap) -> Option<String> {
    let auth_str = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let token = auth_str
        .strip_prefix("Bearer ")
        .or_else(|| auth_str.strip_prefix("bearer "))?
        .trim();
    if token.is_empty() {
        None
    } else {
        Some(token.to_string())
    }
}
