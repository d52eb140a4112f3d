use axum::{
    http::HeaderValue,
    middleware::from_fn,
    routing::{get, patch, post},
    Extension, Router,
};
use sqlx::PgPool;
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

use crate::config;
use crate::database::DbPool;
use crate::handlers::{elevated, public};
use crate::middleware::{authenticate_jwt, ensure_admin};

pub fn app(pool: PgPool) -> Router {
    Router::new()
        .route("/", get(public::root))
        .route("/health", get(public::health))
        .merge(job_routes())
        .layer(from_fn(authenticate_jwt))
        .layer(Extension(DbPool(pool)))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer(&config::config().security.cors_origins)),
        )
}

fn job_routes() -> Router {
    Router::new()
        .route(
            "/jobs",
            get(public::job_list).merge(post(elevated::job_create).route_layer(from_fn(ensure_admin))),
        )
        .route(
            "/jobs/:id",
            get(public::job_get).merge(
                patch(elevated::job_patch)
                    .delete(elevated::job_delete)
                    .route_layer(from_fn(ensure_admin)),
            ),
        )
}

/// Cross-origin requests are only answered for the configured origins. With
/// none configured the layer adds no CORS headers, so browsers refuse them.
fn cors_layer(allowed: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed
        .iter()
        .filter(|origin| !origin.is_empty())
        .filter_map(|origin| origin.parse().ok())
        .collect();

    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if origins.is_empty() {
        layer
    } else {
        layer.allow_origin(AllowOrigin::list(origins))
    }
}
