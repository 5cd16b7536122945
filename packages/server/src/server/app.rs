//! Application setup and server configuration.

use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post},
    Extension, Router,
};
use sqlx::PgPool;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::domains::auth::JwtService;
use crate::kernel::ServerDeps;
use crate::server::middleware::jwt_auth_middleware;
use crate::server::routes::{
    create_course_handler, enroll_handler, expand_course_handler, get_course_handler,
    health_handler, list_courses_handler, list_enrollments_handler,
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub deps: Arc<ServerDeps>,
    pub jwt_service: Arc<JwtService>,
}

/// Build the Axum application router
pub fn build_app(db_pool: PgPool, deps: Arc<ServerDeps>, jwt_service: Arc<JwtService>) -> Router {
    let state = AppState {
        db_pool,
        deps,
        jwt_service: jwt_service.clone(),
    };

    Router::new()
        .route("/health", get(health_handler))
        .route(
            "/api/courses",
            post(create_course_handler).get(list_courses_handler),
        )
        .route("/api/courses/:cid", get(get_course_handler))
        .route("/api/courses/:cid/content", post(expand_course_handler))
        .route(
            "/api/enrollments",
            post(enroll_handler).get(list_enrollments_handler),
        )
        .layer(middleware::from_fn(move |request, next| {
            jwt_auth_middleware(jwt_service.clone(), request, next)
        }))
        .layer(Extension(state))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
