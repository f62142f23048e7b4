use std::sync::Arc;
use std::time::Duration;

use auth_core::PasswordHasher;
use auth_core::TokenCodec;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::create_user::create_user;
use super::handlers::get_me::get_me;
use super::handlers::list_users::list_users;
use super::handlers::login::login;
use super::middleware::authenticate as auth_middleware;
use super::middleware::require_admin as admin_middleware;
use crate::domain::principal::ports::UserStore;
use crate::domain::principal::resolver::PrincipalResolver;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn UserStore>,
    pub password_hasher: Arc<PasswordHasher>,
    pub token_codec: Arc<TokenCodec>,
    pub resolver: Arc<PrincipalResolver>,
}

pub fn create_router(store: Arc<dyn UserStore>, token_codec: Arc<TokenCodec>) -> Router {
    let resolver = Arc::new(PrincipalResolver::new(
        Arc::clone(&token_codec),
        Arc::clone(&store),
    ));

    let state = AppState {
        store,
        password_hasher: Arc::new(PasswordHasher::new()),
        token_codec,
        resolver,
    };

    let public_routes = Router::new()
        .route("/api/auth/login", post(login))
        .route("/api/users", post(create_user));

    let protected_routes = Router::new()
        .route("/api/users/me", get(get_me))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    // route_layer wraps outside-in: authenticate runs first and inserts the
    // principal, require_admin then narrows it.
    let admin_routes = Router::new()
        .route("/api/admin/users", get(list_users))
        .route_layer(middleware::from_fn(admin_middleware))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .merge(admin_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
