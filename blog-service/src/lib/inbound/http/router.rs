use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::routing::put;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::comments::create_comment;
use super::handlers::comments::delete_comment;
use super::handlers::comments::list_comments;
use super::handlers::comments::update_comment;
use super::handlers::posts::create_post;
use super::handlers::posts::delete_post;
use super::handlers::posts::get_post;
use super::handlers::posts::list_posts;
use super::handlers::posts::list_user_posts;
use super::handlers::posts::update_post;
use super::handlers::sign_in::sign_in;
use super::handlers::sign_up::sign_up;
use super::middleware::authenticate;
use crate::domain::comment::ports::CommentServicePort;
use crate::domain::post::ports::PostServicePort;
use crate::domain::user::ports::AuthServicePort;

/// Shared handler state: one handle per service.
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<dyn AuthServicePort>,
    pub post_service: Arc<dyn PostServicePort>,
    pub comment_service: Arc<dyn CommentServicePort>,
}

pub fn create_router(
    auth_service: Arc<dyn AuthServicePort>,
    post_service: Arc<dyn PostServicePort>,
    comment_service: Arc<dyn CommentServicePort>,
) -> Router {
    let state = AppState {
        auth_service,
        post_service,
        comment_service,
    };

    let auth = || middleware::from_fn_with_state(state.clone(), authenticate);

    // Reads are public; writes on the same paths require a session.
    let auth_routes = Router::new()
        .route("/auth/sign-up", post(sign_up))
        .route("/auth/sign-in", post(sign_in));

    let api_routes = Router::new()
        .route(
            "/api/posts",
            get(list_posts).merge(post(create_post).route_layer(auth())),
        )
        .route(
            "/api/posts/:post_id",
            get(get_post).merge(put(update_post).delete(delete_post).route_layer(auth())),
        )
        .route("/api/users/:user_id/posts", get(list_user_posts))
        .route(
            "/api/posts/:post_id/comments",
            get(list_comments).merge(post(create_comment).route_layer(auth())),
        )
        .route(
            "/api/posts/:post_id/comments/:comment_id",
            put(update_comment)
                .delete(delete_comment)
                .route_layer(auth()),
        );

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
        .merge(auth_routes)
        .merge(api_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
