use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::delete;
use axum::routing::get;
use axum::routing::patch;
use axum::routing::post;
use axum::routing::put;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::auth::issue_token;
use super::handlers::auth::refresh_token;
use super::handlers::todos::create_todo;
use super::handlers::todos::delete_todo;
use super::handlers::todos::list_todos;
use super::handlers::todos::update_todo;
use super::handlers::users::create_user;
use super::handlers::users::delete_user;
use super::handlers::users::get_user;
use super::handlers::users::list_users;
use super::handlers::users::update_user;
use super::middleware::authenticate as auth_middleware;
use crate::domain::todo::service::TodoService;
use crate::domain::user::service::UserService;
use crate::outbound::repositories::todo::PostgresTodoRepository;
use crate::outbound::repositories::user::PostgresUserRepository;

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService<PostgresUserRepository>>,
    pub todo_service: Arc<TodoService<PostgresTodoRepository>>,
    pub authenticator: Arc<Authenticator>,
    pub jwt_expiration_minutes: i64,
}

pub fn create_router(
    user_service: Arc<UserService<PostgresUserRepository>>,
    todo_service: Arc<TodoService<PostgresTodoRepository>>,
    authenticator: Arc<Authenticator>,
    jwt_expiration_minutes: i64,
) -> Router {
    let state = AppState {
        user_service,
        todo_service,
        authenticator,
        jwt_expiration_minutes,
    };

    let public_routes = Router::new()
        .route("/auth/token", post(issue_token))
        .route("/users", post(create_user))
        .route("/users/:user_id", get(get_user));

    let protected_routes = Router::new()
        .route("/auth/refresh_token", post(refresh_token))
        .route("/users", get(list_users))
        .route("/users/:user_id", put(update_user))
        .route("/users/:user_id", delete(delete_user))
        .route("/todos", post(create_todo))
        .route("/todos", get(list_todos))
        .route("/todos/:todo_id", patch(update_todo))
        .route("/todos/:todo_id", delete(delete_todo))
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
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
