//! avalia-server library root.
//!
//! Exposes the router and its building blocks so that integration tests can
//! drive the HTTP surface without binding a socket.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod session;
pub mod state;

use axum::middleware as axum_mw;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use state::AppState;

/// Build the full router over `state`.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(routes::page::start))
        .route("/health", get(routes::health::health_check))
        .route("/schema", get(routes::schema::get_schema))
        .route("/sessions", post(routes::sessions::create_session))
        .route(
            "/sessions/{id}",
            get(routes::sessions::get_session).delete(routes::sessions::delete_session),
        )
        .route(
            "/sessions/{id}/fields/{field}",
            get(routes::fields::get_field).put(routes::fields::put_field),
        )
        .route("/sessions/{id}/submit", post(routes::document::submit))
        .route("/sessions/{id}/document", get(routes::document::download))
        .route("/sessions/{id}/form", get(routes::page::form_page))
        .layer(axum_mw::from_fn(middleware::audit::audit_log))
        .layer(cors)
        .with_state(state)
}
