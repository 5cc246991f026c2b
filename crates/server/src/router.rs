use super::{handlers, state::AppState};
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

/// Creates the Axum router with all the application routes.
pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health_check))
        .route("/generate-sql", post(handlers::generate_sql_handler))
        .route("/execute-sql", post(handlers::execute_sql_handler))
        .route("/query", post(handlers::query_handler))
        .route("/new-session", post(handlers::new_session_handler))
        .route(
            "/check-and-execute",
            post(handlers::check_and_execute_handler),
        )
        .route("/history", post(handlers::history_handler))
        .with_state(app_state)
        .layer(TraceLayer::new_for_http())
}
