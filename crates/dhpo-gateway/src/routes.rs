//! Route table and middleware.

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the gateway router.
///
/// Paths and methods mirror the DHPO operations one to one, plus a
/// health probe that never touches the backend.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/get-new-transactions", get(handlers::get_new_transactions))
        .route("/get-new-prior-auth", get(handlers::get_new_prior_authorizations))
        .route("/upload-transaction", post(handlers::upload_transaction))
        .route("/download-transaction-file", get(handlers::download_transaction_file))
        .route("/set-transaction-downloaded", post(handlers::set_transaction_downloaded))
        .route("/check-new-prior-auth", get(handlers::check_new_prior_authorizations))
        .route("/search-transactions", get(handlers::search_transactions))
        .route("/health", get(handlers::health))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
