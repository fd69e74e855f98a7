pub mod routes;

use axum::{
    routing::{get, post},
    Router,
};
use sqlx::SqlitePool;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;

use crate::web::routes::{root, schools};

/// Builds the full application router with the pool as shared state.
/// Factored out of `main` so tests can drive the HTTP surface directly.
pub fn router(pool: SqlitePool) -> Router {
    Router::new()
        .route("/", get(root::index_handler))
        .route("/addSchool", post(schools::add_school_handler))
        .route("/listSchools", get(schools::list_schools_handler))
        .layer(CorsLayer::permissive())
        .layer(CatchPanicLayer::new())
        .with_state(pool)
}
