pub mod assessments;
pub mod categories;
pub mod health;
pub mod reports;

use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::{get, post};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

use crate::middleware;
use crate::state::AppState;

/// Build the API router.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health::health_check))
        // Question bank (public, static)
        .route("/categories", get(categories::list_categories))
        .route("/categories/{id}", get(categories::get_category_detail))
        // Scoring and export; nothing is persisted
        .route("/assessments", post(assessments::create_assessment))
        .route("/reports", post(reports::export_report))
        .layer(
            ServiceBuilder::new()
                .layer(axum_mw::from_fn(middleware::access_log::access_log))
                .layer(cors),
        )
        .with_state(state)
}
