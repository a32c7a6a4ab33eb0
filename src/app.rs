use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/dashboard", get(handlers::get_dashboard))
        .route(
            "/api/clients",
            get(handlers::list_clients).post(handlers::add_client),
        )
        .route(
            "/api/clients/:id",
            get(handlers::get_client)
                .put(handlers::update_client)
                .delete(handlers::delete_client),
        )
        .route("/api/clients/:id/paid", post(handlers::mark_paid))
        .with_state(state)
}
