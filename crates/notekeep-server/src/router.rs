//! Axum router wiring.
//!
//! Note API plus ops endpoints. When metrics are enabled every route (and the
//! 404 fallback) is wrapped by the request tracking middleware and `/metrics`
//! is mounted.

use axum::{
    middleware,
    routing::{delete, get},
    Router,
};

use crate::{app_state::AppState, notes, obs, ops};

pub fn build_router(state: AppState) -> Router {
    let mut router = Router::new()
        .route("/", get(notes::index))
        .route("/notes", get(notes::list_notes).post(notes::create_note))
        .route("/notes/:index", delete(notes::delete_note))
        .route("/healthz", get(ops::healthz))
        .route("/readyz", get(ops::readyz));

    if state.cfg().metrics.enabled {
        router = router
            .route("/metrics", get(ops::metrics))
            .layer(middleware::from_fn_with_state(
                state.clone(),
                obs::track::track_requests,
            ));
    }

    router.with_state(state)
}
