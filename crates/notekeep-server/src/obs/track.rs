//! Request metrics middleware.

use std::time::Instant;

use axum::{
    extract::{MatchedPath, Request, State},
    middleware::Next,
    response::Response,
};

use crate::app_state::AppState;
use crate::config::GroupBy;

/// Label used when no route matched in endpoint mode.
pub const UNMATCHED: &str = "<unmatched>";

pub async fn track_requests(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let method = req.method().to_string();
    let endpoint = match state.cfg().metrics.group_by {
        GroupBy::Endpoint => req
            .extensions()
            .get::<MatchedPath>()
            .map(|p| p.as_str().to_string())
            .unwrap_or_else(|| UNMATCHED.to_string()),
        GroupBy::Path => req.uri().path().to_string(),
    };

    let started = Instant::now();
    let resp = next.run(req).await;

    state
        .metrics()
        .observe_request(&method, &endpoint, resp.status().as_u16(), started.elapsed());
    resp
}
