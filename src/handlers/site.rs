use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use crate::state::AppState;

pub async fn index_fallback(State(state): State<Arc<AppState>>) -> Response {
    let index = state.config.index_file();
    match tokio::fs::read_to_string(&index).await {
        Ok(page) => Html(page).into_response(),
        Err(e) => {
            tracing::debug!(error = %e, path = %index.display(), "entry page unavailable");
            (StatusCode::NOT_FOUND, "Not found").into_response()
        }
    }
}
