use axum::extract::State;
use axum::http::StatusCode;

use crate::state::AppState;

/// Handler for `GET /readyz`: ready once the site root can be served.
pub async fn readyz(State(state): State<AppState>) -> StatusCode {
    match tokio::fs::metadata(state.site_root.as_path()).await {
        Ok(meta) if meta.is_dir() => StatusCode::OK,
        _ => {
            tracing::warn!(site_root = %state.site_root.display(), "site root unavailable");
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}
