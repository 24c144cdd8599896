use axum::{Router, routing::get};
use tower_http::services::{ServeDir, ServeFile};

use recipebook_core::health::healthz;
use recipebook_core::middleware::{propagate_request_id_layer, request_id_layer, trace_layer};

use crate::handlers::pages::readyz;
use crate::state::AppState;

/// Pages served at fixed routes, relative to the site root.
pub const PAGES: [(&str, &str); 3] = [
    ("/", "index.html"),
    ("/add-recipe.html", "add-recipe.html"),
    ("/recipe-detail.html", "recipe-detail.html"),
];

pub fn build_router(state: AppState) -> Router {
    let root = state.site_root.as_path().to_path_buf();
    let mut router = Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz));
    // Pages
    for (path, file) in PAGES {
        router = router.route_service(path, ServeFile::new(root.join(file)));
    }
    router
        // Assets
        .fallback_service(ServeDir::new(root))
        .with_state(state)
        .layer(propagate_request_id_layer())
        .layer(trace_layer())
        .layer(request_id_layer())
}
