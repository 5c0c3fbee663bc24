// CORS policy for the browser frontend: any origin, method and header.
// Credentials stay disabled, which is also what permits the wildcard origin.

use axum::Router;
use tower_http::cors::{Any, CorsLayer};

pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
        .allow_credentials(false)
}

pub fn apply_cors(router: Router) -> Router {
    router.layer(cors_layer())
}
