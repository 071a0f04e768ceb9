use axum::Router;
use tower_http::{
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::config::ServerConfig;

/// Serves the built frontend. Every unknown path gets `index.html`.
pub fn router(config: &ServerConfig) -> Router {
    let index = config.dist_dir.join("index.html");

    Router::new()
        .nest_service("/frontend/dist", ServeDir::new(&config.dist_dir))
        .fallback_service(ServeFile::new(index))
        .layer(TraceLayer::new_for_http())
}
