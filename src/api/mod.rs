mod handlers;

use axum::{
    http::{HeaderValue, Method},
    routing::{delete, get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use crate::config::ServerConfig;
use crate::directory::Directory;

/// Router with default configuration: permissive CORS and static files from
/// `./static`.
pub fn create_router(directory: Directory) -> Router {
    create_router_with_config(directory, &ServerConfig::default())
}

pub fn create_router_with_config(directory: Directory, config: &ServerConfig) -> Router {
    let mut app = Router::new()
        .route("/", get(handlers::root))
        .route("/activities", get(handlers::list_activities))
        .route("/activities/{name}/signup", post(handlers::signup))
        .route("/activities/{name}/unregister", delete(handlers::unregister))
        .route("/health", get(handlers::health));

    if let Some(dir) = &config.static_dir {
        app = app.nest_service("/static", ServeDir::new(dir));
    }

    app.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(cors_layer(config.cors_origins.as_deref())),
    )
    .with_state(directory)
}

fn cors_layer(origins: Option<&[String]>) -> CorsLayer {
    match origins {
        None => CorsLayer::permissive(),
        Some(origins) => {
            let allowed = origins.iter().filter_map(|origin| {
                origin
                    .parse::<HeaderValue>()
                    .inspect_err(|_| tracing::warn!("Ignoring invalid CORS origin: {}", origin))
                    .ok()
            });
            CorsLayer::new()
                .allow_origin(AllowOrigin::list(allowed))
                .allow_methods([Method::GET, Method::POST, Method::DELETE])
        }
    }
}
