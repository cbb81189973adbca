pub mod error;
pub mod routes;

use axum::{
    response::Redirect,
    routing::{get, get_service, post},
    Router,
};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::registry::SharedRegistry;

/// Build the full application router around a shared registry.
pub fn app(registry: SharedRegistry) -> Router {
    Router::new()
        .route("/", get(|| async { Redirect::to("/static/index.html") }))
        .route("/health", get(routes::health_handler))
        .route("/activities", get(routes::activities::activities_handler))
        .route(
            "/activities/:name",
            get(routes::activity::activity_detail_handler),
        )
        .route(
            "/activities/:name/participants",
            get(routes::activity::participants_handler),
        )
        .route(
            "/activities/:name/schedule",
            get(routes::activity::schedule_handler),
        )
        .route(
            "/activities/:name/description",
            get(routes::activity::description_handler),
        )
        .route(
            "/activities/:name/max_participants",
            get(routes::activity::max_participants_handler),
        )
        .route(
            "/activities/:name/current_participants",
            get(routes::activity::current_participants_handler),
        )
        .route(
            "/activities/:name/signup",
            post(routes::activity::signup_handler),
        )
        // Static front-end
        .nest_service(
            "/static",
            get_service(ServeDir::new("static")).layer(SetResponseHeaderLayer::if_not_present(
                CACHE_CONTROL,
                HeaderValue::from_static("no-store"),
            )),
        )
        // Layers
        .layer(CatchPanicLayer::new())
        // State
        .with_state(registry)
}
