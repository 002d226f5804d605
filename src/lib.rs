pub mod config;
pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod views;

use axum::{
    routing::{get, post},
    Router,
    extract::DefaultBodyLimit,
    middleware::from_fn_with_state,
};
use tower::ServiceBuilder;
use tower_http::{
    services::ServeDir,
    limit::RequestBodyLimitLayer,
};
use tower_sessions::{MemoryStore, SessionManagerLayer};
use tower_sessions::cookie::SameSite;
use crate::config::Config;
use crate::services::StateStore;

/// Builds the application router. Sessions and their state live in memory
/// owned by the returned router, so clones of it share sessions.
pub fn build_router(config: Config) -> Router {
    let state_store = StateStore::new();
    let session_store = MemoryStore::default();
    let session_layer = SessionManagerLayer::new(session_store)
        .with_secure(config.session.secure)
        .with_same_site(SameSite::Lax)
        .with_name(config.session.cookie_name.clone());

    Router::new()
        // Pages
        .route("/", get(handlers::serve_index))
        .route("/sections/:id", get(handlers::navigate_to_section))
        .route("/view/landing", get(handlers::show_landing))
        .route("/view/dashboard", get(handlers::show_dashboard))
        .route("/view/toggle", get(handlers::toggle_view))
        .route("/menu/toggle", get(handlers::toggle_mobile_menu))

        // Dialogs
        .route("/modals/register/open", get(handlers::open_register_modal))
        .route("/modals/register/close", get(handlers::close_register_modal))
        .route("/modals/channel/open", get(handlers::open_channel_modal))
        .route("/modals/channel/close", get(handlers::close_channel_modal))

        // Economy
        .route("/register", post(handlers::handle_register))
        .route("/channels", post(handlers::add_channel))
        .route("/tasks/:id/complete", post(handlers::complete_task))
        .route("/orders", post(handlers::order_subscribers))
        .route("/tap", post(handlers::tap))
        .route("/api/state", get(handlers::get_state))

        // Static files
        .nest_service("/static", ServeDir::new(&config.server.static_dir))

        .layer(
            ServiceBuilder::new()
                .layer(session_layer)
                .layer(from_fn_with_state(
                    (state_store.clone(), config.clone()),
                    middleware::require_user,
                )),
        )

        // Only small form posts are expected
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(config.limits.max_body_bytes))

        .with_state((state_store, config))
}
