use axum::{
    middleware::Next,
    response::{IntoResponse, Response},
    extract::{Request, State},
    body::Body,
};
use tower_sessions::Session;
use crate::config::Config;
use crate::errors::AppError;
use crate::services::StateStore;

// Routes that act on the user record. Closing the channel dialog is not one.
fn registered_only(path: &str) -> bool {
    match path {
        "/channels" | "/orders" | "/tap" | "/modals/channel/open" => true,
        _ => path
            .strip_prefix("/tasks/")
            .and_then(|rest| rest.strip_suffix("/complete"))
            .is_some_and(|id| !id.is_empty() && !id.contains('/')),
    }
}

pub async fn require_user(
    State((store, _)): State<(StateStore, Config)>,
    session: Session,
    req: Request<Body>,
    next: Next,
) -> Response {
    let path = req.uri().path().to_owned();

    if !registered_only(&path) {
        return next.run(req).await;
    }

    match store.load(&session).await {
        Ok(state) if state.is_registered() => next.run(req).await,
        Ok(_) => {
            tracing::warn!("Unregistered session tried {}", path);
            AppError::NotRegistered("Сначала зарегистрируйтесь".into()).into_response()
        }
        Err(e) => e.into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guards_exact_routes_only() {
        for path in ["/channels", "/orders", "/tap", "/tasks/1/complete", "/modals/channel/open"] {
            assert!(registered_only(path), "{}", path);
        }
        for path in [
            "/",
            "/channelsX",
            "/orders/1",
            "/tasks/",
            "/tasks//complete",
            "/tasks/1/2/complete",
            "/modals/channel/close",
        ] {
            assert!(!registered_only(path), "{}", path);
        }
    }
}
