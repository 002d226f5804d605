use axum::{
    extract::State,
    response::{IntoResponse, Json, Response},
};
use chrono::Utc;
use serde_json::json;
use tower_sessions::Session;
use crate::config::{Config, DashboardMode};
use crate::errors::AppResult;
use crate::orchestrator::View;
use crate::services::StateStore;

/// JSON snapshot polled by the page script while the energy dashboard is open.
/// Read only: regeneration is computed on a copy and never written back.
pub async fn get_state(
    State((store, config)): State<(StateStore, Config)>,
    session: Session,
) -> AppResult<Response> {
    let mut state = store.load(&session).await?;

    let energy = if config.dashboard.mode == DashboardMode::Energy && state.is_registered() {
        let meter = state.energy_at(&config.energy, Utc::now());
        Some(json!({
            "current": meter.energy,
            "max": config.energy.max,
            "percent": meter.percent(&config.energy),
        }))
    } else {
        None
    };

    let view = match state.view {
        View::Landing => "landing",
        View::Dashboard => "dashboard",
    };

    let response = json!({
        "view": view,
        "user": state.user,
        "energy": energy,
    });

    tracing::trace!("Sending state snapshot: {:?}", response);
    Ok(Json(response).into_response())
}
