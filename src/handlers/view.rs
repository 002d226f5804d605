use axum::{
    extract::{Path, Query, State},
    response::{Html, IntoResponse, Response, Redirect},
};
use chrono::Utc;
use tower_sessions::Session;
use crate::config::{Config, DashboardMode};
use crate::errors::AppResult;
use crate::models::{Notification, PageQuery, Section};
use crate::services::StateStore;
use crate::views;

/// Renders whichever view the session is on and pops its pending toast.
pub async fn serve_index(
    State((store, config)): State<(StateStore, Config)>,
    session: Session,
    Query(query): Query<PageQuery>,
) -> AppResult<Response> {
    let page = store
        .update(&session, |state| {
            if config.dashboard.mode == DashboardMode::Energy && state.is_registered() {
                state.energy_at(&config.energy, Utc::now());
            }

            let toast = state
                .take_notification()
                .or_else(|| query.error.map(Notification::error));

            tracing::debug!("Rendering {:?} view", state.view);
            views::render_page(state, toast.as_ref(), &config)
        })
        .await?;

    Ok(Html(page).into_response())
}

pub async fn navigate_to_section(
    State((store, _)): State<(StateStore, Config)>,
    session: Session,
    Path(anchor): Path<String>,
) -> AppResult<Response> {
    let Some(section) = Section::from_anchor(&anchor) else {
        tracing::warn!("Unknown section: {}", anchor);
        return Ok(Redirect::to("/").into_response());
    };

    store
        .update(&session, |state| state.navigate_to_section(section))
        .await?;

    Ok(Redirect::to(&format!("/#{}", section.anchor())).into_response())
}

pub async fn show_landing(
    State((store, _)): State<(StateStore, Config)>,
    session: Session,
) -> AppResult<Response> {
    store
        .update(&session, |state| state.show_landing())
        .await?;
    Ok(Redirect::to("/").into_response())
}

// Without a user the dashboard is replaced by the registration dialog.
pub async fn show_dashboard(
    State((store, _)): State<(StateStore, Config)>,
    session: Session,
) -> AppResult<Response> {
    store
        .update(&session, |state| {
            if state.show_dashboard().is_err() {
                state.set_register_modal(true);
            }
        })
        .await?;
    Ok(Redirect::to("/").into_response())
}

pub async fn toggle_view(
    State((store, _)): State<(StateStore, Config)>,
    session: Session,
) -> AppResult<Response> {
    store
        .update(&session, |state| {
            if state.toggle_view().is_err() {
                state.set_register_modal(true);
            }
        })
        .await?;
    Ok(Redirect::to("/").into_response())
}

pub async fn open_register_modal(
    State((store, _)): State<(StateStore, Config)>,
    session: Session,
) -> AppResult<Response> {
    store
        .update(&session, |state| state.set_register_modal(true))
        .await?;
    Ok(Redirect::to("/").into_response())
}

pub async fn close_register_modal(
    State((store, _)): State<(StateStore, Config)>,
    session: Session,
) -> AppResult<Response> {
    store
        .update(&session, |state| state.set_register_modal(false))
        .await?;
    Ok(Redirect::to("/").into_response())
}

pub async fn open_channel_modal(
    State((store, _)): State<(StateStore, Config)>,
    session: Session,
) -> AppResult<Response> {
    store
        .update(&session, |state| {
            let outcome = state.set_add_channel_modal(true);
            if let Err(e) = outcome {
                state.notify(Err(e));
            }
        })
        .await?;
    Ok(Redirect::to("/").into_response())
}

pub async fn close_channel_modal(
    State((store, _)): State<(StateStore, Config)>,
    session: Session,
) -> AppResult<Response> {
    store
        .update(&session, |state| {
            // closing never fails
            let _ = state.set_add_channel_modal(false);
        })
        .await?;
    Ok(Redirect::to("/").into_response())
}

pub async fn toggle_mobile_menu(
    State((store, _)): State<(StateStore, Config)>,
    session: Session,
) -> AppResult<Response> {
    store
        .update(&session, |state| state.toggle_mobile_menu())
        .await?;
    Ok(Redirect::to("/").into_response())
}
