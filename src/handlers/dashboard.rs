use axum::{
    extract::{Form, Path, State},
    response::{IntoResponse, Response, Redirect},
};
use chrono::Utc;
use tower_sessions::Session;
use crate::config::Config;
use crate::errors::{ActionError, AppResult};
use crate::models::{find_task, ChannelForm};
use crate::services::StateStore;

pub async fn add_channel(
    State((store, _)): State<(StateStore, Config)>,
    session: Session,
    Form(channel_form): Form<ChannelForm>,
) -> AppResult<Response> {
    tracing::info!("Adding channel: {:?}", channel_form.channel_link);

    store
        .update(&session, |state| {
            let outcome = state.add_channel(channel_form.channel_link);
            if let Some(user) = &state.user {
                tracing::debug!("User {} channels: {:?}", user.username, user.channels);
            }
            state.notify(outcome);
        })
        .await?;

    Ok(Redirect::to("/").into_response())
}

pub async fn complete_task(
    State((store, _)): State<(StateStore, Config)>,
    session: Session,
    Path(task_id): Path<u32>,
) -> AppResult<Response> {
    tracing::info!("Completing task {}", task_id);

    store
        .update(&session, |state| {
            let outcome = match find_task(task_id) {
                Some(task) => state.complete_task(task),
                None => {
                    tracing::warn!("Task {} is not in the catalog", task_id);
                    Err(ActionError::UnknownTask(task_id))
                }
            };
            if let Some(user) = &state.user {
                tracing::debug!("Balance of {} is now {}", user.username, user.balance);
            }
            state.notify(outcome);
        })
        .await?;

    Ok(Redirect::to("/").into_response())
}

pub async fn order_subscribers(
    State((store, config)): State<(StateStore, Config)>,
    session: Session,
) -> AppResult<Response> {
    tracing::info!("Subscriber order requested");

    store
        .update(&session, |state| {
            let outcome = state.order_subscribers(&config.economy);
            match &outcome {
                Ok(_) => tracing::info!(
                    "Order accepted: {} subscribers for {} points",
                    config.economy.subscribers_per_order,
                    config.economy.order_cost
                ),
                Err(e) => tracing::info!("Order rejected: {}", e),
            }
            state.notify(outcome);
        })
        .await?;

    Ok(Redirect::to("/").into_response())
}

// Successful taps produce no toast, only the new balance on the next render.
pub async fn tap(
    State((store, config)): State<(StateStore, Config)>,
    session: Session,
) -> AppResult<Response> {
    store
        .update(&session, |state| {
            match state.tap(&config.economy, &config.energy, Utc::now()) {
                Ok(balance) => tracing::debug!("Tap accepted, balance {}", balance),
                Err(e) => state.notify(Err(e)),
            }
        })
        .await?;

    Ok(Redirect::to("/").into_response())
}
