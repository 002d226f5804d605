use axum::{
    extract::{Form, State},
    response::{IntoResponse, Response, Redirect},
};
use tower_sessions::Session;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::RegisterForm;
use crate::services::StateStore;

// No credentials are checked: registration only creates the in-session user.
#[axum::debug_handler]
pub async fn handle_register(
    State((store, _)): State<(StateStore, Config)>,
    session: Session,
    Form(register_form): Form<RegisterForm>,
) -> AppResult<Response> {
    tracing::info!("Registration attempt for user: {}", register_form.username);

    store
        .update(&session, |state| {
            let outcome = state.register(register_form.username, register_form.email);
            match &outcome {
                Ok(_) => tracing::info!("Registered user: {}", state.username_field),
                Err(e) => tracing::info!("Registration rejected: {}", e),
            }
            state.notify(outcome);
        })
        .await?;

    Ok(Redirect::to("/").into_response())
}
