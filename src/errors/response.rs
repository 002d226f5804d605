use axum::{
    response::{IntoResponse, Response, Redirect},
    http::StatusCode,
};
use urlencoding;
use crate::errors::AppError;

// Registration problems go back to the landing page with the message in the
// query string; everything else is an internal failure.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotRegistered(msg) => {
                Redirect::to(&format!("/?error={}", urlencoding::encode(&msg)))
                    .into_response()
            }

            AppError::Session(e) => {
                tracing::error!("Session store failure: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Session error".to_string()
                ).into_response()
            }
        }
    }
}
