// Error types for the HTTP layer and for the session economy.
use thiserror::Error;

pub mod action;
pub mod response;

pub use action::{ActionError, ActionResult};

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Not registered: {0}")]
    NotRegistered(String),

    // Raised by the session store when loading or saving the per-session state.
    #[error("Session error: {0}")]
    Session(#[from] tower_sessions::session::Error),
}

pub type AppResult<T> = Result<T, AppError>;
