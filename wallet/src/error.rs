use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use zwallet_nav::{DeeplinkError, RootDestination, WalletNavError};

#[derive(Error, Debug)]
pub enum HostError {
    #[error(transparent)]
    Deeplink(#[from] DeeplinkError),

    #[error("Wallet event not found: {0}")]
    EventNotFound(String),

    #[error("Shortcut to {0:?} unavailable")]
    ShortcutUnavailable(RootDestination),

    #[error("No block explorer link for event {0}")]
    NoExplorerLink(String),

    #[error("Nothing to copy: {0}")]
    NothingToCopy(String),

    #[error("Fixture error: {0}")]
    Fixture(#[from] FixtureError),

    #[error("Service unavailable: {0}")]
    Unavailable(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

#[derive(Error, Debug)]
pub enum FixtureError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<WalletNavError> for HostError {
    fn from(error: WalletNavError) -> Self {
        match error {
            WalletNavError::Deeplink(e) => HostError::Deeplink(e),
            WalletNavError::Config(msg) => HostError::InvalidInput(msg),
            e @ (WalletNavError::ActorStopped(_) | WalletNavError::FetchFailed(_)) => {
                HostError::Unavailable(e.to_string())
            }
        }
    }
}

impl IntoResponse for HostError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            HostError::Deeplink(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            HostError::InvalidInput(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            HostError::NothingToCopy(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            HostError::EventNotFound(_) => (StatusCode::NOT_FOUND, self.to_string()),
            HostError::NoExplorerLink(_) => (StatusCode::NOT_FOUND, self.to_string()),
            HostError::ShortcutUnavailable(_) => (StatusCode::CONFLICT, self.to_string()),
            HostError::Unavailable(_) => (StatusCode::SERVICE_UNAVAILABLE, self.to_string()),
            HostError::Fixture(_) => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}
