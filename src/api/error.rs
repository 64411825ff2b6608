//! Error → HTTP mapping.
//!
//! Every client-facing failure gets a distinct status and message; the two
//! inventory-exhaustion variants share 409 but keep their different messages
//! so clients and logs can tell the race-detected case apart. Storage faults
//! are logged and replaced with a generic message.

use crate::errors::Error;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::error;

impl Error {
    /// The HTTP status this failure maps to.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::RoleRequired { .. } | Self::NotAuthorized { .. } => StatusCode::FORBIDDEN,
            Self::UserNotFound { .. }
            | Self::MaterialNotFound { .. }
            | Self::EcoPointNotFound { .. }
            | Self::OfferNotFound { .. } => StatusCode::NOT_FOUND,
            Self::MaterialNotAccepted { .. }
            | Self::MissingRate { .. }
            | Self::InsufficientPoints { .. }
            | Self::OfferOutOfStock { .. }
            | Self::OfferJustUnavailable { .. }
            | Self::HasDependentRecords { .. } => StatusCode::CONFLICT,
            Self::Config { .. } | Self::Database(_) | Self::Io(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
            error!(error = %self, "request failed");
            "internal server error".to_string()
        } else {
            self.to_string()
        };

        (
            status,
            Json(json!({ "status": "error", "message": message })),
        )
            .into_response()
    }
}
