//! Caller identity - extracted from the headers the authenticating gateway
//! forwards with every request.
//!
//! The gateway has already verified the caller's token and resolved their
//! account; this module only reads the result. Role checks here are coarse
//! endpoint gating; resource ownership (operator↔eco point, partner↔offer)
//! is re-verified in `core` as a business invariant.

use crate::errors::{Error, Result};
use axum::{
    Json,
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Account roles, as stored in `users.role`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Regular user: deposits credited to them, redeems offers
    Regular,
    /// Eco point operator: records deposits at their site
    Operator,
    /// Sponsoring partner: publishes offers, processes redemptions
    Partner,
    /// System administrator
    Admin,
}

impl Role {
    /// Parses the storage/header representation; `None` for anything else.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "regular" => Some(Self::Regular),
            "operator" => Some(Self::Operator),
            "partner" => Some(Self::Partner),
            "admin" => Some(Self::Admin),
            _ => None,
        }
    }

    /// The storage/header representation of the role.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Regular => "regular",
            Self::Operator => "operator",
            Self::Partner => "partner",
            Self::Admin => "admin",
        }
    }
}

/// The authenticated caller, as resolved by the upstream gateway.
#[derive(Debug, Clone, Copy)]
pub struct Identity {
    /// The caller's user id
    pub user_id: i64,
    /// The caller's role
    pub role: Role,
}

impl Identity {
    /// Fails with [`Error::RoleRequired`] unless the caller holds `role`.
    pub fn require(&self, role: Role) -> Result<()> {
        if self.role == role {
            Ok(())
        } else {
            Err(Error::RoleRequired {
                required: role.as_str(),
            })
        }
    }
}

fn unauthorized(message: &str) -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({ "status": "error", "message": message })),
    )
        .into_response()
}

impl<S> FromRequestParts<S> for Identity
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> std::result::Result<Self, Self::Rejection> {
        let user_id = parts
            .headers
            .get("x-user-id")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<i64>().ok())
            .ok_or_else(|| unauthorized("missing or invalid x-user-id header"))?;

        let role = parts
            .headers
            .get("x-user-role")
            .and_then(|v| v.to_str().ok())
            .and_then(Role::parse)
            .ok_or_else(|| unauthorized("missing or invalid x-user-role header"))?;

        Ok(Self { user_id, role })
    }
}
