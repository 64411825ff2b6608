//! Unified error type for the whole crate.
//!
//! Client-facing failures are modeled as individual variants so callers can
//! match on the exact condition; the HTTP layer maps each variant to a status
//! code in [`crate::api::error`]. The two stock-exhaustion variants are kept
//! separate on purpose: [`Error::OfferOutOfStock`] is the optimistic pre-check
//! rejection, [`Error::OfferJustUnavailable`] is the race detected inside the
//! redemption transaction.

use thiserror::Error;

/// All failure conditions the crate can surface.
#[derive(Debug, Error)]
pub enum Error {
    /// Missing or malformed request fields, non-positive amounts.
    #[error("{message}")]
    Validation {
        /// Human-readable description of what was wrong with the input
        message: String,
    },

    /// The caller's role does not permit the operation.
    #[error("this operation requires the {required} role")]
    RoleRequired {
        /// Role the endpoint is restricted to
        required: &'static str,
    },

    /// The operator is not the one assigned to the eco point.
    #[error("operator {operator_id} is not assigned to eco point {eco_point_id}")]
    NotAuthorized {
        /// Acting operator's user id
        operator_id: i64,
        /// Eco point the operator tried to record for
        eco_point_id: i64,
    },

    /// Referenced user does not exist.
    #[error("user {id} not found")]
    UserNotFound {
        /// Requested user id
        id: i64,
    },

    /// Referenced material does not exist (or was removed).
    #[error("material {id} not found")]
    MaterialNotFound {
        /// Requested material id
        id: i64,
    },

    /// Referenced eco point does not exist.
    #[error("eco point {id} not found")]
    EcoPointNotFound {
        /// Requested eco point id
        id: i64,
    },

    /// Offer does not exist or belongs to a different partner.
    #[error("offer {id} not found for this partner")]
    OfferNotFound {
        /// Requested offer id
        id: i64,
    },

    /// The eco point's accepted-material set does not contain the material.
    #[error("eco point {eco_point_id} does not accept material {material_id}")]
    MaterialNotAccepted {
        /// Eco point the deposit was recorded at
        eco_point_id: i64,
        /// Material that was refused
        material_id: i64,
    },

    /// The material has no rate configured for the active counting mode.
    /// A configuration fault, but surfaced to the client like any conflict.
    #[error("material {material_id} has no {mode} rate configured")]
    MissingRate {
        /// Material missing the rate
        material_id: i64,
        /// Counting mode whose rate column is empty ("weight" or "unit")
        mode: &'static str,
    },

    /// The user's balance does not cover the offer's point cost.
    #[error("insufficient points: user has {available}, offer requires {required}")]
    InsufficientPoints {
        /// Points the user currently holds
        available: i64,
        /// Points the offer costs
        required: i64,
    },

    /// Offer inventory was already exhausted when the redemption started.
    #[error("offer \"{title}\" is out of stock")]
    OfferOutOfStock {
        /// Offer title, for the client-facing message
        title: String,
    },

    /// A concurrent redemption took the last unit after the optimistic check.
    #[error("offer \"{title}\" just became unavailable")]
    OfferJustUnavailable {
        /// Offer title, for the client-facing message
        title: String,
    },

    /// The entity is referenced by immutable ledger rows and cannot be deleted.
    #[error("{entity} {id} has ledger records and cannot be deleted")]
    HasDependentRecords {
        /// Entity kind ("offer", "material", "eco point")
        entity: &'static str,
        /// Id of the entity the delete was attempted on
        id: i64,
    },

    /// Configuration error (startup config files, seed data).
    #[error("configuration error: {message}")]
    Config {
        /// What failed to load or parse
        message: String,
    },

    /// Database error from the storage layer.
    #[error("database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// I/O error (config files, network listener).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
