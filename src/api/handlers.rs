//! Request handlers, one per route.
//!
//! Each handler follows the same shape: enforce the endpoint's role, pull the
//! request apart, call into [`crate::core`] and wrap the result in the
//! `{"status":"success","data":…}` envelope. Failures surface through the
//! `?` operator and the [`IntoResponse`](axum::response::IntoResponse) impl
//! on [`Error`](crate::errors::Error).

use super::{
    AppState,
    identity::{Identity, Role},
};
use crate::{
    core::{counting_mode, deposit, eco_point, material, offer, redemption},
    errors::{Error, Result},
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::json;

fn success(data: impl serde::Serialize) -> Response {
    Json(json!({ "status": "success", "data": data })).into_response()
}

fn created(data: impl serde::Serialize) -> Response {
    (
        StatusCode::CREATED,
        Json(json!({ "status": "success", "data": data })),
    )
        .into_response()
}

/// Body of `POST /transactions`. Which of `weight` / `quantity` is required
/// depends on the active counting mode.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDepositRequest {
    /// Depositing user
    pub user_id: i64,
    /// Collection site
    pub eco_point_id: i64,
    /// Deposited material
    pub material_id: i64,
    /// Weight in kilograms (weight mode)
    pub weight: Option<f64>,
    /// Unit count (unit mode)
    pub quantity: Option<i64>,
}

/// `POST /transactions` - records a recycling deposit and credits the user.
pub async fn create_deposit(
    State(state): State<AppState>,
    identity: Identity,
    Json(body): Json<CreateDepositRequest>,
) -> Result<Response> {
    identity.require(Role::Operator)?;

    let outcome = deposit::record_deposit(
        &state.db,
        identity.user_id,
        body.user_id,
        body.eco_point_id,
        body.material_id,
        body.weight,
        body.quantity,
    )
    .await?;

    Ok(created(outcome))
}

/// `GET /eco-points/{eco_point_id}/transactions` - the site's ledger, newest
/// first, for its designated operator.
pub async fn list_eco_point_transactions(
    State(state): State<AppState>,
    identity: Identity,
    Path(eco_point_id): Path<i64>,
) -> Result<Response> {
    identity.require(Role::Operator)?;

    let rows = deposit::eco_point_transactions(&state.db, identity.user_id, eco_point_id).await?;
    Ok(success(rows))
}

/// `GET /eco-points/{eco_point_id}/stats` - today's totals and the all-time
/// material mix for the operator's site.
pub async fn eco_point_stats(
    State(state): State<AppState>,
    identity: Identity,
    Path(eco_point_id): Path<i64>,
) -> Result<Response> {
    identity.require(Role::Operator)?;

    let stats = deposit::eco_point_stats(&state.db, identity.user_id, eco_point_id).await?;
    Ok(success(stats))
}

/// Body of `POST /redemptions`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRedemptionRequest {
    /// Redeeming user
    pub user_id: i64,
    /// Offer to redeem one unit of
    pub offer_id: i64,
}

/// `POST /redemptions` - exchanges a user's points for one unit of the
/// partner's offer.
pub async fn create_redemption(
    State(state): State<AppState>,
    identity: Identity,
    Json(body): Json<CreateRedemptionRequest>,
) -> Result<Response> {
    identity.require(Role::Partner)?;

    let outcome =
        redemption::redeem_offer(&state.db, identity.user_id, body.user_id, body.offer_id).await?;
    Ok(created(outcome))
}

/// `GET /redemptions` - all redemptions against the partner's offers.
pub async fn list_partner_redemptions(
    State(state): State<AppState>,
    identity: Identity,
) -> Result<Response> {
    identity.require(Role::Partner)?;

    let rows = redemption::partner_redemptions(&state.db, identity.user_id).await?;
    Ok(success(rows))
}

/// `GET /config/counting-mode` - the currently active mode. Public: operator
/// clients need it to render the right deposit form field.
pub async fn get_counting_mode(State(state): State<AppState>) -> Response {
    let mode = counting_mode::get_counting_mode(&state.db).await;
    success(json!({ "mode": mode }))
}

/// Body of `PUT /config/counting-mode`.
#[derive(Debug, Deserialize)]
pub struct SwitchCountingModeRequest {
    /// `"weight"` or `"unit"`
    pub mode: String,
}

/// `PUT /config/counting-mode` - switches the system-wide counting mode.
/// Takes effect for the very next deposit.
pub async fn switch_counting_mode(
    State(state): State<AppState>,
    identity: Identity,
    Json(body): Json<SwitchCountingModeRequest>,
) -> Result<Response> {
    identity.require(Role::Admin)?;

    let mode = counting_mode::CountingMode::parse(&body.mode).ok_or_else(|| Error::Validation {
        message: format!("unknown counting mode {:?}, expected weight or unit", body.mode),
    })?;
    counting_mode::set_counting_mode(&state.db, mode).await?;

    Ok(success(json!({ "mode": mode })))
}

/// Body of `POST /offers`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOfferRequest {
    /// Offer title
    pub title: String,
    /// Optional longer description
    pub description: Option<String>,
    /// Point cost per unit
    pub points: i64,
    /// Initial inventory
    pub quantity: i64,
    /// Optional expiry date
    pub valid_until: Option<NaiveDate>,
}

/// `POST /offers` - publishes a new offer owned by the acting partner.
pub async fn create_offer(
    State(state): State<AppState>,
    identity: Identity,
    Json(body): Json<CreateOfferRequest>,
) -> Result<Response> {
    identity.require(Role::Partner)?;

    let offer = offer::create_offer(
        &state.db,
        identity.user_id,
        body.title,
        body.description,
        body.points,
        body.quantity,
        body.valid_until,
    )
    .await?;

    Ok(created(offer))
}

/// `DELETE /offers/{offer_id}` - removes a partner's own offer, unless
/// redemptions reference it.
pub async fn delete_offer(
    State(state): State<AppState>,
    identity: Identity,
    Path(offer_id): Path<i64>,
) -> Result<Response> {
    identity.require(Role::Partner)?;

    let deleted = offer::delete_offer(&state.db, identity.user_id, offer_id).await?;
    Ok(success(deleted))
}

/// `DELETE /materials/{material_id}` - soft-deletes a material, unless the
/// recycling ledger references it.
pub async fn delete_material(
    State(state): State<AppState>,
    identity: Identity,
    Path(material_id): Path<i64>,
) -> Result<Response> {
    identity.require(Role::Admin)?;

    let deleted = material::delete_material(&state.db, material_id).await?;
    Ok(success(deleted))
}

/// `DELETE /eco-points/{eco_point_id}` - removes a collection site and its
/// accepted-material links, unless the ledger references it.
pub async fn delete_eco_point(
    State(state): State<AppState>,
    identity: Identity,
    Path(eco_point_id): Path<i64>,
) -> Result<Response> {
    identity.require(Role::Admin)?;

    eco_point::delete_eco_point(&state.db, eco_point_id).await?;
    Ok(success(json!({ "id": eco_point_id })))
}
