//! Offer-redemption operation - atomically exchanges points for one unit of a
//! partner's offer.
//!
//! Concurrency safeguard: the optimistic stock check rejects cheaply before a
//! transaction is started, and inside the transaction a conditional decrement
//! (`UPDATE offers SET quantity = quantity - 1 WHERE id = ? AND quantity > 0`)
//! re-checks under the storage engine's write serialization. Zero affected
//! rows means a concurrent redemption took the last unit; that failure is
//! reported distinctly from the plain out-of-stock rejection. SQLite has no
//! `SELECT ... FOR UPDATE`, so the conditional decrement with an affected-row
//! check stands in for the exclusive row lock.

use crate::{
    core::{offer as offer_core, user},
    entities::{
        Redemption, offer, offer::Model as OfferModel, redemption,
        user as user_entity, user::Model as UserModel,
    },
    errors::{Error, Result},
};
use chrono::{DateTime, Utc};
use sea_orm::{
    ConnectionTrait, DatabaseConnection, FromQueryResult, JoinType, QueryOrder, QuerySelect, Set,
    TransactionTrait, prelude::*,
};
use serde::Serialize;
use tracing::info;

/// The created redemption joined with display data, for the API response.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RedemptionReceipt {
    /// Ledger row id
    pub id: i64,
    /// Points spent
    pub points: i64,
    /// When the redemption happened
    pub date: DateTime<Utc>,
    /// Offer title
    pub title: String,
    /// Offer description, if any
    pub description: Option<String>,
    /// Inventory remaining after this redemption
    pub remaining_quantity: i64,
    /// Partner display name
    pub partner_name: String,
}

/// Everything a successful redemption returns to the caller.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RedemptionOutcome {
    /// The immutable ledger row that was created
    pub redemption: RedemptionReceipt,
    /// The user with their updated balance
    pub user: UserModel,
}

/// Atomically claims one unit of the offer's inventory.
///
/// Returns `false` when the inventory is already exhausted, which inside a
/// redemption transaction means a concurrent redemption won the race between
/// the optimistic check and this statement.
pub async fn claim_offer_unit<C>(db: &C, offer_id: i64) -> Result<bool>
where
    C: ConnectionTrait,
{
    use sea_orm::sea_query::Expr;

    let result = offer::Entity::update_many()
        .col_expr(
            offer::Column::Quantity,
            Expr::col(offer::Column::Quantity).sub(1),
        )
        .filter(offer::Column::Id.eq(offer_id))
        .filter(offer::Column::Quantity.gt(0))
        .exec(db)
        .await?;

    Ok(result.rows_affected == 1)
}

/// The atomic phase: claim a unit, write the ledger row, debit the balance.
/// Every mutation rolls back together on any failure.
async fn redeem_atomic(
    db: &DatabaseConnection,
    offer: &OfferModel,
    redeeming_user: &UserModel,
) -> Result<(redemption::Model, UserModel)> {
    let txn = db.begin().await?;

    if !claim_offer_unit(&txn, offer.id).await? {
        // Exhausted between the optimistic check and the decrement
        return Err(Error::OfferJustUnavailable {
            title: offer.title.clone(),
        });
    }

    let row = redemption::ActiveModel {
        user_id: Set(redeeming_user.id),
        offer_id: Set(offer.id),
        points: Set(offer.points),
        created_at: Set(Utc::now()),
        ..Default::default()
    };
    let row = row.insert(&txn).await?;

    let updated_user = user::adjust_points_atomic(&txn, redeeming_user.id, -offer.points).await?;

    txn.commit().await?;
    Ok((row, updated_user))
}

/// Redeems one unit of a partner's offer for a user.
///
/// Preconditions run before the transaction: the offer must belong to the
/// acting partner, have stock, and the user must exist with enough points.
/// The stock is re-checked inside the transaction; see the module docs.
pub async fn redeem_offer(
    db: &DatabaseConnection,
    partner_id: i64,
    user_id: i64,
    offer_id: i64,
) -> Result<RedemptionOutcome> {
    let offer = offer_core::get_partner_offer(db, partner_id, offer_id)
        .await?
        .ok_or(Error::OfferNotFound { id: offer_id })?;

    // Optimistic fast path: don't start a transaction for a dead offer
    if offer.quantity <= 0 {
        return Err(Error::OfferOutOfStock { title: offer.title });
    }

    let redeeming_user = user::require_user(db, user_id).await?;
    if redeeming_user.points < offer.points {
        return Err(Error::InsufficientPoints {
            available: redeeming_user.points,
            required: offer.points,
        });
    }

    let (row, updated_user) = redeem_atomic(db, &offer, &redeeming_user).await?;

    let remaining = offer_core::get_partner_offer(db, partner_id, offer_id)
        .await?
        .map_or(0, |o| o.quantity);
    let partner = user::require_user(db, partner_id).await?;

    info!(
        user_id,
        offer_id,
        points = offer.points,
        remaining,
        "redeemed offer"
    );

    Ok(RedemptionOutcome {
        redemption: RedemptionReceipt {
            id: row.id,
            points: row.points,
            date: row.created_at,
            title: offer.title,
            description: offer.description,
            remaining_quantity: remaining,
            partner_name: partner.name,
        },
        user: updated_user,
    })
}

/// One row of a partner's redemption listing.
#[derive(Debug, Clone, Serialize, FromQueryResult)]
#[serde(rename_all = "camelCase")]
pub struct PartnerRedemption {
    /// Ledger row id
    pub id: i64,
    /// Points spent
    pub points: i64,
    /// When the redemption happened
    pub created_at: DateTime<Utc>,
    /// Offer title
    pub title: String,
    /// Redeeming user's display name
    pub user_name: String,
    /// Redeeming user's phone, if any
    pub user_phone: Option<String>,
}

/// Lists all redemptions against a partner's offers, newest first.
pub async fn partner_redemptions(
    db: &DatabaseConnection,
    partner_id: i64,
) -> Result<Vec<PartnerRedemption>> {
    Redemption::find()
        .select_only()
        .columns([
            redemption::Column::Id,
            redemption::Column::Points,
            redemption::Column::CreatedAt,
        ])
        .column_as(offer::Column::Title, "title")
        .column_as(user_entity::Column::Name, "user_name")
        .column_as(user_entity::Column::Phone, "user_phone")
        .join(JoinType::InnerJoin, redemption::Relation::Offer.def())
        .join(JoinType::InnerJoin, redemption::Relation::User.def())
        .filter(offer::Column::PartnerId.eq(partner_id))
        .order_by_desc(redemption::Column::CreatedAt)
        .into_model::<PartnerRedemption>()
        .all(db)
        .await
        .map_err(Into::into)
}
