//! Offer business logic - creation, partner-scoped lookups and the guarded
//! delete.
//!
//! Offers referenced by redemptions cannot be deleted: the redemption ledger
//! is immutable and must keep resolving. This is enforced as a business rule
//! here, not left to foreign-key constraints.

use crate::{
    entities::{Offer, Redemption, offer, redemption},
    errors::{Error, Result},
};
use sea_orm::{ConnectionTrait, QuerySelect, Set, prelude::*};

/// Finds an offer by id, scoped to the partner that owns it.
///
/// An offer belonging to a different partner is indistinguishable from a
/// missing one, so callers cannot probe other partners' catalogs.
pub async fn get_partner_offer<C>(
    db: &C,
    partner_id: i64,
    offer_id: i64,
) -> Result<Option<offer::Model>>
where
    C: ConnectionTrait,
{
    Offer::find_by_id(offer_id)
        .filter(offer::Column::PartnerId.eq(partner_id))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Creates a new offer for a partner, performing input validation.
pub async fn create_offer(
    db: &DatabaseConnection,
    partner_id: i64,
    title: String,
    description: Option<String>,
    points: i64,
    quantity: i64,
    valid_until: Option<Date>,
) -> Result<offer::Model> {
    if title.trim().is_empty() {
        return Err(Error::Validation {
            message: "offer title cannot be empty".to_string(),
        });
    }
    if points <= 0 {
        return Err(Error::Validation {
            message: format!("offer point cost must be positive, got {points}"),
        });
    }
    if quantity <= 0 {
        return Err(Error::Validation {
            message: format!("offer quantity must be positive, got {quantity}"),
        });
    }

    let now = chrono::Utc::now();
    let offer = offer::ActiveModel {
        partner_id: Set(partner_id),
        title: Set(title.trim().to_string()),
        description: Set(description),
        points: Set(points),
        quantity: Set(quantity),
        valid_until: Set(valid_until),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    offer.insert(db).await.map_err(Into::into)
}

/// Deletes a partner's offer, refusing while redemptions reference it.
pub async fn delete_offer(
    db: &DatabaseConnection,
    partner_id: i64,
    offer_id: i64,
) -> Result<offer::Model> {
    let offer = get_partner_offer(db, partner_id, offer_id)
        .await?
        .ok_or(Error::OfferNotFound { id: offer_id })?;

    let redeemed = Redemption::find()
        .filter(redemption::Column::OfferId.eq(offer_id))
        .limit(1)
        .all(db)
        .await?;
    if !redeemed.is_empty() {
        return Err(Error::HasDependentRecords {
            entity: "offer",
            id: offer_id,
        });
    }

    let deleted = offer.clone();
    offer.delete(db).await?;
    Ok(deleted)
}
