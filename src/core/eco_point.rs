//! Eco point business logic - lookups, operator-ownership checks and the
//! guarded delete.
//!
//! The ownership check is a business invariant, not a generic role check: an
//! operator may only record deposits at the one site they are assigned to,
//! even though any operator holds the operator role.

use crate::{
    entities::{
        EcoPoint, EcoPointMaterial, RecycleTransaction, eco_point, eco_point_material,
        recycle_transaction,
    },
    errors::{Error, Result},
};
use sea_orm::{ConnectionTrait, QuerySelect, TransactionTrait, prelude::*};

/// Finds an eco point by id.
pub async fn get_eco_point_by_id<C>(db: &C, eco_point_id: i64) -> Result<Option<eco_point::Model>>
where
    C: ConnectionTrait,
{
    EcoPoint::find_by_id(eco_point_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Resolves an eco point and verifies that `operator_id` is its designated
/// operator.
///
/// Fails with [`Error::EcoPointNotFound`] for an unknown site and
/// [`Error::NotAuthorized`] when the site belongs to a different operator.
pub async fn require_operated_by<C>(
    db: &C,
    eco_point_id: i64,
    operator_id: i64,
) -> Result<eco_point::Model>
where
    C: ConnectionTrait,
{
    let eco_point = get_eco_point_by_id(db, eco_point_id)
        .await?
        .ok_or(Error::EcoPointNotFound { id: eco_point_id })?;

    if eco_point.operator_id != operator_id {
        return Err(Error::NotAuthorized {
            operator_id,
            eco_point_id,
        });
    }

    Ok(eco_point)
}

/// Whether the eco point's accepted-material set contains the material.
pub async fn accepts_material<C>(db: &C, eco_point_id: i64, material_id: i64) -> Result<bool>
where
    C: ConnectionTrait,
{
    let link = EcoPointMaterial::find()
        .filter(eco_point_material::Column::EcoPointId.eq(eco_point_id))
        .filter(eco_point_material::Column::MaterialId.eq(material_id))
        .one(db)
        .await?;
    Ok(link.is_some())
}

/// Deletes an eco point and its accepted-material links, refusing while
/// ledger rows reference the site.
pub async fn delete_eco_point(db: &DatabaseConnection, eco_point_id: i64) -> Result<()> {
    let eco_point = get_eco_point_by_id(db, eco_point_id)
        .await?
        .ok_or(Error::EcoPointNotFound { id: eco_point_id })?;

    let referenced = RecycleTransaction::find()
        .filter(recycle_transaction::Column::EcoPointId.eq(eco_point_id))
        .limit(1)
        .all(db)
        .await?;
    if !referenced.is_empty() {
        return Err(Error::HasDependentRecords {
            entity: "eco point",
            id: eco_point_id,
        });
    }

    // The links and the site row go together or not at all
    let txn = db.begin().await?;
    EcoPointMaterial::delete_many()
        .filter(eco_point_material::Column::EcoPointId.eq(eco_point_id))
        .exec(&txn)
        .await?;
    eco_point.delete(&txn).await?;
    txn.commit().await?;

    Ok(())
}
