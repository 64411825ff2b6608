//! Material business logic - lookups and the guarded soft delete.
//!
//! Materials referenced by recycle transactions cannot be removed: the ledger
//! is immutable, so the rows it points at have to stay resolvable. Deletion
//! is a soft delete, mirroring how the rest of the system hides rather than
//! destroys referenced data.

use crate::{
    entities::{Material, RecycleTransaction, material, recycle_transaction},
    errors::{Error, Result},
};
use sea_orm::{ConnectionTrait, QuerySelect, Set, prelude::*};

/// Finds an active (non-deleted) material by id.
pub async fn get_material_by_id<C>(db: &C, material_id: i64) -> Result<Option<material::Model>>
where
    C: ConnectionTrait,
{
    Material::find_by_id(material_id)
        .filter(material::Column::IsDeleted.eq(false))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Finds an active material by id, failing with [`Error::MaterialNotFound`].
pub async fn require_material<C>(db: &C, material_id: i64) -> Result<material::Model>
where
    C: ConnectionTrait,
{
    get_material_by_id(db, material_id)
        .await?
        .ok_or(Error::MaterialNotFound { id: material_id })
}

/// Soft deletes a material, refusing while ledger rows reference it.
pub async fn delete_material(db: &DatabaseConnection, material_id: i64) -> Result<material::Model> {
    let material = require_material(db, material_id).await?;

    let referenced = RecycleTransaction::find()
        .filter(recycle_transaction::Column::MaterialId.eq(material_id))
        .limit(1)
        .all(db)
        .await?;
    if !referenced.is_empty() {
        return Err(Error::HasDependentRecords {
            entity: "material",
            id: material_id,
        });
    }

    let mut material: material::ActiveModel = material.into();
    material.is_deleted = Set(true);
    material.update(db).await.map_err(Into::into)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::{setup_deposit_env, setup_test_db};
    use crate::{core::deposit, test_utils::create_test_material};

    #[tokio::test]
    async fn test_require_material_excludes_deleted() -> Result<()> {
        let db = setup_test_db().await?;
        let material = create_test_material(&db, "Glass", Some(2.0), Some(1)).await?;

        assert_eq!(require_material(&db, material.id).await?.id, material.id);

        delete_material(&db, material.id).await?;
        assert!(matches!(
            require_material(&db, material.id).await.unwrap_err(),
            Error::MaterialNotFound { .. }
        ));

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_material_not_found() -> Result<()> {
        let db = setup_test_db().await?;

        let result = delete_material(&db, 999).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::MaterialNotFound { id: 999 }
        ));

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_material_blocked_by_ledger() -> Result<()> {
        let env = setup_deposit_env().await?;

        // A deposit creates a ledger row referencing the material
        deposit::record_deposit(
            &env.db,
            env.operator.id,
            env.user.id,
            env.eco_point.id,
            env.material.id,
            Some(1.0),
            None,
        )
        .await?;

        let result = delete_material(&env.db, env.material.id).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::HasDependentRecords {
                entity: "material",
                ..
            }
        ));

        // Still resolvable afterwards
        assert!(require_material(&env.db, env.material.id).await.is_ok());

        Ok(())
    }
}
