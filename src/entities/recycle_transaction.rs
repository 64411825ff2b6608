//! Recycle transaction entity - The deposit side of the points ledger.
//!
//! Rows are immutable once written: created in the same database transaction
//! as the balance credit, never updated or deleted. Both `weight` and
//! `quantity` columns exist for both counting modes; the one the active mode
//! did not use is stored as zero.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Recycle transaction database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "recycle_transactions")]
pub struct Model {
    /// Unique identifier for the ledger row
    #[sea_orm(primary_key)]
    pub id: i64,
    /// User whose balance was credited
    pub user_id: i64,
    /// Eco point the deposit was made at
    pub eco_point_id: i64,
    /// Material that was deposited
    pub material_id: i64,
    /// Operator who recorded the deposit
    pub operator_id: i64,
    /// Deposited weight in kilograms (zero in unit mode)
    pub weight: f64,
    /// Deposited unit count (zero in weight mode)
    pub quantity: i64,
    /// Points credited for this deposit
    pub points: i64,
    /// When the deposit was recorded
    pub created_at: DateTimeUtc,
}

/// Defines relationships between `RecycleTransaction` and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each ledger row credits one user
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
    /// Each ledger row references one material
    #[sea_orm(
        belongs_to = "super::material::Entity",
        from = "Column::MaterialId",
        to = "super::material::Column::Id"
    )]
    Material,
    /// Each ledger row references one eco point
    #[sea_orm(
        belongs_to = "super::eco_point::Entity",
        from = "Column::EcoPointId",
        to = "super::eco_point::Column::Id"
    )]
    EcoPoint,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::material::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Material.def()
    }
}

impl Related<super::eco_point::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EcoPoint.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
