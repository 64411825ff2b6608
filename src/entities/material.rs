//! Material entity - A recyclable material with its point rates.
//!
//! Each material carries one rate per counting mode. A `None` rate means the
//! material cannot be deposited while that mode is active.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Material database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "materials")]
pub struct Model {
    /// Unique identifier for the material
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Material name (e.g., "Aluminum", "PET bottle")
    pub name: String,
    /// Points credited per kilogram in weight mode
    pub points_per_kg: Option<f64>,
    /// Points credited per unit in unit mode
    pub points_per_unit: Option<i64>,
    /// Soft delete flag - if true, material is hidden but ledger rows keep referencing it
    pub is_deleted: bool,
}

/// Defines relationships between Material and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One material appears in many recycle transactions
    #[sea_orm(has_many = "super::recycle_transaction::Entity")]
    RecycleTransactions,
    /// One material is accepted by many eco points
    #[sea_orm(has_many = "super::eco_point_material::Entity")]
    EcoPointMaterials,
}

impl Related<super::recycle_transaction::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RecycleTransactions.def()
    }
}

impl Related<super::eco_point_material::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EcoPointMaterials.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
