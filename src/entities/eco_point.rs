//! Eco point entity - A physical recycling drop-off site.
//!
//! Each site is run by exactly one operator account; deposits at the site can
//! only be recorded by that operator.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Eco point database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "eco_points")]
pub struct Model {
    /// Unique identifier for the eco point
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Site name
    pub name: String,
    /// Street address, if known
    pub address: Option<String>,
    /// User id of the one designated operator
    pub operator_id: i64,
}

/// Defines relationships between `EcoPoint` and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each eco point is run by one operator account
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::OperatorId",
        to = "super::user::Column::Id"
    )]
    Operator,
    /// One eco point accepts many materials
    #[sea_orm(has_many = "super::eco_point_material::Entity")]
    EcoPointMaterials,
    /// One eco point has many recycle transactions
    #[sea_orm(has_many = "super::recycle_transaction::Entity")]
    RecycleTransactions,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Operator.def()
    }
}

impl Related<super::eco_point_material::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EcoPointMaterials.def()
    }
}

impl Related<super::recycle_transaction::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RecycleTransactions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
