//! Eco point / material link entity - the accepted-material set of a site.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Accepted-material link database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "eco_point_materials")]
pub struct Model {
    /// Unique identifier for the link row
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Eco point that accepts the material
    pub eco_point_id: i64,
    /// Material accepted at the eco point
    pub material_id: i64,
}

/// Defines relationships between the link table and its two sides
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each link row belongs to one eco point
    #[sea_orm(
        belongs_to = "super::eco_point::Entity",
        from = "Column::EcoPointId",
        to = "super::eco_point::Column::Id"
    )]
    EcoPoint,
    /// Each link row belongs to one material
    #[sea_orm(
        belongs_to = "super::material::Entity",
        from = "Column::MaterialId",
        to = "super::material::Column::Id"
    )]
    Material,
}

impl Related<super::eco_point::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EcoPoint.def()
    }
}

impl Related<super::material::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Material.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
