//! User entity - Every account in the system, regardless of role.
//!
//! The `points` column is the hot balance: it is only ever mutated by the
//! deposit and redemption operations, always inside a transaction that also
//! writes the matching ledger row.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// User database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    /// Unique identifier for the user
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Display name
    pub name: String,
    /// Contact phone number, if provided
    pub phone: Option<String>,
    /// Account role: `"regular"`, `"operator"`, `"partner"` or `"admin"`
    pub role: String,
    /// Current point balance; never negative
    pub points: i64,
}

/// Defines relationships between User and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One user has many recycle transactions (as the depositing user)
    #[sea_orm(has_many = "super::recycle_transaction::Entity")]
    RecycleTransactions,
    /// One user has many redemptions
    #[sea_orm(has_many = "super::redemption::Entity")]
    Redemptions,
}

impl Related<super::recycle_transaction::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RecycleTransactions.def()
    }
}

impl Related<super::redemption::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Redemptions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
