//! Redemption entity - The debit side of the points ledger.
//!
//! Rows are immutable once written. An existing redemption also blocks
//! deletion of the offer it references.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Redemption database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "redemptions")]
pub struct Model {
    /// Unique identifier for the ledger row
    #[sea_orm(primary_key)]
    pub id: i64,
    /// User whose balance was debited
    pub user_id: i64,
    /// Offer that was redeemed
    pub offer_id: i64,
    /// Points spent (the offer's cost at redemption time)
    pub points: i64,
    /// When the redemption happened
    pub created_at: DateTimeUtc,
}

/// Defines relationships between Redemption and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each redemption debits one user
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
    /// Each redemption consumes one unit of one offer
    #[sea_orm(
        belongs_to = "super::offer::Entity",
        from = "Column::OfferId",
        to = "super::offer::Column::Id"
    )]
    Offer,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::offer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Offer.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
