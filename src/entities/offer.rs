//! Offer entity - A redeemable reward published by a partner.
//!
//! `quantity` is the remaining inventory. It only ever decreases, exactly one
//! unit per redemption, through the conditional decrement in
//! [`crate::core::redemption`]. It never goes negative.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Offer database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "offers")]
pub struct Model {
    /// Unique identifier for the offer
    #[sea_orm(primary_key)]
    pub id: i64,
    /// User id of the partner that published the offer
    pub partner_id: i64,
    /// Offer title shown to users
    pub title: String,
    /// Longer description, if provided
    pub description: Option<String>,
    /// Point cost of one unit
    pub points: i64,
    /// Remaining inventory; never negative
    pub quantity: i64,
    /// Optional expiry date
    pub valid_until: Option<Date>,
    /// When the offer was created
    pub created_at: DateTimeUtc,
    /// When the offer was last modified
    pub updated_at: DateTimeUtc,
}

/// Defines relationships between Offer and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each offer belongs to one partner account
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::PartnerId",
        to = "super::user::Column::Id"
    )]
    Partner,
    /// One offer has many redemptions
    #[sea_orm(has_many = "super::redemption::Entity")]
    Redemptions,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Partner.def()
    }
}

impl Related<super::redemption::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Redemptions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
