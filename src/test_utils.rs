//! Shared test utilities for `ecopoints`.
//!
//! This module provides common helper functions for setting up test databases
//! and creating test entities with sensible defaults.

use crate::{
    core::offer,
    entities::{self, eco_point, eco_point_material, material, user},
    errors::Result,
};
use sea_orm::{DatabaseConnection, Set, prelude::*};

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Creates a test user with the given role and starting balance.
pub async fn create_test_user(
    db: &DatabaseConnection,
    name: &str,
    role: &str,
    points: i64,
) -> Result<user::Model> {
    let user = user::ActiveModel {
        name: Set(name.to_string()),
        phone: Set(Some("555-0000".to_string())),
        role: Set(role.to_string()),
        points: Set(points),
        ..Default::default()
    };
    user.insert(db).await.map_err(Into::into)
}

/// Creates a test material with the given rates.
pub async fn create_test_material(
    db: &DatabaseConnection,
    name: &str,
    points_per_kg: Option<f64>,
    points_per_unit: Option<i64>,
) -> Result<material::Model> {
    let material = material::ActiveModel {
        name: Set(name.to_string()),
        points_per_kg: Set(points_per_kg),
        points_per_unit: Set(points_per_unit),
        is_deleted: Set(false),
        ..Default::default()
    };
    material.insert(db).await.map_err(Into::into)
}

/// Creates a test eco point run by the given operator.
pub async fn create_test_eco_point(
    db: &DatabaseConnection,
    name: &str,
    operator_id: i64,
) -> Result<eco_point::Model> {
    let site = eco_point::ActiveModel {
        name: Set(name.to_string()),
        address: Set(Some("1 Recycling Way".to_string())),
        operator_id: Set(operator_id),
        ..Default::default()
    };
    site.insert(db).await.map_err(Into::into)
}

/// Adds a material to an eco point's accepted set.
pub async fn accept_material(
    db: &DatabaseConnection,
    eco_point_id: i64,
    material_id: i64,
) -> Result<eco_point_material::Model> {
    let link = eco_point_material::ActiveModel {
        eco_point_id: Set(eco_point_id),
        material_id: Set(material_id),
        ..Default::default()
    };
    link.insert(db).await.map_err(Into::into)
}

/// Creates a test offer through the core constructor (validation included).
pub async fn create_test_offer(
    db: &DatabaseConnection,
    partner_id: i64,
    title: &str,
    points: i64,
    quantity: i64,
) -> Result<entities::offer::Model> {
    offer::create_offer(db, partner_id, title.to_string(), None, points, quantity, None).await
}

/// A fully wired deposit scenario: operator, regular user, accepted material.
pub struct DepositEnv {
    /// Test database
    pub db: DatabaseConnection,
    /// Operator assigned to `eco_point`
    pub operator: user::Model,
    /// Regular user receiving the points (starts at 0)
    pub user: user::Model,
    /// Site run by `operator`, accepting `material`
    pub eco_point: eco_point::Model,
    /// Material rated 10 points/kg and 5 points/unit
    pub material: material::Model,
}

/// Sets up a complete deposit environment.
pub async fn setup_deposit_env() -> Result<DepositEnv> {
    let db = setup_test_db().await?;
    let operator = create_test_user(&db, "Operator", "operator", 0).await?;
    let user = create_test_user(&db, "Recycler", "regular", 0).await?;
    let eco_point = create_test_eco_point(&db, "Central Eco Point", operator.id).await?;
    let material = create_test_material(&db, "Aluminum", Some(10.0), Some(5)).await?;
    accept_material(&db, eco_point.id, material.id).await?;

    Ok(DepositEnv {
        db,
        operator,
        user,
        eco_point,
        material,
    })
}

/// A fully wired redemption scenario: partner with an in-stock offer and a
/// user holding enough points for several redemptions.
pub struct RedemptionEnv {
    /// Test database
    pub db: DatabaseConnection,
    /// Partner owning `offer`
    pub partner: user::Model,
    /// Regular user with 100 points
    pub user: user::Model,
    /// Offer costing 30 points with 2 units of inventory
    pub offer: entities::offer::Model,
}

/// Sets up a complete redemption environment.
pub async fn setup_redemption_env() -> Result<RedemptionEnv> {
    let db = setup_test_db().await?;
    let partner = create_test_user(&db, "Partner Shop", "partner", 0).await?;
    let user = create_test_user(&db, "Redeemer", "regular", 100).await?;
    let offer = create_test_offer(&db, partner.id, "Discount voucher", 30, 2).await?;

    Ok(RedemptionEnv {
        db,
        partner,
        user,
        offer,
    })
}
