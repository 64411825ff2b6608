//! Database configuration module.
//!
//! Handles the `SQLite` connection and table creation using `SeaORM`. Tables
//! are generated from the entity definitions with
//! `Schema::create_table_from_entity`, so the database schema always matches
//! the Rust struct definitions without manual SQL.

use crate::entities::{
    EcoPoint, EcoPointMaterial, Material, Offer, RecycleTransaction, Redemption, SystemConfig,
    User,
};
use crate::errors::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};

/// Gets the database URL from environment variable or returns default `SQLite` path.
pub fn get_database_url() -> String {
    std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://data/ecopoints.sqlite".to_string())
}

/// Establishes a connection to the database using the `DATABASE_URL`
/// environment variable, falling back to a default local `SQLite` file.
pub async fn create_connection() -> Result<DatabaseConnection> {
    Database::connect(get_database_url())
        .await
        .map_err(Into::into)
}

/// Creates all necessary database tables from the entity definitions.
/// Existing tables are left untouched, so startup is idempotent.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let mut statements = vec![
        schema.create_table_from_entity(User),
        schema.create_table_from_entity(Material),
        schema.create_table_from_entity(EcoPoint),
        schema.create_table_from_entity(EcoPointMaterial),
        schema.create_table_from_entity(Offer),
        schema.create_table_from_entity(RecycleTransaction),
        schema.create_table_from_entity(Redemption),
        schema.create_table_from_entity(SystemConfig),
    ];

    for statement in &mut statements {
        statement.if_not_exists();
        db.execute(builder.build(&*statement)).await?;
    }

    Ok(())
}
