//! Material seed configuration loading from config.toml
//!
//! The materials defined in config.toml are inserted on startup when they are
//! not already present, so a fresh database comes up with a usable material
//! catalog. Existing rows are never overwritten; rate changes go through the
//! normal admin flow.

use crate::{
    entities::{Material, material},
    errors::{Error, Result},
};
use sea_orm::{DatabaseConnection, Set, prelude::*};
use serde::Deserialize;
use std::path::Path;
use tracing::info;

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Deserialize)]
pub struct Config {
    /// List of material configurations to seed
    pub materials: Vec<MaterialConfig>,
}

/// Configuration for a single material
#[derive(Debug, Deserialize, Clone)]
pub struct MaterialConfig {
    /// Name of the material
    pub name: String,
    /// Points credited per kilogram in weight mode
    pub points_per_kg: Option<f64>,
    /// Points credited per unit in unit mode
    pub points_per_unit: Option<i64>,
}

/// Loads material configuration from a TOML file.
///
/// # Errors
/// Returns an error if the file cannot be read or the TOML is invalid.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!("failed to read config file: {e}"),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("failed to parse config.toml: {e}"),
    })
}

/// Loads material configuration from the default location (./config.toml)
pub fn load_default_config() -> Result<Config> {
    load_config("config.toml")
}

/// Inserts the configured materials that are not already present (by name).
pub async fn seed_materials(db: &DatabaseConnection, config: &Config) -> Result<usize> {
    let mut inserted = 0;

    for entry in &config.materials {
        let existing = Material::find()
            .filter(material::Column::Name.eq(entry.name.as_str()))
            .one(db)
            .await?;
        if existing.is_some() {
            continue;
        }

        let row = material::ActiveModel {
            name: Set(entry.name.clone()),
            points_per_kg: Set(entry.points_per_kg),
            points_per_unit: Set(entry.points_per_unit),
            is_deleted: Set(false),
            ..Default::default()
        };
        row.insert(db).await?;
        inserted += 1;
    }

    if inserted > 0 {
        info!(inserted, "seeded materials from config");
    }

    Ok(inserted)
}
