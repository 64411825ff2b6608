//! Counting-mode policy - the system-wide toggle between weight-based and
//! unit-based deposits.
//!
//! The mode lives in the `system_config` table and is read fresh at the start
//! of every deposit (read-through, no caching), since changing it changes the
//! point economics. Reads never fail the request that triggered them: a
//! missing key, an unreadable row or an unknown value all fall back to
//! [`CountingMode::Weight`] with a warning.

use crate::{
    entities::{SystemConfig, system_config},
    errors::Result,
};
use sea_orm::{ConnectionTrait, Set, prelude::*};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

const COUNTING_MODE_KEY: &str = "counting_mode";

/// How deposited recycling amounts are measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CountingMode {
    /// Amounts are weights in kilograms; points = round(weight × points_per_kg)
    Weight,
    /// Amounts are unit counts; points = quantity × points_per_unit, exact
    Unit,
}

impl CountingMode {
    /// The wire/storage representation: `"weight"` or `"unit"`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Weight => "weight",
            Self::Unit => "unit",
        }
    }

    /// Parses the storage representation; `None` for anything else.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "weight" => Some(Self::Weight),
            "unit" => Some(Self::Unit),
            _ => None,
        }
    }
}

impl fmt::Display for CountingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reads a raw configuration value by key.
pub async fn get_config<C>(db: &C, key: &str) -> Result<Option<String>>
where
    C: ConnectionTrait,
{
    let row = SystemConfig::find()
        .filter(system_config::Column::Key.eq(key))
        .one(db)
        .await?;
    Ok(row.map(|r| r.value))
}

/// Upserts a configuration value, refreshing `updated_at`.
pub async fn set_config<C>(db: &C, key: &str, value: &str) -> Result<()>
where
    C: ConnectionTrait,
{
    let now = chrono::Utc::now();
    let existing = SystemConfig::find()
        .filter(system_config::Column::Key.eq(key))
        .one(db)
        .await?;

    match existing {
        Some(row) => {
            let mut row: system_config::ActiveModel = row.into();
            row.value = Set(value.to_string());
            row.updated_at = Set(now);
            row.update(db).await?;
        }
        None => {
            let row = system_config::ActiveModel {
                key: Set(key.to_string()),
                value: Set(value.to_string()),
                updated_at: Set(now),
                ..Default::default()
            };
            row.insert(db).await?;
        }
    }

    Ok(())
}

/// Returns the currently active counting mode.
///
/// Falls back to [`CountingMode::Weight`] when the key is unset, holds an
/// unknown value, or the read itself fails; the caller's request proceeds
/// either way.
pub async fn get_counting_mode<C>(db: &C) -> CountingMode
where
    C: ConnectionTrait,
{
    match get_config(db, COUNTING_MODE_KEY).await {
        Ok(Some(value)) => CountingMode::parse(&value).unwrap_or_else(|| {
            warn!(value, "unknown counting_mode value, falling back to weight");
            CountingMode::Weight
        }),
        Ok(None) => CountingMode::Weight,
        Err(err) => {
            warn!(error = %err, "failed to read counting mode, falling back to weight");
            CountingMode::Weight
        }
    }
}

/// Switches the system-wide counting mode.
pub async fn set_counting_mode<C>(db: &C, mode: CountingMode) -> Result<()>
where
    C: ConnectionTrait,
{
    set_config(db, COUNTING_MODE_KEY, mode.as_str()).await
}
