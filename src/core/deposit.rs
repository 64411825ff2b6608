//! Recycle-deposit operation - converts a deposit into points and atomically
//! credits the user.
//!
//! The precondition chain runs before any write: amount validation per the
//! active counting mode, operator↔eco-point ownership, accepted-material set,
//! rate configuration, user existence. Only then does the atomic phase start:
//! one database transaction inserts the immutable ledger row and credits the
//! balance, so a failure in either write rolls back both and no partial
//! credit is ever observable.

use crate::{
    core::{counting_mode, eco_point, material, user},
    entities::{
        RecycleTransaction, material as material_entity, recycle_transaction,
        user as user_entity,
    },
    errors::{Error, Result},
};
use chrono::{DateTime, Utc};
use sea_orm::{
    DatabaseConnection, FromQueryResult, JoinType, QueryOrder, QuerySelect, Set, TransactionTrait,
    prelude::*,
};
use serde::Serialize;
use std::collections::HashSet;
use tracing::info;

use counting_mode::CountingMode;

/// The validated deposit amount, tagged by the counting mode that required it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DepositAmount {
    /// Weight in kilograms (weight mode)
    Weight(f64),
    /// Unit count (unit mode)
    Units(i64),
}

impl DepositAmount {
    /// Builds the amount from the raw request fields, enforcing the field the
    /// active mode requires.
    pub fn from_request(
        mode: CountingMode,
        weight: Option<f64>,
        quantity: Option<i64>,
    ) -> Result<Self> {
        match mode {
            CountingMode::Weight => {
                let weight = weight.ok_or_else(|| Error::Validation {
                    message: "weight is required while counting by weight".to_string(),
                })?;
                if !weight.is_finite() || weight <= 0.0 {
                    return Err(Error::Validation {
                        message: format!("weight must be a positive number, got {weight}"),
                    });
                }
                Ok(Self::Weight(weight))
            }
            CountingMode::Unit => {
                let quantity = quantity.ok_or_else(|| Error::Validation {
                    message: "quantity is required while counting by unit".to_string(),
                })?;
                if quantity <= 0 {
                    return Err(Error::Validation {
                        message: format!("quantity must be positive, got {quantity}"),
                    });
                }
                Ok(Self::Units(quantity))
            }
        }
    }

    /// The (weight, quantity) column pair for the ledger row; the side the
    /// active mode did not use is zero.
    #[must_use]
    pub const fn as_columns(self) -> (f64, i64) {
        match self {
            Self::Weight(w) => (w, 0),
            Self::Units(n) => (0.0, n),
        }
    }
}

/// Computes the points a deposit earns.
///
/// Weight mode rounds to the nearest whole point; unit mode is exact integer
/// arithmetic. A missing rate for the amount's mode is a configuration fault
/// surfaced as [`Error::MissingRate`].
pub fn points_for(amount: DepositAmount, material: &material_entity::Model) -> Result<i64> {
    match amount {
        DepositAmount::Weight(weight) => {
            let rate = material.points_per_kg.ok_or(Error::MissingRate {
                material_id: material.id,
                mode: "weight",
            })?;
            #[allow(clippy::cast_possible_truncation)]
            Ok((weight * rate).round() as i64)
        }
        DepositAmount::Units(quantity) => {
            let rate = material.points_per_unit.ok_or(Error::MissingRate {
                material_id: material.id,
                mode: "unit",
            })?;
            quantity.checked_mul(rate).ok_or_else(|| Error::Validation {
                message: format!("quantity {quantity} overflows the point calculation"),
            })
        }
    }
}

/// The created ledger row joined with display names, for the API response.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DepositReceipt {
    /// Ledger row id
    pub id: i64,
    /// Deposited weight in kilograms (zero in unit mode)
    pub weight: f64,
    /// Deposited unit count (zero in weight mode)
    pub quantity: i64,
    /// Points credited
    pub points: i64,
    /// When the deposit was recorded
    pub date: DateTime<Utc>,
    /// Material display name
    pub material_name: String,
    /// Eco point display name
    pub eco_point_name: String,
}

/// Everything a successful deposit returns to the caller.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DepositOutcome {
    /// The immutable ledger row that was created
    pub transaction: DepositReceipt,
    /// The user with their updated balance
    pub user: user_entity::Model,
    /// The counting mode the deposit was computed under
    pub counting_mode: CountingMode,
}

/// Records a recycling deposit: validates, computes points, then atomically
/// writes the ledger row and credits the user.
pub async fn record_deposit(
    db: &DatabaseConnection,
    operator_id: i64,
    user_id: i64,
    eco_point_id: i64,
    material_id: i64,
    weight: Option<f64>,
    quantity: Option<i64>,
) -> Result<DepositOutcome> {
    // Mode is read fresh for every deposit; a switch is visible immediately
    let mode = counting_mode::get_counting_mode(db).await;
    let amount = DepositAmount::from_request(mode, weight, quantity)?;

    let site = eco_point::require_operated_by(db, eco_point_id, operator_id).await?;

    if !eco_point::accepts_material(db, eco_point_id, material_id).await? {
        return Err(Error::MaterialNotAccepted {
            eco_point_id,
            material_id,
        });
    }

    let material = material::require_material(db, material_id).await?;
    let points = points_for(amount, &material)?;
    let depositing_user = user::require_user(db, user_id).await?;

    // Atomic phase: ledger insert + balance credit commit or roll back together
    let txn = db.begin().await?;

    let (weight_column, quantity_column) = amount.as_columns();
    let row = recycle_transaction::ActiveModel {
        user_id: Set(depositing_user.id),
        eco_point_id: Set(site.id),
        material_id: Set(material.id),
        operator_id: Set(operator_id),
        weight: Set(weight_column),
        quantity: Set(quantity_column),
        points: Set(points),
        created_at: Set(Utc::now()),
        ..Default::default()
    };
    let row = row.insert(&txn).await?;

    let updated_user = user::adjust_points_atomic(&txn, user_id, points).await?;

    txn.commit().await?;

    info!(
        user_id,
        eco_point_id, material_id, points, %mode, "recorded recycling deposit"
    );

    Ok(DepositOutcome {
        transaction: DepositReceipt {
            id: row.id,
            weight: row.weight,
            quantity: row.quantity,
            points: row.points,
            date: row.created_at,
            material_name: material.name,
            eco_point_name: site.name,
        },
        user: updated_user,
        counting_mode: mode,
    })
}

/// One row of an eco point's transaction listing.
#[derive(Debug, Clone, Serialize, FromQueryResult)]
#[serde(rename_all = "camelCase")]
pub struct SiteTransaction {
    /// Ledger row id
    pub id: i64,
    /// Deposited weight in kilograms
    pub weight: f64,
    /// Deposited unit count
    pub quantity: i64,
    /// Points credited
    pub points: i64,
    /// When the deposit was recorded
    pub created_at: DateTime<Utc>,
    /// Material display name
    pub material_name: String,
    /// Depositing user's display name
    pub user_name: String,
    /// Depositing user's phone, if any
    pub user_phone: Option<String>,
}

/// Lists an eco point's ledger, newest first, for its designated operator.
pub async fn eco_point_transactions(
    db: &DatabaseConnection,
    operator_id: i64,
    eco_point_id: i64,
) -> Result<Vec<SiteTransaction>> {
    eco_point::require_operated_by(db, eco_point_id, operator_id).await?;

    RecycleTransaction::find()
        .select_only()
        .columns([
            recycle_transaction::Column::Id,
            recycle_transaction::Column::Weight,
            recycle_transaction::Column::Quantity,
            recycle_transaction::Column::Points,
            recycle_transaction::Column::CreatedAt,
        ])
        .column_as(material_entity::Column::Name, "material_name")
        .column_as(user_entity::Column::Name, "user_name")
        .column_as(user_entity::Column::Phone, "user_phone")
        .join(
            JoinType::InnerJoin,
            recycle_transaction::Relation::Material.def(),
        )
        .join(
            JoinType::InnerJoin,
            recycle_transaction::Relation::User.def(),
        )
        .filter(recycle_transaction::Column::EcoPointId.eq(eco_point_id))
        .order_by_desc(recycle_transaction::Column::CreatedAt)
        .into_model::<SiteTransaction>()
        .all(db)
        .await
        .map_err(Into::into)
}

/// Share of one material in a site's all-time collected weight.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialShare {
    /// Material display name
    pub name: String,
    /// All-time collected weight in kilograms
    pub total_weight: f64,
    /// Share of the site's total collected weight, percent, one decimal
    pub percentage: f64,
}

/// A site's ledger statistics: today's totals plus the all-time material mix.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EcoPointStats {
    /// Weight collected since midnight UTC, in kilograms
    pub total_weight_today: f64,
    /// Points credited since midnight UTC
    pub total_points_today: i64,
    /// Distinct users who deposited since midnight UTC
    pub users_served_today: usize,
    /// Material with the highest all-time collected weight
    pub top_material: Option<String>,
    /// All-time weight per material, heaviest first
    pub material_distribution: Vec<MaterialShare>,
}

#[derive(Debug, FromQueryResult)]
struct MaterialWeight {
    material_name: String,
    weight: f64,
}

/// Computes a site's ledger statistics for its designated operator.
///
/// The daily totals cover deposits since midnight UTC; the material
/// distribution covers the site's whole ledger and is weight-based, so
/// unit-mode deposits contribute to the counts but not to the mix.
pub async fn eco_point_stats(
    db: &DatabaseConnection,
    operator_id: i64,
    eco_point_id: i64,
) -> Result<EcoPointStats> {
    eco_point::require_operated_by(db, eco_point_id, operator_id).await?;

    let today_start = Utc::now().date_naive().and_time(chrono::NaiveTime::MIN).and_utc();
    let today = RecycleTransaction::find()
        .filter(recycle_transaction::Column::EcoPointId.eq(eco_point_id))
        .filter(recycle_transaction::Column::CreatedAt.gte(today_start))
        .all(db)
        .await?;

    let total_weight_today = today.iter().map(|row| row.weight).sum();
    let total_points_today = today.iter().map(|row| row.points).sum();
    let users_served_today = today
        .iter()
        .map(|row| row.user_id)
        .collect::<HashSet<_>>()
        .len();

    let weighed = RecycleTransaction::find()
        .select_only()
        .column(recycle_transaction::Column::Weight)
        .column_as(material_entity::Column::Name, "material_name")
        .join(
            JoinType::InnerJoin,
            recycle_transaction::Relation::Material.def(),
        )
        .filter(recycle_transaction::Column::EcoPointId.eq(eco_point_id))
        .into_model::<MaterialWeight>()
        .all(db)
        .await?;

    let mut by_material: Vec<(String, f64)> = Vec::new();
    for row in weighed {
        match by_material
            .iter_mut()
            .find(|(name, _)| *name == row.material_name)
        {
            Some((_, total)) => *total += row.weight,
            None => by_material.push((row.material_name, row.weight)),
        }
    }
    by_material.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    let site_total: f64 = by_material.iter().map(|(_, total)| total).sum();
    let material_distribution: Vec<MaterialShare> = by_material
        .into_iter()
        .map(|(name, total_weight)| MaterialShare {
            percentage: if site_total > 0.0 {
                (total_weight / site_total * 1000.0).round() / 10.0
            } else {
                0.0
            },
            name,
            total_weight,
        })
        .collect();
    let top_material = material_distribution.first().map(|share| share.name.clone());

    Ok(EcoPointStats {
        total_weight_today,
        total_points_today,
        users_served_today,
        top_material,
        material_distribution,
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::entities::User;
    use crate::test_utils::{
        accept_material, create_test_material, create_test_user, setup_deposit_env,
    };

    fn material_with_rates(per_kg: Option<f64>, per_unit: Option<i64>) -> material_entity::Model {
        material_entity::Model {
            id: 1,
            name: "Aluminum".to_string(),
            points_per_kg: per_kg,
            points_per_unit: per_unit,
            is_deleted: false,
        }
    }

    #[test]
    fn test_points_weight_mode_rounds() {
        let material = material_with_rates(Some(10.0), None);
        let points = points_for(DepositAmount::Weight(2.5), &material).unwrap();
        assert_eq!(points, 25);

        // Rounds to nearest, not truncates
        let points = points_for(DepositAmount::Weight(0.26), &material).unwrap();
        assert_eq!(points, 3);
        let points = points_for(DepositAmount::Weight(0.24), &material).unwrap();
        assert_eq!(points, 2);
    }

    #[test]
    fn test_points_unit_mode_exact() {
        let material = material_with_rates(None, Some(5));
        let points = points_for(DepositAmount::Units(3), &material).unwrap();
        assert_eq!(points, 15);
    }

    #[test]
    fn test_points_unit_mode_overflow_rejected() {
        let material = material_with_rates(None, Some(5));
        let result = points_for(DepositAmount::Units(i64::MAX / 2), &material);
        assert!(matches!(result.unwrap_err(), Error::Validation { .. }));
    }

    #[test]
    fn test_points_missing_rate() {
        let material = material_with_rates(None, Some(5));
        let result = points_for(DepositAmount::Weight(1.0), &material);
        assert!(matches!(
            result.unwrap_err(),
            Error::MissingRate { mode: "weight", .. }
        ));

        let material = material_with_rates(Some(10.0), None);
        let result = points_for(DepositAmount::Units(1), &material);
        assert!(matches!(
            result.unwrap_err(),
            Error::MissingRate { mode: "unit", .. }
        ));
    }

    #[test]
    fn test_amount_validation_weight_mode() {
        let mode = CountingMode::Weight;

        assert!(matches!(
            DepositAmount::from_request(mode, None, Some(3)).unwrap_err(),
            Error::Validation { .. }
        ));
        assert!(matches!(
            DepositAmount::from_request(mode, Some(0.0), None).unwrap_err(),
            Error::Validation { .. }
        ));
        assert!(matches!(
            DepositAmount::from_request(mode, Some(-1.5), None).unwrap_err(),
            Error::Validation { .. }
        ));
        assert!(matches!(
            DepositAmount::from_request(mode, Some(f64::NAN), None).unwrap_err(),
            Error::Validation { .. }
        ));

        let amount = DepositAmount::from_request(mode, Some(2.5), None).unwrap();
        assert_eq!(amount, DepositAmount::Weight(2.5));
        assert_eq!(amount.as_columns(), (2.5, 0));
    }

    #[test]
    fn test_amount_validation_unit_mode() {
        let mode = CountingMode::Unit;

        assert!(matches!(
            DepositAmount::from_request(mode, Some(2.5), None).unwrap_err(),
            Error::Validation { .. }
        ));
        assert!(matches!(
            DepositAmount::from_request(mode, None, Some(0)).unwrap_err(),
            Error::Validation { .. }
        ));

        let amount = DepositAmount::from_request(mode, None, Some(3)).unwrap();
        assert_eq!(amount, DepositAmount::Units(3));
        assert_eq!(amount.as_columns(), (0.0, 3));
    }

    #[tokio::test]
    async fn test_validation_rejects_before_any_lookup() -> Result<()> {
        // A connection with no tables: the mode read falls back to weight and
        // any lookup would surface Error::Database, so the Validation error
        // proves the missing-weight rejection fires first.
        let db = sea_orm::Database::connect("sqlite::memory:").await?;

        let result = record_deposit(&db, 1, 2, 3, 4, None, None).await;
        assert!(matches!(result.unwrap_err(), Error::Validation { .. }));

        Ok(())
    }

    #[tokio::test]
    async fn test_deposit_weight_mode_integration() -> Result<()> {
        let env = setup_deposit_env().await?;

        let outcome = record_deposit(
            &env.db,
            env.operator.id,
            env.user.id,
            env.eco_point.id,
            env.material.id,
            Some(2.5),
            None,
        )
        .await?;

        // round(2.5 kg × 10 points/kg) = 25
        assert_eq!(outcome.transaction.points, 25);
        assert_eq!(outcome.transaction.weight, 2.5);
        assert_eq!(outcome.transaction.quantity, 0);
        assert_eq!(outcome.transaction.material_name, env.material.name);
        assert_eq!(outcome.transaction.eco_point_name, env.eco_point.name);
        assert_eq!(outcome.counting_mode, CountingMode::Weight);
        assert_eq!(outcome.user.points, env.user.points + 25);

        // Exactly one ledger row, matching the credit
        let rows = RecycleTransaction::find().all(&env.db).await?;
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].points, 25);
        assert_eq!(rows[0].operator_id, env.operator.id);

        // Balance persisted
        let user = User::find_by_id(env.user.id).one(&env.db).await?.unwrap();
        assert_eq!(user.points, env.user.points + 25);

        Ok(())
    }

    #[tokio::test]
    async fn test_deposit_unit_mode_integration() -> Result<()> {
        let env = setup_deposit_env().await?;
        counting_mode::set_counting_mode(&env.db, CountingMode::Unit).await?;

        let outcome = record_deposit(
            &env.db,
            env.operator.id,
            env.user.id,
            env.eco_point.id,
            env.material.id,
            None,
            Some(3),
        )
        .await?;

        // 3 units × 5 points/unit = 15, exact
        assert_eq!(outcome.transaction.points, 15);
        assert_eq!(outcome.transaction.weight, 0.0);
        assert_eq!(outcome.transaction.quantity, 3);
        assert_eq!(outcome.counting_mode, CountingMode::Unit);
        assert_eq!(outcome.user.points, env.user.points + 15);

        Ok(())
    }

    #[tokio::test]
    async fn test_mode_switch_is_read_through() -> Result<()> {
        let env = setup_deposit_env().await?;

        // Weight mode deposit succeeds
        record_deposit(
            &env.db,
            env.operator.id,
            env.user.id,
            env.eco_point.id,
            env.material.id,
            Some(1.0),
            None,
        )
        .await?;

        // After the switch, the very next deposit requires quantity
        counting_mode::set_counting_mode(&env.db, CountingMode::Unit).await?;
        let result = record_deposit(
            &env.db,
            env.operator.id,
            env.user.id,
            env.eco_point.id,
            env.material.id,
            Some(1.0),
            None,
        )
        .await;
        assert!(matches!(result.unwrap_err(), Error::Validation { .. }));

        Ok(())
    }

    #[tokio::test]
    async fn test_deposit_unauthorized_operator_writes_nothing() -> Result<()> {
        let env = setup_deposit_env().await?;
        let other = create_test_user(&env.db, "Other", "operator", 0).await?;

        let result = record_deposit(
            &env.db,
            other.id,
            env.user.id,
            env.eco_point.id,
            env.material.id,
            Some(2.5),
            None,
        )
        .await;
        assert!(matches!(result.unwrap_err(), Error::NotAuthorized { .. }));

        // No ledger row, no balance change
        assert!(RecycleTransaction::find().all(&env.db).await?.is_empty());
        let user = User::find_by_id(env.user.id).one(&env.db).await?.unwrap();
        assert_eq!(user.points, env.user.points);

        Ok(())
    }

    #[tokio::test]
    async fn test_deposit_material_not_accepted() -> Result<()> {
        let env = setup_deposit_env().await?;
        let refused = create_test_material(&env.db, "Styrofoam", Some(1.0), None).await?;

        let result = record_deposit(
            &env.db,
            env.operator.id,
            env.user.id,
            env.eco_point.id,
            refused.id,
            Some(2.5),
            None,
        )
        .await;
        assert!(matches!(
            result.unwrap_err(),
            Error::MaterialNotAccepted { .. }
        ));
        assert!(RecycleTransaction::find().all(&env.db).await?.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn test_deposit_missing_unit_rate() -> Result<()> {
        let env = setup_deposit_env().await?;
        counting_mode::set_counting_mode(&env.db, CountingMode::Unit).await?;

        // Material accepted at the site but with no per-unit rate
        let no_unit_rate =
            create_test_material(&env.db, "Cardboard", Some(2.0), None).await?;
        accept_material(&env.db, env.eco_point.id, no_unit_rate.id).await?;

        let result = record_deposit(
            &env.db,
            env.operator.id,
            env.user.id,
            env.eco_point.id,
            no_unit_rate.id,
            None,
            Some(2),
        )
        .await;
        assert!(matches!(
            result.unwrap_err(),
            Error::MissingRate { mode: "unit", .. }
        ));
        assert!(RecycleTransaction::find().all(&env.db).await?.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn test_deposit_unknown_references() -> Result<()> {
        let env = setup_deposit_env().await?;

        let result = record_deposit(
            &env.db,
            env.operator.id,
            env.user.id,
            999,
            env.material.id,
            Some(1.0),
            None,
        )
        .await;
        assert!(matches!(
            result.unwrap_err(),
            Error::EcoPointNotFound { id: 999 }
        ));

        let result = record_deposit(
            &env.db,
            env.operator.id,
            999,
            env.eco_point.id,
            env.material.id,
            Some(1.0),
            None,
        )
        .await;
        assert!(matches!(result.unwrap_err(), Error::UserNotFound { id: 999 }));
        assert!(RecycleTransaction::find().all(&env.db).await?.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn test_eco_point_transactions_listing() -> Result<()> {
        let env = setup_deposit_env().await?;

        record_deposit(
            &env.db,
            env.operator.id,
            env.user.id,
            env.eco_point.id,
            env.material.id,
            Some(1.0),
            None,
        )
        .await?;
        record_deposit(
            &env.db,
            env.operator.id,
            env.user.id,
            env.eco_point.id,
            env.material.id,
            Some(2.0),
            None,
        )
        .await?;

        let rows = eco_point_transactions(&env.db, env.operator.id, env.eco_point.id).await?;
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].material_name, env.material.name);
        assert_eq!(rows[0].user_name, env.user.name);
        // Newest first
        assert!(rows[0].created_at >= rows[1].created_at);

        // Ownership enforced on the listing too
        let other = create_test_user(&env.db, "Other", "operator", 0).await?;
        let result = eco_point_transactions(&env.db, other.id, env.eco_point.id).await;
        assert!(matches!(result.unwrap_err(), Error::NotAuthorized { .. }));

        Ok(())
    }

    #[tokio::test]
    async fn test_eco_point_stats() -> Result<()> {
        let env = setup_deposit_env().await?;
        let second = create_test_user(&env.db, "Second", "regular", 0).await?;
        let glass = create_test_material(&env.db, "Glass", Some(2.0), None).await?;
        accept_material(&env.db, env.eco_point.id, glass.id).await?;

        // Aluminum: 3 kg + 1 kg across two users; Glass: 1 kg
        record_deposit(
            &env.db,
            env.operator.id,
            env.user.id,
            env.eco_point.id,
            env.material.id,
            Some(3.0),
            None,
        )
        .await?;
        record_deposit(
            &env.db,
            env.operator.id,
            second.id,
            env.eco_point.id,
            env.material.id,
            Some(1.0),
            None,
        )
        .await?;
        record_deposit(
            &env.db,
            env.operator.id,
            env.user.id,
            env.eco_point.id,
            glass.id,
            Some(1.0),
            None,
        )
        .await?;

        let stats = eco_point_stats(&env.db, env.operator.id, env.eco_point.id).await?;
        assert_eq!(stats.total_weight_today, 5.0);
        // 3×10 + 1×10 + 1×2
        assert_eq!(stats.total_points_today, 42);
        assert_eq!(stats.users_served_today, 2);
        assert_eq!(stats.top_material.as_deref(), Some("Aluminum"));

        assert_eq!(stats.material_distribution.len(), 2);
        assert_eq!(stats.material_distribution[0].name, "Aluminum");
        assert_eq!(stats.material_distribution[0].total_weight, 4.0);
        assert_eq!(stats.material_distribution[0].percentage, 80.0);
        assert_eq!(stats.material_distribution[1].name, "Glass");
        assert_eq!(stats.material_distribution[1].percentage, 20.0);

        // Ownership enforced on the stats too
        let other = create_test_user(&env.db, "Other", "operator", 0).await?;
        let result = eco_point_stats(&env.db, other.id, env.eco_point.id).await;
        assert!(matches!(result.unwrap_err(), Error::NotAuthorized { .. }));

        Ok(())
    }

    #[tokio::test]
    async fn test_eco_point_stats_empty_site() -> Result<()> {
        let env = setup_deposit_env().await?;

        let stats = eco_point_stats(&env.db, env.operator.id, env.eco_point.id).await?;
        assert_eq!(stats.total_weight_today, 0.0);
        assert_eq!(stats.total_points_today, 0);
        assert_eq!(stats.users_served_today, 0);
        assert!(stats.top_material.is_none());
        assert!(stats.material_distribution.is_empty());

        Ok(())
    }
}
