//! User business logic - lookups and the atomic balance update primitive.

use crate::{
    entities::{User, user},
    errors::{Error, Result},
};
use sea_orm::{ConnectionTrait, prelude::*};

/// Finds a user by id, returning `None` if not found.
pub async fn get_user_by_id<C>(db: &C, user_id: i64) -> Result<Option<user::Model>>
where
    C: ConnectionTrait,
{
    User::find_by_id(user_id).one(db).await.map_err(Into::into)
}

/// Finds a user by id, failing with [`Error::UserNotFound`] if absent.
pub async fn require_user<C>(db: &C, user_id: i64) -> Result<user::Model>
where
    C: ConnectionTrait,
{
    get_user_by_id(db, user_id)
        .await?
        .ok_or(Error::UserNotFound { id: user_id })
}

/// Adjusts a user's point balance by atomically adding a delta.
///
/// Uses a single relative `UPDATE users SET points = points + ?` so that
/// concurrent adjustments never lose updates, instead of a read-modify-write
/// cycle. Only the deposit and redemption operations may call this, and only
/// inside the transaction that also writes the matching ledger row.
///
/// # Returns
/// The updated user model, as visible to `db` (the enclosing transaction).
pub async fn adjust_points_atomic<C>(db: &C, user_id: i64, delta: i64) -> Result<user::Model>
where
    C: ConnectionTrait,
{
    use sea_orm::sea_query::Expr;

    // Verify the user exists before issuing the blind update
    let _user = require_user(db, user_id).await?;

    User::update_many()
        .col_expr(
            user::Column::Points,
            Expr::col(user::Column::Points).add(delta),
        )
        .filter(user::Column::Id.eq(user_id))
        .exec(db)
        .await?;

    require_user(db, user_id).await
}
