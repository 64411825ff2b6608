//! Core business logic - framework-agnostic operations over the points ledger.
//!
//! Everything here takes a database handle and returns [`crate::errors::Result`];
//! nothing in this layer knows about HTTP. The two balance-mutating operations
//! ([`deposit`] and [`redemption`]) are the only code paths in the crate that
//! touch `users.points` or `offers.quantity`.

/// Counting-mode policy and system-config key-value access
pub mod counting_mode;
/// Recycle-deposit operation: material in, points credited
pub mod deposit;
/// Eco point lookups, operator-ownership checks, guarded delete
pub mod eco_point;
/// Material lookups and guarded soft delete
pub mod material;
/// Offer creation, lookups and guarded delete
pub mod offer;
/// Offer-redemption operation: points debited, inventory decremented
pub mod redemption;
/// User lookups and the atomic balance update primitive
pub mod user;
