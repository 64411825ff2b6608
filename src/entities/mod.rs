//! Entity module - Contains all SeaORM entity definitions for the database.
//! These entities represent the database tables and their relationships.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod eco_point;
pub mod eco_point_material;
pub mod material;
pub mod offer;
pub mod recycle_transaction;
pub mod redemption;
pub mod system_config;
pub mod user;

// Re-export specific types to avoid conflicts
pub use eco_point::{Column as EcoPointColumn, Entity as EcoPoint, Model as EcoPointModel};
pub use eco_point_material::{
    Column as EcoPointMaterialColumn, Entity as EcoPointMaterial, Model as EcoPointMaterialModel,
};
pub use material::{Column as MaterialColumn, Entity as Material, Model as MaterialModel};
pub use offer::{Column as OfferColumn, Entity as Offer, Model as OfferModel};
pub use recycle_transaction::{
    Column as RecycleTransactionColumn, Entity as RecycleTransaction,
    Model as RecycleTransactionModel,
};
pub use redemption::{Column as RedemptionColumn, Entity as Redemption, Model as RedemptionModel};
pub use system_config::{
    Column as SystemConfigColumn, Entity as SystemConfig, Model as SystemConfigModel,
};
pub use user::{Column as UserColumn, Entity as User, Model as UserModel};
