/// Database configuration and connection management
pub mod database;

/// Material seed configuration loading from config.toml
pub mod materials;
