//! SeaORM entity definitions

pub mod configuration;
