//! Configuration loader and schema types.
//!
//! This module exposes the configuration schema that carries every static
//! table of the app (album categories, track lists, composer metadata) and
//! helpers to load it from disk.

mod load;
mod schema;

pub use load::{SettingsError, default_config_path, resolve_config_path};
pub use schema::*;
