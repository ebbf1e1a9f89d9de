//! Configuration management for splitpane
//!
//! This module provides the `SettingsManager` for loading and saving
//! settings files in TOML format.

mod manager;
pub mod settings;

pub use manager::{SettingsError, SettingsManager, SettingsResult};
pub use settings::{LoggingSettings, Settings, StateSettings};
