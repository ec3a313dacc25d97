//! Core utilities shared by the commands
//!
//! - `config`: run configuration file and its lookup order

pub mod config;

pub use config::{default_config_path, load_config, AnalysisConfig};
