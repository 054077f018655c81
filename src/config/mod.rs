//! Configuration loading and management for the Payroll Calculation Engine.
//!
//! This module provides functionality to load the statutory scheme
//! configuration (EPF/ETF contribution rates and scheme metadata) from a
//! YAML file.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/statutory.yaml").unwrap();
//! println!("Loaded scheme: {}", config.scheme().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{SchemeMetadata, StatutoryConfig, StatutoryRates};
