//! Configuration types for the statutory scheme.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML configuration file.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Metadata about the statutory contribution scheme.
#[derive(Debug, Clone, Deserialize)]
pub struct SchemeMetadata {
    /// A short code identifying the scheme (e.g., "EPF-ETF-LK").
    pub code: String,
    /// The human-readable name of the scheme.
    pub name: String,
    /// The version or effective date of the configured rates.
    pub version: String,
    /// URL to the official scheme documentation.
    pub source_url: String,
}

/// The statutory contribution rates, expressed as fractions of basic salary.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StatutoryRates {
    /// The employee-side EPF deduction rate.
    pub employee_epf: Decimal,
    /// The employer-side EPF contribution rate.
    pub employer_epf: Decimal,
    /// The employer-side ETF contribution rate.
    pub etf: Decimal,
}

impl Default for StatutoryRates {
    /// The standard scheme: 8% employee EPF, 12% employer EPF, 3% ETF.
    fn default() -> Self {
        Self {
            employee_epf: Decimal::new(8, 2),
            employer_epf: Decimal::new(12, 2),
            etf: Decimal::new(3, 2),
        }
    }
}

/// The complete statutory configuration loaded from YAML.
#[derive(Debug, Clone, Deserialize)]
pub struct StatutoryConfig {
    /// Scheme metadata.
    pub scheme: SchemeMetadata,
    /// Contribution rates.
    pub rates: StatutoryRates,
}
