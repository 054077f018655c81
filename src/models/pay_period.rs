//! Pay period model.
//!
//! A pay period identifies the calendar month a payslip or report covers.
//! The engine uses it only as a label on results; it enforces no
//! working-days ceiling against the actual worked-days input.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{EngineError, EngineResult};

/// A calendar month that a payslip or payroll report covers.
///
/// # Example
///
/// ```
/// use payroll_engine::models::PayPeriod;
///
/// let period = PayPeriod::new(2026, 4).unwrap();
/// assert_eq!(period.to_string(), "2026-04");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayPeriod {
    /// The calendar year.
    pub year: i32,
    /// The calendar month (1-12).
    pub month: u32,
}

impl PayPeriod {
    /// Creates a pay period, rejecting months outside 1-12.
    pub fn new(year: i32, month: u32) -> EngineResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(EngineError::InvalidInput {
                field: "month".to_string(),
                message: format!("month must be between 1 and 12, got {}", month),
            });
        }
        Ok(Self { year, month })
    }
}

impl fmt::Display for PayPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}
