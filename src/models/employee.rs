//! Employee model.
//!
//! This module defines the Employee struct representing a worker whose
//! payslips are computed by the engine. Employee records are supplied by
//! the caller; the engine never fetches or persists them.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Represents an employee whose pay is computed by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// The display code shown on payslips and reports (e.g., "EMP-0042").
    pub employee_code: String,
    /// The employee's full name.
    pub full_name: String,
    /// The employee's job designation (free text).
    pub designation: String,
    /// The agreed daily rate in the payroll currency. Must not be negative.
    pub daily_rate: Decimal,
    /// The date the employee joined the company.
    pub joined_date: NaiveDate,
    /// Whether the employee participates in the EPF/ETF scheme.
    #[serde(default)]
    pub epf_etf_enrolled: bool,
}
