//! Payslip models for the Payroll Calculation Engine.
//!
//! This module contains the [`PayslipInput`] consumed by the calculation,
//! the [`Payslip`] value object it produces, and the [`PayslipStatement`]
//! wrapper returned to API callers.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Employee, PayPeriod};

/// The inputs for a single-period payslip calculation.
///
/// Constructed per calculation request and never persisted by the engine.
///
/// # Example
///
/// ```
/// use payroll_engine::models::PayslipInput;
/// use rust_decimal::Decimal;
///
/// let input = PayslipInput {
///     daily_rate: Decimal::from(1000),
///     worked_days: 22,
///     apply_epf_etf: true,
/// };
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PayslipInput {
    /// The employee's daily rate. Must not be negative.
    pub daily_rate: Decimal,
    /// The number of days worked in the period.
    pub worked_days: u32,
    /// Whether the employee-side EPF deduction applies.
    pub apply_epf_etf: bool,
}

impl PayslipInput {
    /// Builds a payslip input from an employee record.
    ///
    /// The EPF/ETF flag follows the employee's enrolment unless the caller
    /// supplies an explicit override (the manual calculator checkbox).
    pub fn for_employee(employee: &Employee, worked_days: u32, apply_epf_etf: Option<bool>) -> Self {
        Self {
            daily_rate: employee.daily_rate,
            worked_days,
            apply_epf_etf: apply_epf_etf.unwrap_or(employee.epf_etf_enrolled),
        }
    }
}

/// The result of one payslip calculation.
///
/// All monetary fields are non-negative decimals carrying the exact values
/// that display and export collaborators render; no rounding is applied
/// inside the engine.
///
/// # Example
///
/// ```
/// use payroll_engine::models::Payslip;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let payslip = Payslip {
///     basic_salary: Decimal::from_str("22000").unwrap(),
///     employee_epf: Decimal::from_str("1760.00").unwrap(),
///     employer_epf: Decimal::from_str("2640.00").unwrap(),
///     employer_etf: Decimal::from_str("660.00").unwrap(),
///     total_deductions: Decimal::from_str("1760.00").unwrap(),
///     net_salary: Decimal::from_str("20240.00").unwrap(),
///     worked_days: 22,
///     daily_rate: Decimal::from_str("1000").unwrap(),
///     epf_etf_applied: true,
/// };
/// assert!(payslip.net_salary <= payslip.basic_salary);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payslip {
    /// Gross pay for the period: daily rate x worked days.
    pub basic_salary: Decimal,
    /// The employee-side EPF deduction (8% of basic when applied).
    pub employee_epf: Decimal,
    /// The employer-side EPF contribution (12% of basic). Informational;
    /// never deducted from net pay.
    pub employer_epf: Decimal,
    /// The employer-side ETF contribution (3% of basic). Informational;
    /// never deducted from net pay.
    pub employer_etf: Decimal,
    /// Total deductions from gross pay. Equals `employee_epf`.
    pub total_deductions: Decimal,
    /// Net pay: basic salary minus total deductions.
    pub net_salary: Decimal,
    /// The worked-days input, echoed for display and export.
    pub worked_days: u32,
    /// The daily-rate input, echoed for display and export.
    pub daily_rate: Decimal,
    /// Whether the employee-side EPF deduction was applied.
    pub epf_etf_applied: bool,
}

/// A payslip together with its calculation context, as returned by the API.
///
/// Mirrors what a payslip document renders: who the payslip is for, which
/// period it covers, and when and by which engine version it was produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayslipStatement {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The ID of the employee the payslip is for.
    pub employee_id: String,
    /// The display code of the employee.
    pub employee_code: String,
    /// The pay period the payslip covers.
    pub period: PayPeriod,
    /// The calculated payslip.
    pub payslip: Payslip,
}
