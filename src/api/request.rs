//! Request types for the Payroll Calculation Engine API.
//!
//! This module defines the JSON request structures for the `/payslip` and
//! `/report/totals` endpoints.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{Employee, MonthlyPayrollRow};

/// Request body for the `/payslip` endpoint.
///
/// Contains the employee record, the pay period, and the worked-days count
/// for one single-period payslip calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayslipRequest {
    /// The employee the payslip is for.
    pub employee: EmployeeRequest,
    /// The pay period the payslip covers.
    pub period: PayPeriodRequest,
    /// The number of days worked in the period.
    pub worked_days: u32,
    /// Optional override of the employee's EPF/ETF enrolment, used by the
    /// manual salary calculator.
    #[serde(default)]
    pub apply_epf_etf: Option<bool>,
}

/// Employee information in a payslip request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeRequest {
    /// Unique identifier for the employee.
    pub id: String,
    /// The display code shown on payslips and reports.
    pub employee_code: String,
    /// The employee's full name.
    pub full_name: String,
    /// The employee's job designation.
    #[serde(default)]
    pub designation: String,
    /// The agreed daily rate.
    pub daily_rate: Decimal,
    /// The date the employee joined the company.
    pub joined_date: NaiveDate,
    /// Whether the employee participates in the EPF/ETF scheme.
    #[serde(default)]
    pub epf_etf_enrolled: bool,
}

/// Pay period information in a payslip request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayPeriodRequest {
    /// The calendar year.
    pub year: i32,
    /// The calendar month (1-12).
    pub month: u32,
}

/// Request body for the `/report/totals` endpoint.
///
/// The rows deserialize directly into the domain type so the lenient
/// numeric coercion for mixed upstream shapes applies at the boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportTotalsRequest {
    /// The monthly payroll rows to aggregate.
    pub rows: Vec<MonthlyPayrollRow>,
}

impl From<EmployeeRequest> for Employee {
    fn from(req: EmployeeRequest) -> Self {
        Employee {
            id: req.id,
            employee_code: req.employee_code,
            full_name: req.full_name,
            designation: req.designation,
            daily_rate: req.daily_rate,
            joined_date: req.joined_date,
            epf_etf_enrolled: req.epf_etf_enrolled,
        }
    }
}
