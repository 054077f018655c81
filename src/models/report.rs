//! Payroll report models.
//!
//! This module contains the [`MonthlyPayrollRow`] rows supplied by upstream
//! report endpoints and the [`PayrollTotals`] footer produced by aggregation.
//!
//! Upstream data shapes vary between the live-report and the historical
//! breakdown endpoints: numeric fields may arrive as JSON numbers or as
//! strings, fields may be missing entirely, and the company contribution is
//! sometimes a single `company_epf_etf` figure and sometimes split into
//! `employer_epf` and `etf_amount`. Deserialization here is deliberately
//! lenient: anything that cannot be read as a number counts as zero, so a
//! partially populated row never fails the whole report.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;
use uuid::Uuid;

/// One employee's payroll figures for one month, as supplied by the
/// upstream report endpoints.
///
/// # Example
///
/// ```
/// use payroll_engine::models::MonthlyPayrollRow;
///
/// // String-typed numbers and a split company contribution both parse.
/// let json = r#"{
///     "employee_id": "emp_001",
///     "employee_code": "EMP-0042",
///     "employee_name": "Nimal Perera",
///     "worked_days": "22",
///     "gross_pay": "22000",
///     "net_pay": 20240,
///     "deductions": "1760",
///     "employee_epf": "1760",
///     "employer_epf": "2640",
///     "etf_amount": "660"
/// }"#;
///
/// let row: MonthlyPayrollRow = serde_json::from_str(json).unwrap();
/// assert_eq!(row.company_contribution().to_string(), "3300");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyPayrollRow {
    /// The employee's unique identifier.
    #[serde(default)]
    pub employee_id: String,
    /// The employee's display code.
    #[serde(default)]
    pub employee_code: String,
    /// The employee's full name.
    #[serde(default)]
    pub employee_name: String,
    /// Days worked in the month. Display data only; never aggregated.
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub worked_days: Decimal,
    /// Gross pay for the month.
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub gross_pay: Decimal,
    /// Net pay for the month.
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub net_pay: Decimal,
    /// Total deductions for the month.
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub deductions: Decimal,
    /// The employee-side EPF deduction for the month.
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub employee_epf: Decimal,
    /// The combined employer EPF+ETF contribution, when the upstream
    /// endpoint supplies it directly.
    #[serde(
        default,
        deserialize_with = "lenient_optional_decimal",
        skip_serializing_if = "Option::is_none"
    )]
    pub company_epf_etf: Option<Decimal>,
    /// The employer EPF contribution, when supplied split.
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub employer_epf: Decimal,
    /// The employer ETF contribution, when supplied split.
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub etf_amount: Decimal,
}

impl MonthlyPayrollRow {
    /// Resolves the company-side contribution for this row.
    ///
    /// Uses the direct `company_epf_etf` field when present, otherwise
    /// composes it from the split `employer_epf` and `etf_amount` fields.
    pub fn company_contribution(&self) -> Decimal {
        self.company_epf_etf
            .unwrap_or(self.employer_epf + self.etf_amount)
    }
}

/// Pointwise sums across a collection of monthly payroll rows, used for
/// footer rows in on-screen tables and exported documents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollTotals {
    /// The number of rows aggregated.
    pub total_employees: u32,
    /// Sum of gross pay across all rows.
    pub total_gross_pay: Decimal,
    /// Sum of net pay across all rows.
    pub total_net_pay: Decimal,
    /// Sum of deductions across all rows.
    pub total_deductions: Decimal,
    /// Sum of employee-side EPF across all rows.
    pub total_employee_epf: Decimal,
    /// Sum of company-side EPF+ETF contributions across all rows.
    pub total_company_epf_etf: Decimal,
}

impl PayrollTotals {
    /// Returns all-zero totals, the aggregate of an empty report.
    pub fn zero() -> Self {
        Self {
            total_employees: 0,
            total_gross_pay: Decimal::ZERO,
            total_net_pay: Decimal::ZERO,
            total_deductions: Decimal::ZERO,
            total_employee_epf: Decimal::ZERO,
            total_company_epf_etf: Decimal::ZERO,
        }
    }
}

/// Report totals together with their calculation context, as returned by
/// the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSummary {
    /// Unique identifier for this aggregation.
    pub report_id: Uuid,
    /// When the aggregation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the aggregation.
    pub engine_version: String,
    /// The aggregated totals.
    pub totals: PayrollTotals,
}

/// Coerces a loosely-typed upstream value into a `Decimal`.
///
/// Numbers and numeric strings parse; anything else (null, objects, text
/// like "N/A") is zero.
fn coerce_decimal(value: &serde_json::Value) -> Decimal {
    match value {
        serde_json::Value::Number(n) => {
            Decimal::from_str(&n.to_string()).unwrap_or(Decimal::ZERO)
        }
        serde_json::Value::String(s) => Decimal::from_str(s.trim()).unwrap_or(Decimal::ZERO),
        _ => Decimal::ZERO,
    }
}

fn lenient_decimal<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(coerce_decimal(&value))
}

fn lenient_optional_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Null => None,
        other => Some(coerce_decimal(&other)),
    })
}
