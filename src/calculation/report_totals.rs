//! Report aggregation.
//!
//! This module folds a collection of monthly payroll rows into the totals
//! shown in report footers: the entire-company monthly report, the
//! selected-employees summary, and the single-employee annual breakdown all
//! use the same fold.

use crate::models::{MonthlyPayrollRow, PayrollTotals};

/// Folds payroll rows into pointwise totals.
///
/// Every row contributes to every total; no row is excluded and none is
/// counted twice. `total_employees` is the row count. The company
/// contribution per row is resolved through
/// [`MonthlyPayrollRow::company_contribution`], which prefers the direct
/// `company_epf_etf` field and falls back to `employer_epf + etf_amount`.
///
/// The fold is a plain sum, so it is order-independent and idempotent:
/// re-running on the same rows, or on a permutation of them, produces an
/// identical result. An empty slice yields all-zero totals.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_report_totals;
/// use payroll_engine::models::PayrollTotals;
///
/// let totals = calculate_report_totals(&[]);
/// assert_eq!(totals, PayrollTotals::zero());
/// ```
pub fn calculate_report_totals(rows: &[MonthlyPayrollRow]) -> PayrollTotals {
    let mut totals = PayrollTotals::zero();

    for row in rows {
        totals.total_gross_pay += row.gross_pay;
        totals.total_net_pay += row.net_pay;
        totals.total_deductions += row.deductions;
        totals.total_employee_epf += row.employee_epf;
        totals.total_company_epf_etf += row.company_contribution();
    }

    totals.total_employees = rows.len() as u32;
    totals
}
