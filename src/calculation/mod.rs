//! Calculation logic for the Payroll Calculation Engine.
//!
//! This module contains the two operations of the engine: single-period
//! payslip calculation (daily rate x worked days with EPF/ETF statutory
//! contributions) and report aggregation (folding monthly payroll rows
//! into footer totals).

mod payslip;
mod report_totals;

pub use payslip::calculate_payslip;
pub use report_totals::calculate_report_totals;
