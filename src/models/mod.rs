//! Core data models for the Payroll Calculation Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod employee;
mod pay_period;
mod payslip;
mod report;

pub use employee::Employee;
pub use pay_period::PayPeriod;
pub use payslip::{Payslip, PayslipInput, PayslipStatement};
pub use report::{MonthlyPayrollRow, PayrollTotals, ReportSummary};
