//! Single-period payslip calculation.
//!
//! This module computes one employee's payslip for one period from a daily
//! rate, a worked-days count, and an EPF/ETF participation flag.

use rust_decimal::Decimal;

use crate::config::StatutoryRates;
use crate::error::{EngineError, EngineResult};
use crate::models::{Payslip, PayslipInput};

/// Computes a payslip from the given input and statutory rates.
///
/// The calculation is a deterministic pure function of its inputs:
///
/// 1. `basic_salary = daily_rate * worked_days`
/// 2. `employer_epf = basic_salary * rates.employer_epf` (12%), always computed
/// 3. `employer_etf = basic_salary * rates.etf` (3%), always computed
/// 4. `employee_epf = basic_salary * rates.employee_epf` (8%) when
///    `apply_epf_etf` is set, zero otherwise
/// 5. `total_deductions = employee_epf` (employer contributions are
///    informational and never subtracted)
/// 6. `net_salary = basic_salary - total_deductions`
///
/// Employer contributions are computed regardless of the participation flag;
/// only the employee-side deduction is gated on it. `net_salary` never
/// exceeds `basic_salary`, and equals it exactly when the flag is off.
///
/// # Errors
///
/// Returns `InvalidInput` if `daily_rate` is negative. Worked days are a
/// `u32`, so negative values are unrepresentable; no upper bound is enforced
/// (a working-days ceiling is a display concern, not a calculation one).
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_payslip;
/// use payroll_engine::config::StatutoryRates;
/// use payroll_engine::models::PayslipInput;
/// use rust_decimal::Decimal;
///
/// let input = PayslipInput {
///     daily_rate: Decimal::from(1000),
///     worked_days: 22,
///     apply_epf_etf: true,
/// };
///
/// let payslip = calculate_payslip(&input, &StatutoryRates::default()).unwrap();
/// assert_eq!(payslip.basic_salary, Decimal::from(22000));
/// assert_eq!(payslip.net_salary, Decimal::from(20240));
/// ```
pub fn calculate_payslip(input: &PayslipInput, rates: &StatutoryRates) -> EngineResult<Payslip> {
    if input.daily_rate < Decimal::ZERO {
        return Err(EngineError::InvalidInput {
            field: "daily_rate".to_string(),
            message: format!("must not be negative, got {}", input.daily_rate),
        });
    }

    let basic_salary = input.daily_rate * Decimal::from(input.worked_days);

    // Employer contributions are informational and always computed.
    let employer_epf = basic_salary * rates.employer_epf;
    let employer_etf = basic_salary * rates.etf;

    let employee_epf = if input.apply_epf_etf {
        basic_salary * rates.employee_epf
    } else {
        Decimal::ZERO
    };

    let total_deductions = employee_epf;
    let net_salary = basic_salary - total_deductions;

    Ok(Payslip {
        basic_salary,
        employee_epf,
        employer_epf,
        employer_etf,
        total_deductions,
        net_salary,
        worked_days: input.worked_days,
        daily_rate: input.daily_rate,
        epf_etf_applied: input.apply_epf_etf,
    })
}
