//! Payroll Calculation Engine for EPF/ETF statutory schemes
//!
//! This crate computes single-period payslips (daily rate x worked days, with
//! Employees' Provident Fund and Employees' Trust Fund contributions) and
//! aggregates monthly payroll rows into report totals for payroll
//! administration clients.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
