//! HTTP API module for the Payroll Calculation Engine.
//!
//! This module provides the REST API endpoints for computing payslips and
//! aggregating payroll report totals.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{EmployeeRequest, PayslipRequest, ReportTotalsRequest};
pub use response::ApiError;
pub use state::AppState;
