//! Performance benchmarks for the Payroll Calculation Engine.
//!
//! This benchmark suite verifies that the engine meets performance targets:
//! - Single payslip calculation: < 10μs mean
//! - Single payslip request over HTTP: < 1ms mean
//! - Report aggregation of 100 rows: < 100μs mean
//! - Report aggregation of 1000 rows: < 1ms mean
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rust_decimal::Decimal;

use payroll_engine::api::{create_router, AppState};
use payroll_engine::calculation::{calculate_payslip, calculate_report_totals};
use payroll_engine::config::{ConfigLoader, StatutoryRates};
use payroll_engine::models::{MonthlyPayrollRow, PayslipInput};

use axum::{body::Body, http::Request};
use tower::ServiceExt;

/// Creates a test state with loaded configuration.
fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/statutory.yaml").expect("Failed to load config");
    AppState::new(config)
}

fn create_payslip_body() -> String {
    serde_json::json!({
        "employee": {
            "id": "emp_bench_001",
            "employee_code": "EMP-9001",
            "full_name": "Bench Employee",
            "designation": "Engineer",
            "daily_rate": "1000",
            "joined_date": "2023-06-01",
            "epf_etf_enrolled": true
        },
        "period": { "year": 2026, "month": 4 },
        "worked_days": 22
    })
    .to_string()
}

fn create_rows(count: usize) -> Vec<MonthlyPayrollRow> {
    (0..count)
        .map(|i| MonthlyPayrollRow {
            employee_id: format!("emp_{:04}", i),
            employee_code: format!("EMP-{:04}", i),
            employee_name: "Bench Employee".to_string(),
            worked_days: Decimal::from(22),
            gross_pay: Decimal::from(22000),
            net_pay: Decimal::from(20240),
            deductions: Decimal::from(1760),
            employee_epf: Decimal::from(1760),
            company_epf_etf: if i % 2 == 0 {
                Some(Decimal::from(3300))
            } else {
                None
            },
            employer_epf: Decimal::from(2640),
            etf_amount: Decimal::from(660),
        })
        .collect()
}

/// Benchmark: payslip calculation as a pure function call.
fn bench_payslip_calculation(c: &mut Criterion) {
    let rates = StatutoryRates::default();
    let input = PayslipInput {
        daily_rate: Decimal::from(1000),
        worked_days: 22,
        apply_epf_etf: true,
    };

    c.bench_function("payslip_calculation", |b| {
        b.iter(|| {
            let payslip = calculate_payslip(black_box(&input), black_box(&rates)).unwrap();
            black_box(payslip)
        })
    });
}

/// Benchmark: single payslip request through the HTTP router.
fn bench_payslip_request(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let state = create_test_state();
    let router = create_router(state);
    let body = create_payslip_body();

    c.bench_function("payslip_request", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/payslip")
                        .header("Content-Type", "application/json")
                        .body(Body::from(body.clone()))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

/// Benchmark: report aggregation over increasing row counts.
fn bench_report_aggregation(c: &mut Criterion) {
    let mut group = c.benchmark_group("report_aggregation");

    for row_count in [10usize, 100, 1000] {
        let rows = create_rows(row_count);
        group.throughput(Throughput::Elements(row_count as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(row_count),
            &rows,
            |b, rows| {
                b.iter(|| {
                    let totals = calculate_report_totals(black_box(rows));
                    black_box(totals)
                })
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_payslip_calculation,
    bench_payslip_request,
    bench_report_aggregation
);
criterion_main!(benches);
