//! Performance benchmarks for the roster service.
//!
//! This benchmark suite verifies that the store and API meet performance targets:
//! - Single employee lookup: < 100μs mean
//! - Roster count: < 100μs mean
//! - Full roster listing: scales linearly with roster size
//! - Employee creation: < 200μs mean
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use roster_service::api::{create_router, AppState};
use roster_service::models::Employee;
use roster_service::storage::{InMemoryStore, SystemClock};

use axum::{body::Body, http::Request};
use chrono::{Duration, Utc};
use tower::ServiceExt;

/// Creates a state whose store holds `size` employees.
fn create_test_state(size: u32) -> AppState {
    let employees: Vec<Employee> = (1..=size)
        .map(|i| Employee {
            id: format!("emp_{:04}", i),
            badge_number: i,
            first_name: "Bench".to_string(),
            last_name: format!("Employee{}", i),
            vacation_accrual_rate: 2.0,
            vacation_accrued: 10.0,
            ..Employee::default()
        })
        .collect();

    let store = InMemoryStore::with_employees(employees, Arc::new(SystemClock))
        .expect("benchmark roster is valid");
    AppState::new(store)
}

/// Benchmark: Single employee lookup through the router.
///
/// Target: < 100μs mean
fn bench_get_employee(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let state = create_test_state(1000);
    let router = create_router(state);

    c.bench_function("get_employee", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("GET")
                        .uri("/employees/emp_0500")
                        .body(Body::empty())
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

/// Benchmark: Roster count on a 1000-strong roster.
///
/// Target: < 100μs mean
fn bench_count(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let state = create_test_state(1000);
    let router = create_router(state);

    c.bench_function("count_employees", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("GET")
                        .uri("/employees/count")
                        .body(Body::empty())
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

/// Benchmark: Full roster listing at various roster sizes.
fn bench_list_scaling(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();

    let mut group = c.benchmark_group("listing");

    for size in [5u32, 100, 1000].iter() {
        let router = create_router(create_test_state(*size));

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("employees", size), size, |b, _| {
            b.to_async(&rt).iter(|| async {
                let router = router.clone();
                let response = router
                    .oneshot(
                        Request::builder()
                            .method("GET")
                            .uri("/employees")
                            .body(Body::empty())
                            .unwrap(),
                    )
                    .await
                    .unwrap();
                black_box(response)
            })
        });
    }

    group.finish();
}

/// Benchmark: Employee creation, including the badge uniqueness scan.
///
/// Target: < 200μs mean
fn bench_add_employee(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let state = create_test_state(1000);
    let router = create_router(state);
    // Each iteration needs a badge no previous iteration has used
    let badge = AtomicU32::new(100_000);

    c.bench_function("add_employee", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let body = format!(
                "{{\"badge_number\": {}, \"first_name\": \"New\", \"last_name\": \"Hire\"}}",
                badge.fetch_add(1, Ordering::Relaxed)
            );
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/employees")
                        .header("Content-Type", "application/json")
                        .body(Body::from(body))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

/// Benchmark: Vacation booking, including the lead-time check.
fn bench_book_vacation(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let state = create_test_state(1000);
    let router = create_router(state);
    let start = (Utc::now() + Duration::days(30)).timestamp();
    let body = format!("{{\"start_date\": {}, \"duration_hours\": 8.0}}", start);

    c.bench_function("book_vacation", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/employees/emp_0001/vacations")
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

criterion_group!(
    benches,
    bench_get_employee,
    bench_count,
    bench_list_scaling,
    bench_add_employee,
    bench_book_vacation,
);
criterion_main!(benches);
