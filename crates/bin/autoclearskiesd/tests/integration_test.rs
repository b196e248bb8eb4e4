//! End-to-end smoke tests for the full autoclearskiesd stack.
//!
//! Each test builds the real service and axum router and exercises the HTTP
//! layer via `tower::ServiceExt::oneshot`, so no TCP port is bound. Most tests
//! run against an in-memory repository; the ignored ones use the real
//! `PostgreSQL` adapter and need `AUTOCLEARSKIES_TEST_DATABASE_URL`.

use std::future::Future;
use std::sync::Mutex;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use autoclearskies_adapter_http_axum::router;
use autoclearskies_adapter_http_axum::state::AppState;
use autoclearskies_adapter_storage_postgres_sqlx::{Database, PgMeasurementRepository};
use autoclearskies_app::ports::MeasurementRepository;
use autoclearskies_app::services::measurement_service::MeasurementService;
use autoclearskies_domain::error::AutoClearSkiesError;
use autoclearskies_domain::measurement::{Measurement, NewMeasurement};

/// Stands in for the `misc_measurements` table: the "database" assigns a
/// monotonically increasing timestamp on insert.
#[derive(Default)]
struct InMemoryRepo {
    rows: Mutex<Vec<Measurement>>,
}

impl MeasurementRepository for InMemoryRepo {
    fn record(
        &self,
        measurement: NewMeasurement,
    ) -> impl Future<Output = Result<Measurement, AutoClearSkiesError>> + Send {
        let mut rows = self.rows.lock().unwrap();
        let stored = measurement.stamped(format!("2024-06-01 10:{:02}:00", rows.len()));
        rows.push(stored.clone());
        async { Ok(stored) }
    }

    fn list(&self) -> impl Future<Output = Result<Vec<Measurement>, AutoClearSkiesError>> + Send {
        let mut rows = self.rows.lock().unwrap().clone();
        rows.sort_by(|a, b| b.datetime.cmp(&a.datetime));
        async { Ok(rows) }
    }

    fn ping(&self) -> impl Future<Output = Result<(), AutoClearSkiesError>> + Send {
        async { Ok(()) }
    }
}

fn app_with<MR>(repo: MR) -> axum::Router
where
    MR: MeasurementRepository + Send + Sync + 'static,
{
    router::build(AppState::new(MeasurementService::new(repo)))
}

fn app() -> axum::Router {
    app_with(InMemoryRepo::default())
}

fn record_request(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/measurements/record")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn list_request() -> Request<Body> {
    Request::builder()
        .uri("/measurements")
        .body(Body::empty())
        .unwrap()
}

async fn json_body(resp: axum::response::Response) -> serde_json::Value {
    serde_json::from_slice(&resp.into_body().collect().await.unwrap().to_bytes()).unwrap()
}

// ---------------------------------------------------------------------------
// Health check
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_ok_when_health_check_called() {
    let resp = app()
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
}

// ---------------------------------------------------------------------------
// Record then list
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_record_then_list_measurement() {
    let app = app();

    let resp = app
        .clone()
        .oneshot(record_request(r#"{"lng":5,"lpg":10,"co":2}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let recorded = json_body(resp).await;
    assert_eq!(recorded["lng"], 5);
    assert_eq!(recorded["lpg"], 10);
    assert_eq!(recorded["co"], 2);
    assert!(!recorded["datetime"].as_str().unwrap().is_empty());

    let resp = app.oneshot(list_request()).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let listed = json_body(resp).await;
    assert_eq!(listed[0], recorded);
}

#[tokio::test]
async fn should_list_every_recorded_measurement_newest_first() {
    let app = app();

    for (lng, lpg, co) in [(1, 2, 3), (4, 5, 6), (7, 8, 9)] {
        let body = format!(r#"{{"lng":{lng},"lpg":{lpg},"co":{co}}}"#);
        let resp = app.clone().oneshot(record_request(&body)).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
    }

    let resp = app.oneshot(list_request()).await.unwrap();
    let listed: Vec<Measurement> =
        serde_json::from_slice(&resp.into_body().collect().await.unwrap().to_bytes()).unwrap();

    assert_eq!(listed.len(), 3);
    assert_eq!(listed[0].readings(), NewMeasurement::new(7, 8, 9));
    assert!(listed.windows(2).all(|w| w[0].datetime >= w[1].datetime));
}

#[tokio::test]
async fn should_return_identical_content_when_listed_twice() {
    let app = app();
    app.clone()
        .oneshot(record_request(r#"{"lng":3,"lpg":3,"co":3}"#))
        .await
        .unwrap();

    let first = json_body(app.clone().oneshot(list_request()).await.unwrap()).await;
    let second = json_body(app.oneshot(list_request()).await.unwrap()).await;

    assert_eq!(first, second);
}

#[tokio::test]
async fn should_return_empty_array_on_fresh_store() {
    let resp = app().oneshot(list_request()).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(json_body(resp).await, serde_json::json!([]));
}

#[tokio::test]
async fn should_keep_serving_after_malformed_payload() {
    let app = app();

    let resp = app
        .clone()
        .oneshot(record_request("lng=5&lpg=10"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(json_body(resp).await["error"].is_string());

    let resp = app
        .clone()
        .oneshot(record_request(r#"{"lng":5,"lpg":10,"co":2}"#))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let listed = json_body(app.oneshot(list_request()).await.unwrap()).await;
    assert_eq!(listed.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn should_return_not_found_for_unknown_route() {
    let resp = app()
        .oneshot(
            Request::builder()
                .uri("/measurements/latest")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Against a real PostgreSQL
// ---------------------------------------------------------------------------

async fn postgres_app() -> axum::Router {
    let url = std::env::var("AUTOCLEARSKIES_TEST_DATABASE_URL")
        .expect("AUTOCLEARSKIES_TEST_DATABASE_URL must be set");
    let pool = sqlx::PgPool::connect(&url).await.unwrap();
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS misc_measurements (
            lpg INTEGER NOT NULL,
            lng INTEGER NOT NULL,
            co INTEGER NOT NULL,
            datetime TIMESTAMP NOT NULL DEFAULT clock_timestamp()
        )",
    )
    .execute(&pool)
    .await
    .unwrap();

    app_with(PgMeasurementRepository::new(Database::from_pool(pool)))
}

#[tokio::test]
#[ignore = "requires a PostgreSQL server"]
async fn should_record_and_list_against_postgres() {
    let app = postgres_app().await;

    let resp = app
        .clone()
        .oneshot(record_request(r#"{"lng":5,"lpg":10,"co":2}"#))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let recorded = json_body(resp).await;
    assert!(!recorded["datetime"].as_str().unwrap().is_empty());

    let listed = json_body(app.clone().oneshot(list_request()).await.unwrap()).await;
    assert_eq!(listed[0], recorded);

    let resp = app
        .oneshot(
            Request::builder()
                .uri("/health/db")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}
