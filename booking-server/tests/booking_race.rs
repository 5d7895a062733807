//! Concurrency regression test for the booking capacity decrement.
//!
//! N concurrent single-unit bookings against a slot with capacity C must
//! leave exactly max(0, C-N) remaining and reject exactly max(0, N-C).
//! Run: cargo test -p booking-server --test booking_race

use std::collections::BTreeMap;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use serde_json::json;
use tower::ServiceExt;

use booking_server::core::{Config, ServerState, build_router};
use booking_server::db::DbService;
use booking_server::db::models::{Experience, Slot};
use booking_server::db::repository::ExperienceRepository;

const DATE: &str = "2025-12-01";
const TIME: &str = "06:00 AM";
const CAPACITY: i64 = 4;
const REQUESTS: usize = 10;

/// Insert a capacity-constrained experience, return the app and its id
async fn setup() -> (axum::Router, ExperienceRepository, String) {
    let db = DbService::memory().await.unwrap();
    let state = ServerState::new(Config::with_overrides("unused", 0), db.db.clone());
    let repo = ExperienceRepository::new(db.db.clone());

    let mut experience = Experience::new(
        "Contended Experience",
        "Test Town",
        "Capacity-constrained slot.",
        500,
        "/images/test.jpg",
    );
    experience.available_dates = vec![DATE.to_string()];
    experience.slots = BTreeMap::from([(
        DATE.to_string(),
        vec![Slot {
            time: TIME.to_string(),
            available: CAPACITY,
        }],
    )]);
    let created = repo.insert(experience).await.unwrap();
    let experience_id = created.id.unwrap().to_string();

    (build_router(state), repo, experience_id)
}

fn booking_request(experience_id: &str, user: usize) -> Request<Body> {
    let body = json!({
        "experienceId": experience_id,
        "userName": format!("User {}", user),
        "userEmail": format!("user{}@example.com", user),
        "date": DATE,
        "time": TIME,
        "quantity": 1,
    });
    Request::builder()
        .method("POST")
        .uri("/api/bookings")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Fire the prepared requests concurrently, assert exactly `CAPACITY`
/// are confirmed and the slot ends at zero
async fn run_to_exhaustion(
    app: axum::Router,
    repo: &ExperienceRepository,
    experience_id: &str,
    ids: Vec<String>,
) {
    let mut tasks = tokio::task::JoinSet::new();
    for (i, id) in ids.into_iter().enumerate() {
        let app = app.clone();
        tasks.spawn(async move { app.oneshot(booking_request(&id, i)).await.unwrap().status() });
    }

    let mut confirmed = 0usize;
    let mut rejected = 0usize;
    while let Some(result) = tasks.join_next().await {
        match result.unwrap() {
            StatusCode::CREATED => confirmed += 1,
            StatusCode::BAD_REQUEST => rejected += 1,
            status => panic!("unexpected status {status}"),
        }
    }

    assert_eq!(confirmed, CAPACITY as usize);
    assert_eq!(rejected, REQUESTS - CAPACITY as usize);

    let after = repo.find_by_id(experience_id).await.unwrap().unwrap();
    assert_eq!(after.slots[DATE][0].available, 0);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_bookings_never_oversell() {
    let (app, repo, experience_id) = setup().await;

    let ids = vec![experience_id.clone(); REQUESTS];
    run_to_exhaustion(app, &repo, &experience_id, ids).await;
}

/// "experience:abc" and bare "abc" address the same record; bookings
/// using either form must queue on the same lock
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn mixed_id_forms_never_oversell() {
    let (app, repo, experience_id) = setup().await;

    let bare_id = experience_id
        .strip_prefix("experience:")
        .unwrap()
        .to_string();
    let ids = (0..REQUESTS)
        .map(|i| {
            if i % 2 == 0 {
                experience_id.clone()
            } else {
                bare_id.clone()
            }
        })
        .collect();
    run_to_exhaustion(app, &repo, &experience_id, ids).await;
}
