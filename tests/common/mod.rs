// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-process fake of the activities API.
//!
//! Behaves like the real service (404 for unknown activities, 400 for
//! duplicate sign-ups and unknown participants) and records every request
//! URI it receives. Individual endpoints can be overridden with a canned
//! status and body.

use activity_board::board::ActivityBoard;
use activity_board::config::Config;
use activity_board::models::Activity;
use activity_board::services::ActivitiesClient;
use activity_board::AppState;
use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Long enough that no message hides during a test.
#[allow(dead_code)]
pub const TEST_HIDE_AFTER: Duration = Duration::from_secs(600);

type Canned = Option<(u16, String)>;

#[derive(Default)]
pub struct FakeApi {
    activities: Mutex<Vec<(String, Activity)>>,
    requests: Mutex<Vec<String>>,
    list_override: Mutex<Canned>,
    signup_override: Mutex<Canned>,
    unregister_override: Mutex<Canned>,
}

#[allow(dead_code)]
impl FakeApi {
    pub fn add_activity(&self, name: &str, max: u32, participants: &[&str]) {
        self.activities.lock().unwrap().push((
            name.to_string(),
            Activity {
                description: format!("{} description", name),
                schedule: "Mondays, 3:30 PM - 5:00 PM".to_string(),
                max_participants: max,
                participants: participants.iter().map(|p| p.to_string()).collect(),
            },
        ));
    }

    pub fn add_raw_activity(&self, name: &str, activity: Activity) {
        self.activities
            .lock()
            .unwrap()
            .push((name.to_string(), activity));
    }

    pub fn participants(&self, name: &str) -> Vec<String> {
        self.activities
            .lock()
            .unwrap()
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, a)| a.participants.clone())
            .unwrap_or_default()
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    pub fn override_list(&self, status: u16, body: &str) {
        *self.list_override.lock().unwrap() = Some((status, body.to_string()));
    }

    pub fn clear_list_override(&self) {
        *self.list_override.lock().unwrap() = None;
    }

    pub fn override_signup(&self, status: u16, body: &str) {
        *self.signup_override.lock().unwrap() = Some((status, body.to_string()));
    }

    pub fn override_unregister(&self, status: u16, body: &str) {
        *self.unregister_override.lock().unwrap() = Some((status, body.to_string()));
    }

    fn record(&self, uri: &Uri) {
        self.requests.lock().unwrap().push(uri.to_string());
    }

    /// JSON object in insertion order.
    fn collection_json(&self) -> String {
        let entries: Vec<String> = self
            .activities
            .lock()
            .unwrap()
            .iter()
            .map(|(name, activity)| {
                format!(
                    "{}:{}",
                    serde_json::to_string(name).unwrap(),
                    serde_json::to_string(activity).unwrap()
                )
            })
            .collect();
        format!("{{{}}}", entries.join(","))
    }
}

/// A running fake API.
pub struct FakeServer {
    pub api: Arc<FakeApi>,
    pub base_url: String,
}

#[allow(dead_code)]
impl FakeServer {
    pub fn client(&self) -> ActivitiesClient {
        ActivitiesClient::new(self.base_url.clone())
    }

    pub fn board(&self) -> ActivityBoard {
        ActivityBoard::new(self.client(), TEST_HIDE_AFTER)
    }

    pub fn config(&self) -> Config {
        Config {
            api_base_url: self.base_url.clone(),
            message_hide_after: TEST_HIDE_AFTER,
            ..Config::test_default()
        }
    }

    /// Host page router talking to this fake.
    pub fn app(&self) -> (Router, Arc<AppState>) {
        let state = Arc::new(AppState::new(self.config()));
        (
            activity_board::routes::create_router(state.clone()),
            state,
        )
    }
}

/// Start a fake API on an ephemeral port.
pub async fn start_fake_api() -> FakeServer {
    let api = Arc::new(FakeApi::default());

    let router = Router::new()
        .route("/activities", get(list_activities))
        .route("/activities/{name}/signup", post(signup))
        .route("/activities/{name}/unregister", post(unregister))
        .with_state(api.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind fake API");
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    FakeServer {
        api,
        base_url: format!("http://{}", addr),
    }
}

/// Base URL where nothing is listening.
#[allow(dead_code)]
pub async fn unreachable_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

#[derive(Deserialize)]
struct EmailQuery {
    email: String,
}

fn json_response(status: u16, body: String) -> Response {
    (
        StatusCode::from_u16(status).unwrap(),
        [(header::CONTENT_TYPE, "application/json")],
        body,
    )
        .into_response()
}

fn detail(status: u16, detail: &str) -> Response {
    json_response(status, serde_json::json!({ "detail": detail }).to_string())
}

async fn list_activities(State(api): State<Arc<FakeApi>>, uri: Uri) -> Response {
    api.record(&uri);
    if let Some((status, body)) = api.list_override.lock().unwrap().clone() {
        return json_response(status, body);
    }
    json_response(200, api.collection_json())
}

async fn signup(
    State(api): State<Arc<FakeApi>>,
    uri: Uri,
    Path(name): Path<String>,
    Query(query): Query<EmailQuery>,
) -> Response {
    api.record(&uri);
    if let Some((status, body)) = api.signup_override.lock().unwrap().clone() {
        return json_response(status, body);
    }

    let mut activities = api.activities.lock().unwrap();
    let Some((_, activity)) = activities.iter_mut().find(|(n, _)| *n == name) else {
        return detail(404, "Activity not found");
    };
    if activity.participants.contains(&query.email) {
        return detail(400, "Student already registered for this activity");
    }
    activity.participants.push(query.email.clone());

    let message = format!("Signed up {} for {}", query.email, name);
    json_response(200, serde_json::json!({ "message": message }).to_string())
}

async fn unregister(
    State(api): State<Arc<FakeApi>>,
    uri: Uri,
    Path(name): Path<String>,
    Query(query): Query<EmailQuery>,
) -> Response {
    api.record(&uri);
    if let Some((status, body)) = api.unregister_override.lock().unwrap().clone() {
        return json_response(status, body);
    }

    let mut activities = api.activities.lock().unwrap();
    let Some((_, activity)) = activities.iter_mut().find(|(n, _)| *n == name) else {
        return detail(404, "Activity not found");
    };
    let Some(pos) = activity.participants.iter().position(|p| *p == query.email) else {
        return detail(400, "Student not registered for this activity");
    };
    activity.participants.remove(pos);

    let message = format!("Unregistered {} from {}", query.email, name);
    json_response(200, serde_json::json!({ "message": message }).to_string())
}
