#![allow(dead_code)]

//! Test infrastructure for relay-server API tests

use relay_auth::{PasswordHasher, TokenService};
use relay_core::InMemoryUserStore;
use relay_server::AppState;
use relay_sms::{OutboundSms, SentMessage, SmsError, SmsProvider};

use std::panic::Location;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use error_location::ErrorLocation;
use http_body_util::BodyExt;
use tower::ServiceExt;

pub const TEST_SECRET: &str = "test-secret";
pub const TEST_SENDER: &str = "+15550000000";

/// Lowest cost bcrypt accepts; keeps hashing fast in tests
const TEST_BCRYPT_COST: u32 = 4;

/// Create AppState for testing, without SMS
pub fn create_test_app_state() -> AppState {
    AppState {
        users: Arc::new(InMemoryUserStore::new()),
        tokens: Arc::new(TokenService::with_hs256(TEST_SECRET.as_bytes())),
        password_hasher: PasswordHasher::new(TEST_BCRYPT_COST),
        sms: None,
        sms_from: None,
    }
}

/// Create AppState with the given provider and sender
pub fn create_test_app_state_with_sms(
    provider: Arc<dyn SmsProvider>,
    sms_from: Option<&str>,
) -> AppState {
    AppState {
        sms: Some(provider),
        sms_from: sms_from.map(String::from),
        ..create_test_app_state()
    }
}

/// POST a raw body and return status plus parsed JSON
pub async fn post_raw(
    app: Router,
    uri: &str,
    body: impl Into<Body>,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    (status, json)
}

pub async fn post_json(
    app: Router,
    uri: &str,
    body: serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    post_raw(app, uri, body.to_string()).await
}

/// What a [`RecordingSmsProvider`] answers with
pub enum Reply {
    Sent(&'static str),
    Rejected(&'static str),
}

/// Fake provider that records every message it is asked to send
pub struct RecordingSmsProvider {
    reply: Reply,
    sent: Mutex<Vec<OutboundSms>>,
}

impl RecordingSmsProvider {
    pub fn new(reply: Reply) -> Arc<Self> {
        Arc::new(Self {
            reply,
            sent: Mutex::new(Vec::new()),
        })
    }

    pub fn sent(&self) -> Vec<OutboundSms> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl SmsProvider for RecordingSmsProvider {
    async fn send(&self, sms: &OutboundSms) -> relay_sms::Result<SentMessage> {
        self.sent.lock().unwrap().push(sms.clone());

        match self.reply {
            Reply::Sent(sid) => Ok(SentMessage {
                sid: sid.to_string(),
                status: Some("queued".to_string()),
            }),
            Reply::Rejected(message) => Err(SmsError::Provider {
                status: 400,
                code: Some(21211),
                message: message.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }

    fn name(&self) -> &'static str {
        "recording"
    }
}
