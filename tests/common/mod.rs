//! Test doubles for `RangerStore` and request helpers.

#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use powerranger::{AppError, AppState, NewPowerRanger, PowerRanger, RangerStore, ServiceConfig};
use serde_json::Value;
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

/// In-memory table with an auto-increment id starting at 1.
#[derive(Default)]
pub struct MemoryStore {
    rows: Mutex<Vec<PowerRanger>>,
}

impl MemoryStore {
    pub fn row_count(&self) -> usize {
        self.rows.lock().map(|rows| rows.len()).unwrap_or_default()
    }

    fn select<F: Fn(&PowerRanger) -> bool>(&self, keep: F) -> Vec<PowerRanger> {
        match self.rows.lock() {
            Ok(rows) => rows.iter().filter(|r| keep(r)).cloned().collect(),
            Err(err) => panic!("store lock poisoned: {err}"),
        }
    }
}

#[async_trait]
impl RangerStore for MemoryStore {
    async fn list_all(&self) -> Result<Vec<PowerRanger>, AppError> {
        Ok(self.select(|_| true))
    }

    async fn find_by_id(&self, id: i64) -> Result<Vec<PowerRanger>, AppError> {
        Ok(self.select(|r| r.id == id))
    }

    async fn find_by_color(&self, color: &str) -> Result<Vec<PowerRanger>, AppError> {
        Ok(self.select(|r| r.color == color))
    }

    async fn insert(&self, ranger: &NewPowerRanger) -> Result<i64, AppError> {
        let mut rows = match self.rows.lock() {
            Ok(rows) => rows,
            Err(err) => panic!("store lock poisoned: {err}"),
        };
        let id = rows.iter().map(|r| r.id).max().unwrap_or(0) + 1;
        rows.push(ranger.clone().with_id(id));
        Ok(id)
    }
}

/// Store whose every call fails the way an unreachable database does.
pub struct FailingStore;

#[async_trait]
impl RangerStore for FailingStore {
    async fn list_all(&self) -> Result<Vec<PowerRanger>, AppError> {
        Err(AppError::Db(sqlx::Error::PoolTimedOut))
    }

    async fn find_by_id(&self, _id: i64) -> Result<Vec<PowerRanger>, AppError> {
        Err(AppError::Db(sqlx::Error::PoolTimedOut))
    }

    async fn find_by_color(&self, _color: &str) -> Result<Vec<PowerRanger>, AppError> {
        Err(AppError::Db(sqlx::Error::PoolTimedOut))
    }

    async fn insert(&self, _ranger: &NewPowerRanger) -> Result<i64, AppError> {
        Err(AppError::Db(sqlx::Error::Protocol("relation \"powerranger\" does not exist".into())))
    }
}

pub fn default_config() -> ServiceConfig {
    match ServiceConfig::from_lookup(|_| None) {
        Ok(config) => config,
        Err(err) => panic!("default config rejected: {err}"),
    }
}

/// Router over a shared `MemoryStore` so tests can inspect rows afterwards.
pub fn memory_app() -> (Router, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::default());
    let state = AppState { store: store.clone() };
    (powerranger::app(state, &default_config()), store)
}

pub fn failing_app() -> Router {
    powerranger::app(AppState::new(FailingStore), &default_config())
}

pub async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = match router.clone().oneshot(request).await {
        Ok(response) => response,
        Err(err) => panic!("router request failed: {err}"),
    };
    let status = response.status();
    let bytes = match to_bytes(response.into_body(), usize::MAX).await {
        Ok(bytes) => bytes,
        Err(err) => panic!("failed to read response body: {err}"),
    };
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        match serde_json::from_slice(&bytes) {
            Ok(value) => value,
            Err(err) => panic!("response is not JSON ({err}): {}", String::from_utf8_lossy(&bytes)),
        }
    };
    (status, value)
}

pub async fn get(router: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .uri(uri)
        .method("GET")
        .body(Body::empty())
        .unwrap_or_else(|err| panic!("failed to build request: {err}"));
    send(router, request).await
}

pub async fn post_json(router: &Router, uri: &str, body: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .uri(uri)
        .method("POST")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap_or_else(|err| panic!("failed to build request: {err}"));
    send(router, request).await
}
