// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Shared helpers for integration tests: app setup, factories, and request
//! plumbing.

#![allow(dead_code)]

use axum::{
	body::Body,
	http::{header::AUTHORIZATION, header::CONTENT_TYPE, Method, Request},
	response::Response,
	Router,
};
use lockbox_server::api::{create_app_state, create_router, AppState};
use lockbox_server_auth::{sign_token, User, UserId};
use lockbox_server_config::ServerConfig;
use tempfile::TempDir;

/// Creates a test app with an isolated database.
pub async fn setup_test_app() -> (Router, AppState, TempDir) {
	let dir = tempfile::tempdir().unwrap();
	let db_path = dir.path().join("test_lockbox.db");
	let db_url = format!("sqlite:{}?mode=rwc", db_path.display());

	let pool = lockbox_server_db::create_pool(&db_url).await.unwrap();
	lockbox_server_db::run_migrations(&pool).await.unwrap();

	let config = ServerConfig::default();
	let state = create_app_state(pool, &config).unwrap();
	(create_router(state.clone()), state, dir)
}

pub const TEST_PASSWORD: &str = "a-long-test-password";

/// Register a user through the accounts service and return the full row.
pub async fn create_user(state: &AppState, email: &str) -> User {
	state
		.accounts_service
		.sign_up(email, TEST_PASSWORD)
		.await
		.unwrap();
	state.user_repo.find_by_email(email).await.unwrap().unwrap()
}

/// Issue a token for the user and persist its session row.
pub async fn generate_valid_token(state: &AppState, user: &User) -> String {
	let token = sign_token(
		user.id,
		&state.auth_config.jwt_secret,
		state.auth_config.token_ttl_secs,
	)
	.unwrap();
	state
		.session_repo
		.create_session(user.id, &token)
		.await
		.unwrap();
	token
}

/// Sign a structurally valid JWT for the user WITHOUT a session row.
pub fn token_without_session(state: &AppState, user_id: UserId) -> String {
	sign_token(user_id, &state.auth_config.jwt_secret, 3600).unwrap()
}

/// Store a credential through the service; returns its id.
pub async fn create_credential(
	state: &AppState,
	user: &User,
	title: &str,
	password: &str,
) -> i64 {
	state
		.credentials_service
		.create(user.id, title, "https://example.com", "user", password)
		.await
		.unwrap()
		.into_inner()
}

/// Store a network through the service; returns its id.
pub async fn create_network(state: &AppState, user: &User, title: &str, password: &str) -> i64 {
	state
		.networks_service
		.create(user.id, title, "TestSSID", password)
		.await
		.unwrap()
		.into_inner()
}

/// Build a bodyless request, optionally with a bearer token.
pub fn request(method: Method, path: &str, token: Option<&str>) -> Request<Body> {
	let mut builder = Request::builder().method(method).uri(path);
	if let Some(token) = token {
		builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
	}
	builder.body(Body::empty()).unwrap()
}

/// Build a JSON request, optionally with a bearer token.
pub fn json_request(
	method: Method,
	path: &str,
	token: Option<&str>,
	body: &serde_json::Value,
) -> Request<Body> {
	let mut builder = Request::builder()
		.method(method)
		.uri(path)
		.header(CONTENT_TYPE, "application/json");
	if let Some(token) = token {
		builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
	}
	builder
		.body(Body::from(serde_json::to_vec(body).unwrap()))
		.unwrap()
}

/// Collect a response body as JSON.
pub async fn response_json(response: Response) -> serde_json::Value {
	let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
		.await
		.unwrap();
	serde_json::from_slice(&bytes).unwrap()
}

/// Collect a response body as raw bytes.
pub async fn response_bytes(response: Response) -> Vec<u8> {
	axum::body::to_bytes(response.into_body(), usize::MAX)
		.await
		.unwrap()
		.to_vec()
}
