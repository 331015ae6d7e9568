// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Integration tests for the network routes.
//!
//! The network group mirrors the credential group; these tests focus on the
//! shared contract (auth, 404-for-empty, ownership, uniqueness) plus the
//! network-specific body shape and the shared `credentialId` creation field.

mod support;

use axum::http::{Method, StatusCode};
use serde_json::json;
use support::*;
use tower::ServiceExt;

fn valid_body() -> serde_json::Value {
	json!({
		"title": "home wifi",
		"network": "HomeSSID",
		"password": "wifi-pass",
	})
}

#[tokio::test]
async fn get_networks_without_token_is_401() {
	let (app, _state, _dir) = setup_test_app().await;

	let response = app
		.oneshot(request(Method::GET, "/networks", None))
		.await
		.unwrap();

	assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn get_networks_with_garbage_token_is_401() {
	let (app, _state, _dir) = setup_test_app().await;

	let response = app
		.oneshot(request(Method::GET, "/networks", Some("nonsense")))
		.await
		.unwrap();

	assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn get_networks_with_sessionless_token_is_401() {
	let (app, state, _dir) = setup_test_app().await;
	let user = create_user(&state, "nosession-net@example.com").await;
	let token = token_without_session(&state, user.id);

	let response = app
		.oneshot(request(Method::GET, "/networks", Some(&token)))
		.await
		.unwrap();

	assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn get_networks_with_no_records_is_404() {
	let (app, state, _dir) = setup_test_app().await;
	let user = create_user(&state, "empty-net@example.com").await;
	let token = generate_valid_token(&state, &user).await;

	let response = app
		.oneshot(request(Method::GET, "/networks", Some(&token)))
		.await
		.unwrap();

	assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn get_networks_returns_decrypted_records() {
	let (app, state, _dir) = setup_test_app().await;
	let user = create_user(&state, "list-net@example.com").await;
	let token = generate_valid_token(&state, &user).await;

	let id_a = create_network(&state, &user, "home", "pass-one").await;
	let id_b = create_network(&state, &user, "office", "pass-two").await;

	let response = app
		.oneshot(request(Method::GET, "/networks", Some(&token)))
		.await
		.unwrap();

	assert_eq!(response.status(), StatusCode::OK);
	let body = response_json(response).await;
	assert_eq!(
		body,
		json!([
			{
				"id": id_a,
				"userId": user.id.into_inner(),
				"title": "home",
				"network": "TestSSID",
				"password": "pass-one",
			},
			{
				"id": id_b,
				"userId": user.id.into_inner(),
				"title": "office",
				"network": "TestSSID",
				"password": "pass-two",
			},
		])
	);
}

#[tokio::test]
async fn locate_another_users_network_is_404() {
	let (app, state, _dir) = setup_test_app().await;
	let owner = create_user(&state, "net-owner@example.com").await;
	let intruder = create_user(&state, "net-intruder@example.com").await;
	let token = generate_valid_token(&state, &intruder).await;

	let id = create_network(&state, &owner, "theirs", "secret").await;

	let response = app
		.oneshot(request(Method::GET, &format!("/networks/{id}"), Some(&token)))
		.await
		.unwrap();

	assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn locate_returns_a_list_shaped_body() {
	let (app, state, _dir) = setup_test_app().await;
	let user = create_user(&state, "net-shape@example.com").await;
	let token = generate_valid_token(&state, &user).await;

	let id = create_network(&state, &user, "mine", "plain").await;

	let response = app
		.oneshot(request(Method::GET, &format!("/networks/{id}"), Some(&token)))
		.await
		.unwrap();

	assert_eq!(response.status(), StatusCode::OK);
	let body = response_json(response).await;
	assert_eq!(
		body,
		json!([{
			"id": id,
			"userId": user.id.into_inner(),
			"title": "mine",
			"network": "TestSSID",
			"password": "plain",
		}])
	);
}

#[tokio::test]
async fn store_with_missing_field_is_400() {
	let (app, state, _dir) = setup_test_app().await;
	let user = create_user(&state, "invalid-net@example.com").await;
	let token = generate_valid_token(&state, &user).await;

	let mut body = valid_body();
	body.as_object_mut().unwrap().remove("network");

	let response = app
		.oneshot(json_request(Method::POST, "/networks", Some(&token), &body))
		.await
		.unwrap();

	assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn store_duplicate_title_is_409() {
	let (app, state, _dir) = setup_test_app().await;
	let user = create_user(&state, "net-conflict@example.com").await;
	let token = generate_valid_token(&state, &user).await;

	create_network(&state, &user, "home wifi", "existing").await;

	let response = app
		.oneshot(json_request(
			Method::POST,
			"/networks",
			Some(&token),
			&valid_body(),
		))
		.await
		.unwrap();

	assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn store_returns_the_shared_credential_id_field() {
	let (app, state, _dir) = setup_test_app().await;
	let user = create_user(&state, "store-net@example.com").await;
	let token = generate_valid_token(&state, &user).await;

	let response = app
		.oneshot(json_request(
			Method::POST,
			"/networks",
			Some(&token),
			&valid_body(),
		))
		.await
		.unwrap();

	assert_eq!(response.status(), StatusCode::CREATED);
	let body = response_json(response).await;
	// Both resource groups answer creation with `credentialId`.
	assert!(body["credentialId"].is_i64());
}

#[tokio::test]
async fn delete_missing_network_is_404() {
	let (app, state, _dir) = setup_test_app().await;
	let user = create_user(&state, "del-net@example.com").await;
	let token = generate_valid_token(&state, &user).await;

	let response = app
		.oneshot(request(Method::DELETE, "/networks/999", Some(&token)))
		.await
		.unwrap();

	assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_another_users_network_is_404() {
	let (app, state, _dir) = setup_test_app().await;
	let owner = create_user(&state, "del-net-owner@example.com").await;
	let intruder = create_user(&state, "del-net-intruder@example.com").await;
	let token = generate_valid_token(&state, &intruder).await;

	let id = create_network(&state, &owner, "keep", "secret").await;

	let response = app
		.oneshot(request(
			Method::DELETE,
			&format!("/networks/{id}"),
			Some(&token),
		))
		.await
		.unwrap();

	assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_owned_network_is_202_and_gone() {
	let (app, state, _dir) = setup_test_app().await;
	let user = create_user(&state, "delete-net@example.com").await;
	let token = generate_valid_token(&state, &user).await;

	let id = create_network(&state, &user, "doomed", "secret").await;

	let response = app
		.clone()
		.oneshot(request(
			Method::DELETE,
			&format!("/networks/{id}"),
			Some(&token),
		))
		.await
		.unwrap();

	assert_eq!(response.status(), StatusCode::ACCEPTED);

	let response = app
		.oneshot(request(Method::GET, &format!("/networks/{id}"), Some(&token)))
		.await
		.unwrap();
	assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
