// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Account HTTP handlers: registration and sign-in.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use lockbox_server_api::{SignInRequest, SignInResponse, SignUpRequest, SignUpResponse};

use crate::{api::AppState, error::ServiceError, validation::ValidatedJson};

/// POST /users - register an account.
pub async fn sign_up(
	State(state): State<AppState>,
	ValidatedJson(body): ValidatedJson<SignUpRequest>,
) -> Result<impl IntoResponse, ServiceError> {
	let profile = state
		.accounts_service
		.sign_up(&body.email, &body.password)
		.await?;

	Ok((StatusCode::CREATED, Json(SignUpResponse::from(profile))))
}

/// POST /auth/sign-in - exchange email + password for a bearer token.
pub async fn sign_in(
	State(state): State<AppState>,
	ValidatedJson(body): ValidatedJson<SignInRequest>,
) -> Result<impl IntoResponse, ServiceError> {
	let token = state
		.accounts_service
		.sign_in(&body.email, &body.password)
		.await?;

	Ok(Json(SignInResponse { token }))
}
