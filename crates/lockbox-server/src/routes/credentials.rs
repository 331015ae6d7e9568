// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Credential HTTP handlers.
//!
//! Handlers translate requests to service calls and results to responses;
//! every failure propagates via `?` to the shared error translator.

use axum::{
	extract::{Path, State},
	http::StatusCode,
	response::IntoResponse,
	Json,
};
use lockbox_server_api::{CreateCredentialRequest, CreatedResponse, CredentialResponse};
use lockbox_server_auth::CredentialId;

use crate::{
	api::AppState,
	auth_middleware::RequireAuth,
	error::ServiceError,
	validation::ValidatedJson,
};

/// GET /credentials - all of the caller's credentials, decrypted.
pub async fn credentials_list(
	State(state): State<AppState>,
	RequireAuth(current_user): RequireAuth,
) -> Result<impl IntoResponse, ServiceError> {
	let records = state.credentials_service.list(current_user.user.id).await?;
	let body: Vec<CredentialResponse> = records.into_iter().map(Into::into).collect();
	Ok(Json(body))
}

/// GET /credentials/{credential_id} - one credential, decrypted.
///
/// The body is an array containing the single match; existing clients parse
/// the list shape for both endpoints.
pub async fn credentials_locate(
	State(state): State<AppState>,
	RequireAuth(current_user): RequireAuth,
	Path(credential_id): Path<i64>,
) -> Result<impl IntoResponse, ServiceError> {
	let record = state
		.credentials_service
		.locate(current_user.user.id, CredentialId::new(credential_id))
		.await?;
	Ok(Json(vec![CredentialResponse::from(record)]))
}

/// POST /credentials - store a new credential.
pub async fn credentials_store(
	State(state): State<AppState>,
	RequireAuth(current_user): RequireAuth,
	ValidatedJson(body): ValidatedJson<CreateCredentialRequest>,
) -> Result<impl IntoResponse, ServiceError> {
	let id = state
		.credentials_service
		.create(
			current_user.user.id,
			&body.title,
			&body.url,
			&body.username,
			&body.password,
		)
		.await?;

	Ok((
		StatusCode::CREATED,
		Json(CreatedResponse {
			credential_id: id.into_inner(),
		}),
	))
}

/// DELETE /credentials/{credential_id} - hard-delete an owned credential.
pub async fn credentials_delete(
	State(state): State<AppState>,
	RequireAuth(current_user): RequireAuth,
	Path(credential_id): Path<i64>,
) -> Result<impl IntoResponse, ServiceError> {
	state
		.credentials_service
		.delete(current_user.user.id, CredentialId::new(credential_id))
		.await?;
	Ok(StatusCode::ACCEPTED)
}
