// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Network HTTP handlers.

use axum::{
	extract::{Path, State},
	http::StatusCode,
	response::IntoResponse,
	Json,
};
use lockbox_server_api::{CreateNetworkRequest, CreatedResponse, NetworkResponse};
use lockbox_server_auth::NetworkId;

use crate::{
	api::AppState,
	auth_middleware::RequireAuth,
	error::ServiceError,
	validation::ValidatedJson,
};

/// GET /networks - all of the caller's networks, decrypted.
pub async fn networks_list(
	State(state): State<AppState>,
	RequireAuth(current_user): RequireAuth,
) -> Result<impl IntoResponse, ServiceError> {
	let records = state.networks_service.list(current_user.user.id).await?;
	let body: Vec<NetworkResponse> = records.into_iter().map(Into::into).collect();
	Ok(Json(body))
}

/// GET /networks/{network_id} - one network, decrypted, in a list-shaped body.
pub async fn networks_locate(
	State(state): State<AppState>,
	RequireAuth(current_user): RequireAuth,
	Path(network_id): Path<i64>,
) -> Result<impl IntoResponse, ServiceError> {
	let record = state
		.networks_service
		.locate(current_user.user.id, NetworkId::new(network_id))
		.await?;
	Ok(Json(vec![NetworkResponse::from(record)]))
}

/// POST /networks - store a new network.
///
/// The creation body uses the same `credentialId` field as the credential
/// group; both resource types share that response shape.
pub async fn networks_store(
	State(state): State<AppState>,
	RequireAuth(current_user): RequireAuth,
	ValidatedJson(body): ValidatedJson<CreateNetworkRequest>,
) -> Result<impl IntoResponse, ServiceError> {
	let id = state
		.networks_service
		.create(
			current_user.user.id,
			&body.title,
			&body.network,
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

/// DELETE /networks/{network_id} - hard-delete an owned network.
pub async fn networks_delete(
	State(state): State<AppState>,
	RequireAuth(current_user): RequireAuth,
	Path(network_id): Path<i64>,
) -> Result<impl IntoResponse, ServiceError> {
	state
		.networks_service
		.delete(current_user.user.id, NetworkId::new(network_id))
		.await?;
	Ok(StatusCode::ACCEPTED)
}
