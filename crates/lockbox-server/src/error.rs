// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Service error taxonomy and the single error-to-HTTP translator.
//!
//! Handlers never map errors to status codes themselves; they propagate
//! [`ServiceError`] with `?` and this `IntoResponse` impl performs all
//! mapping and serializes the `{ name, message }` body. Storage and cipher
//! failures collapse to a generic 500 with no internal detail on the wire.

use axum::{
	http::StatusCode,
	response::{IntoResponse, Response},
	Json,
};
use lockbox_server_api::ErrorBody;
use lockbox_server_auth::AuthError;
use lockbox_server_db::DbError;
use lockbox_server_secrets::SecretsError;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
	/// Record absent, or present but owned by another user - the two are
	/// deliberately indistinguishable on the wire.
	#[error("No result for this search!")]
	NotFound,

	/// A record with this title already exists for the user.
	#[error("A Credential with this name already exists")]
	NameConflict,

	/// The email is already registered.
	#[error("There is already an user with this email")]
	DuplicateEmail,

	/// Unknown email or wrong password at sign-in.
	#[error("Invalid email or password")]
	InvalidCredentials,

	#[error(transparent)]
	Db(#[from] DbError),

	#[error(transparent)]
	Cipher(#[from] SecretsError),

	#[error(transparent)]
	Auth(#[from] AuthError),
}

impl IntoResponse for ServiceError {
	fn into_response(self) -> Response {
		let (status, name, message) = match &self {
			ServiceError::NotFound => (StatusCode::NOT_FOUND, "NotFoundError", self.to_string()),
			ServiceError::NameConflict => {
				(StatusCode::CONFLICT, "CredentialNameError", self.to_string())
			}
			ServiceError::DuplicateEmail => {
				(StatusCode::CONFLICT, "DuplicateEmailError", self.to_string())
			}
			ServiceError::InvalidCredentials => {
				(StatusCode::UNAUTHORIZED, "UnauthorizedError", self.to_string())
			}
			ServiceError::Db(e) => {
				tracing::error!(error = %e, "storage failure");
				internal_error()
			}
			ServiceError::Cipher(e) => {
				tracing::error!(error = %e, "cipher failure");
				internal_error()
			}
			ServiceError::Auth(e) => {
				tracing::error!(error = %e, "auth failure");
				internal_error()
			}
		};

		(status, Json(ErrorBody::new(name, message))).into_response()
	}
}

fn internal_error() -> (StatusCode, &'static str, String) {
	(
		StatusCode::INTERNAL_SERVER_ERROR,
		"InternalServerError",
		"Internal server error".to_string(),
	)
}
