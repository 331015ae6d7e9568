// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Request body validation.
//!
//! [`ValidatedJson`] wraps axum's `Json` extractor so that every body
//! failure - unparseable JSON, a missing required field, or a field that
//! fails the schema checks below - is rejected with 400 and an
//! `InvalidDataError` body before the request reaches a service.

use axum::{
	extract::{FromRequest, Request},
	http::StatusCode,
	response::{IntoResponse, Response},
	Json,
};
use lockbox_server_api::{
	CreateCredentialRequest, CreateNetworkRequest, ErrorBody, SignInRequest, SignUpRequest,
};
use regex::Regex;
use serde::de::DeserializeOwned;
use std::sync::LazyLock;

static EMAIL_REGEX: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Minimum length for account login passwords (not vault record passwords;
/// those are arbitrary data).
const MIN_ACCOUNT_PASSWORD_LEN: usize = 8;

/// Schema validation for a request body.
pub trait ValidateBody {
	fn validate(&self) -> Result<(), String>;
}

/// Json extractor that enforces [`ValidateBody`] and rejects with 400.
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
	S: Send + Sync,
	T: DeserializeOwned + ValidateBody,
{
	type Rejection = Response;

	async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
		let Json(value) = Json::<T>::from_request(req, state)
			.await
			.map_err(|rejection| validation_error(rejection.body_text()))?;

		value.validate().map_err(validation_error)?;
		Ok(ValidatedJson(value))
	}
}

fn validation_error(message: impl Into<String>) -> Response {
	(
		StatusCode::BAD_REQUEST,
		Json(ErrorBody::new("InvalidDataError", message)),
	)
		.into_response()
}

fn require_non_empty(value: &str, field: &str) -> Result<(), String> {
	if value.trim().is_empty() {
		return Err(format!("\"{field}\" is required"));
	}
	Ok(())
}

fn require_valid_url(value: &str) -> Result<(), String> {
	url::Url::parse(value).map_err(|_| "\"url\" must be a valid URL".to_string())?;
	Ok(())
}

fn require_valid_email(value: &str) -> Result<(), String> {
	if !EMAIL_REGEX.is_match(value) {
		return Err("\"email\" must be a valid email address".to_string());
	}
	Ok(())
}

impl ValidateBody for CreateCredentialRequest {
	fn validate(&self) -> Result<(), String> {
		require_non_empty(&self.title, "title")?;
		require_non_empty(&self.url, "url")?;
		require_valid_url(&self.url)?;
		require_non_empty(&self.username, "username")?;
		require_non_empty(&self.password, "password")?;
		Ok(())
	}
}

impl ValidateBody for CreateNetworkRequest {
	fn validate(&self) -> Result<(), String> {
		require_non_empty(&self.title, "title")?;
		require_non_empty(&self.network, "network")?;
		require_non_empty(&self.password, "password")?;
		Ok(())
	}
}

impl ValidateBody for SignUpRequest {
	fn validate(&self) -> Result<(), String> {
		require_non_empty(&self.email, "email")?;
		require_valid_email(&self.email)?;
		if self.password.len() < MIN_ACCOUNT_PASSWORD_LEN {
			return Err(format!(
				"\"password\" must be at least {MIN_ACCOUNT_PASSWORD_LEN} characters"
			));
		}
		Ok(())
	}
}

impl ValidateBody for SignInRequest {
	fn validate(&self) -> Result<(), String> {
		require_non_empty(&self.email, "email")?;
		require_non_empty(&self.password, "password")?;
		Ok(())
	}
}
