// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Bearer token authentication middleware.
//!
//! Applied as a route layer on both resource groups. A request passes only
//! when all of the following hold:
//!
//! 1. The Authorization header carries a `Bearer` token
//! 2. The token is a valid, unexpired JWT under the configured secret
//! 3. A session row exists with this exact token
//! 4. The session's user still exists
//!
//! Every failure is rejected identically with 401; a caller cannot tell a
//! bad signature from a signed-out session. Token values are never logged.

use axum::{
	extract::{FromRequestParts, Request, State},
	http::{request::Parts, StatusCode},
	middleware::Next,
	response::{IntoResponse, Response},
	Json,
};
use lockbox_server_api::ErrorBody;
use lockbox_server_auth::{extract_bearer_token, verify_token, CurrentUser};

use crate::api::AppState;

fn unauthorized() -> Response {
	(
		StatusCode::UNAUTHORIZED,
		Json(ErrorBody::new(
			"UnauthorizedError",
			"You must be signed in to continue",
		)),
	)
		.into_response()
}

fn internal_error() -> Response {
	(
		StatusCode::INTERNAL_SERVER_ERROR,
		Json(ErrorBody::new("InternalServerError", "Internal server error")),
	)
		.into_response()
}

/// Authenticate the request and inject [`CurrentUser`] into its extensions.
pub async fn authenticate(State(state): State<AppState>, mut req: Request, next: Next) -> Response {
	let Some(token) = extract_bearer_token(req.headers()) else {
		return unauthorized();
	};

	let Ok(claims) = verify_token(&token, &state.auth_config.jwt_secret) else {
		return unauthorized();
	};

	let session = match state.session_repo.find_by_token(&token).await {
		Ok(Some(session)) => session,
		Ok(None) => return unauthorized(),
		Err(e) => {
			tracing::error!(error = %e, "session lookup failed");
			return internal_error();
		}
	};

	// A session row under a different user than the claims assert is stale
	// or forged; treat it like any other invalid token.
	if session.user_id != claims.user_id() {
		return unauthorized();
	}

	let user = match state.user_repo.find_by_id(session.user_id).await {
		Ok(Some(user)) => user,
		Ok(None) => return unauthorized(),
		Err(e) => {
			tracing::error!(error = %e, "user lookup failed");
			return internal_error();
		}
	};

	req.extensions_mut()
		.insert(CurrentUser::from_session(user, &session));
	next.run(req).await
}

/// Extractor for the authenticated user placed by [`authenticate`].
///
/// Only usable on routes behind the middleware; elsewhere it rejects
/// with 401 rather than panicking.
pub struct RequireAuth(pub CurrentUser);

impl<S> FromRequestParts<S> for RequireAuth
where
	S: Send + Sync,
{
	type Rejection = Response;

	async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
		parts
			.extensions
			.get::<CurrentUser>()
			.cloned()
			.map(RequireAuth)
			.ok_or_else(unauthorized)
	}
}
