// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Request-level authentication context and header helpers.
//!
//! # Authentication Flow
//!
//! ```text
//! Request → Extract Bearer → Verify JWT → Session lookup → CurrentUser
//! ```
//!
//! Missing header, malformed header, invalid/expired JWT, and a token with
//! no session row are all rejected identically with 401. Token values are
//! never logged.

use http::header::AUTHORIZATION;
use http::HeaderMap;
use serde::{Deserialize, Serialize};

use crate::session::Session;
use crate::types::SessionId;
use crate::user::User;

/// The currently authenticated user, extracted from request context.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUser {
	/// The authenticated user.
	pub user: User,
	/// The session that authenticated this request.
	pub session_id: SessionId,
}

impl CurrentUser {
	/// Create a new CurrentUser from a validated session.
	pub fn from_session(user: User, session: &Session) -> Self {
		Self {
			user,
			session_id: session.id,
		}
	}
}

/// Configuration for authentication behavior.
#[derive(Debug, Clone)]
pub struct AuthConfig {
	/// Secret used to sign and verify bearer tokens.
	pub jwt_secret: String,
	/// How long issued tokens stay valid, in seconds.
	pub token_ttl_secs: i64,
}

impl Default for AuthConfig {
	fn default() -> Self {
		Self {
			jwt_secret: "lockbox-dev-secret".to_string(),
			token_ttl_secs: 60 * 60 * 24 * 30,
		}
	}
}

/// Extract the bearer token from the Authorization header.
///
/// Expects the format: `Authorization: Bearer <token>`. Returns `None` if
/// the header is absent or malformed. The token value itself is never
/// logged.
#[tracing::instrument(level = "trace", skip_all)]
pub fn extract_bearer_token(headers: &HeaderMap) -> Option<String> {
	let auth_header = headers.get(AUTHORIZATION)?;
	let auth_str = auth_header.to_str().ok()?;
	auth_str
		.strip_prefix("Bearer ")
		.map(|token| token.to_string())
}
