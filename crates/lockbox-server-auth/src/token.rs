// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! JWT signing and verification for bearer tokens.
//!
//! Tokens are HS256 JWTs whose claims carry the user id (as `userId`, the
//! field name existing clients expect). A verified signature alone is not
//! enough to authenticate - the token must also match a persisted session
//! row, which is checked by the server's auth middleware.

use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::error::AuthError;
use crate::types::UserId;

/// Claims carried by a bearer token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
	/// The authenticated user.
	#[serde(rename = "userId")]
	pub user_id: i64,

	/// Issued-at, seconds since the epoch.
	pub iat: i64,

	/// Expiry, seconds since the epoch.
	pub exp: i64,
}

impl Claims {
	/// The typed user id.
	pub fn user_id(&self) -> UserId {
		UserId::new(self.user_id)
	}
}

/// Sign a bearer token for a user.
pub fn sign_token(user_id: UserId, secret: &str, ttl_secs: i64) -> Result<String, AuthError> {
	let now = Utc::now().timestamp();
	let claims = Claims {
		user_id: user_id.into_inner(),
		iat: now,
		exp: now + ttl_secs,
	};

	encode(
		&Header::default(),
		&claims,
		&EncodingKey::from_secret(secret.as_bytes()),
	)
	.map_err(|e| AuthError::TokenSign(e.to_string()))
}

/// Verify a bearer token and return its claims.
///
/// Any failure (bad signature, malformed token, expired) collapses to
/// [`AuthError::InvalidToken`]; callers do not distinguish the cases.
pub fn verify_token(token: &str, secret: &str) -> Result<Claims, AuthError> {
	decode::<Claims>(
		token,
		&DecodingKey::from_secret(secret.as_bytes()),
		&Validation::default(),
	)
	.map(|data| data.claims)
	.map_err(|_| AuthError::InvalidToken)
}
