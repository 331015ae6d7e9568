// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use lockbox_server_auth::UserProfile;
use serde::{Deserialize, Serialize};

/// Request to register an account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignUpRequest {
	pub email: String,
	pub password: String,
}

/// Response for a successful registration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignUpResponse {
	pub id: i64,
	pub email: String,
}

impl From<UserProfile> for SignUpResponse {
	fn from(profile: UserProfile) -> Self {
		Self {
			id: profile.id.into_inner(),
			email: profile.email,
		}
	}
}

/// Request to sign in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignInRequest {
	pub email: String,
	pub password: String,
}

/// Response carrying the bearer token for subsequent requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignInResponse {
	pub token: String,
}
