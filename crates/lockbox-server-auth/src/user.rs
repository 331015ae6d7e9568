// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! User account types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::UserId;

/// A registered account.
///
/// The `password` field holds the argon2 hash of the login password - never
/// the plaintext and never the vault cipher output. Login secrets are hashed,
/// not reversibly encrypted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
	/// Unique identifier for this user.
	pub id: UserId,

	/// Login email, unique across all accounts.
	pub email: String,

	/// Argon2 hash of the login password.
	#[serde(skip_serializing)]
	pub password: String,

	/// When the account was created.
	pub created_at: DateTime<Utc>,

	/// When the account was last updated.
	pub updated_at: DateTime<Utc>,
}

/// The public projection of a user, safe to return from sign-up.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
	pub id: UserId,
	pub email: String,
}

impl From<&User> for UserProfile {
	fn from(user: &User) -> Self {
		Self {
			id: user.id,
			email: user.email.clone(),
		}
	}
}
