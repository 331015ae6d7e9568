// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Account service: registration and sign-in.
//!
//! Login passwords are argon2-hashed, never run through the vault cipher;
//! a login secret must not be recoverable even with the cipher key.

use lockbox_server_auth::{
	password::{hash_password, verify_password},
	sign_token, AuthConfig, UserProfile,
};
use lockbox_server_db::{DbError, SessionRepository, UserRepository};

use crate::error::ServiceError;

/// Registration and sign-in over the users and sessions tables.
#[derive(Clone)]
pub struct AccountsService {
	users: UserRepository,
	sessions: SessionRepository,
	auth: AuthConfig,
}

impl AccountsService {
	pub fn new(users: UserRepository, sessions: SessionRepository, auth: AuthConfig) -> Self {
		Self {
			users,
			sessions,
			auth,
		}
	}

	/// Register a new account.
	#[tracing::instrument(skip(self, password), fields(email = %email))]
	pub async fn sign_up(&self, email: &str, password: &str) -> Result<UserProfile, ServiceError> {
		if self.users.find_by_email(email).await?.is_some() {
			return Err(ServiceError::DuplicateEmail);
		}

		let hash = hash_password(password)?;
		match self.users.create_user(email, &hash).await {
			Ok(user) => Ok(UserProfile::from(&user)),
			// The UNIQUE index on email backstops the pre-check.
			Err(DbError::Conflict(_)) => Err(ServiceError::DuplicateEmail),
			Err(e) => Err(e.into()),
		}
	}

	/// Sign in, issuing a bearer token and persisting its session row.
	#[tracing::instrument(skip(self, password), fields(email = %email))]
	pub async fn sign_in(&self, email: &str, password: &str) -> Result<String, ServiceError> {
		let Some(user) = self.users.find_by_email(email).await? else {
			return Err(ServiceError::InvalidCredentials);
		};
		if !verify_password(password, &user.password) {
			return Err(ServiceError::InvalidCredentials);
		}

		let token = sign_token(user.id, &self.auth.jwt_secret, self.auth.token_ttl_secs)?;
		self.sessions.create_session(user.id, &token).await?;
		Ok(token)
	}
}
