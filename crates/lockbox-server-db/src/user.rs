// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! User account repository.

use chrono::{DateTime, Utc};
use lockbox_server_auth::{User, UserId};
use sqlx::{sqlite::SqlitePool, Row};

use crate::error::{map_insert_error, DbError};

pub(crate) fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, DbError> {
	DateTime::parse_from_rfc3339(value)
		.map(|dt| dt.with_timezone(&Utc))
		.map_err(|e| DbError::Internal(format!("invalid timestamp '{value}': {e}")))
}

fn parse_user_row(row: &sqlx::sqlite::SqliteRow) -> Result<User, DbError> {
	Ok(User {
		id: UserId::new(row.try_get("id")?),
		email: row.try_get("email")?,
		password: row.try_get("password")?,
		created_at: parse_timestamp(row.try_get("created_at")?)?,
		updated_at: parse_timestamp(row.try_get("updated_at")?)?,
	})
}

/// Repository for user account rows.
#[derive(Clone)]
pub struct UserRepository {
	pool: SqlitePool,
}

impl UserRepository {
	/// Create a new user repository with the given pool.
	pub fn new(pool: SqlitePool) -> Self {
		Self { pool }
	}

	/// Insert a new user.
	///
	/// `password_hash` must already be an argon2 hash; this layer never sees
	/// plaintext login passwords.
	///
	/// # Errors
	/// `DbError::Conflict` if the email is already registered.
	#[tracing::instrument(skip(self, password_hash), fields(email = %email))]
	pub async fn create_user(&self, email: &str, password_hash: &str) -> Result<User, DbError> {
		let now = Utc::now().to_rfc3339();

		let row = sqlx::query(
			r#"
			INSERT INTO users (email, password, created_at, updated_at)
			VALUES (?, ?, ?, ?)
			RETURNING id, email, password, created_at, updated_at
			"#,
		)
		.bind(email)
		.bind(password_hash)
		.bind(&now)
		.bind(&now)
		.fetch_one(&self.pool)
		.await
		.map_err(|e| map_insert_error(e, "user email"))?;

		let user = parse_user_row(&row)?;
		tracing::debug!(user_id = %user.id, "user created");
		Ok(user)
	}

	/// Find a user by email.
	#[tracing::instrument(skip(self), fields(email = %email))]
	pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, DbError> {
		let row = sqlx::query(
			"SELECT id, email, password, created_at, updated_at FROM users WHERE email = ?",
		)
		.bind(email)
		.fetch_optional(&self.pool)
		.await?;

		row.as_ref().map(parse_user_row).transpose()
	}

	/// Find a user by id.
	#[tracing::instrument(skip(self), fields(user_id = %id))]
	pub async fn find_by_id(&self, id: UserId) -> Result<Option<User>, DbError> {
		let row = sqlx::query(
			"SELECT id, email, password, created_at, updated_at FROM users WHERE id = ?",
		)
		.bind(id.into_inner())
		.fetch_optional(&self.pool)
		.await?;

		row.as_ref().map(parse_user_row).transpose()
	}
}
