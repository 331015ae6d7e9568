// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Login session repository.

use chrono::Utc;
use lockbox_server_auth::{Session, SessionId, UserId};
use sqlx::{sqlite::SqlitePool, Row};

use crate::error::DbError;
use crate::user::parse_timestamp;

fn parse_session_row(row: &sqlx::sqlite::SqliteRow) -> Result<Session, DbError> {
	Ok(Session {
		id: SessionId::new(row.try_get("id")?),
		user_id: UserId::new(row.try_get("user_id")?),
		token: row.try_get("token")?,
		created_at: parse_timestamp(row.try_get("created_at")?)?,
		updated_at: parse_timestamp(row.try_get("updated_at")?)?,
	})
}

/// Repository for login session rows.
///
/// Tokens are stored exactly as issued; a bearer token authenticates only
/// while its row exists.
#[derive(Clone)]
pub struct SessionRepository {
	pool: SqlitePool,
}

impl SessionRepository {
	/// Create a new session repository with the given pool.
	pub fn new(pool: SqlitePool) -> Self {
		Self { pool }
	}

	/// Persist a session for a freshly issued token.
	#[tracing::instrument(skip(self, token), fields(user_id = %user_id))]
	pub async fn create_session(&self, user_id: UserId, token: &str) -> Result<Session, DbError> {
		let now = Utc::now().to_rfc3339();

		let row = sqlx::query(
			r#"
			INSERT INTO sessions (user_id, token, created_at, updated_at)
			VALUES (?, ?, ?, ?)
			RETURNING id, user_id, token, created_at, updated_at
			"#,
		)
		.bind(user_id.into_inner())
		.bind(token)
		.bind(&now)
		.bind(&now)
		.fetch_one(&self.pool)
		.await?;

		let session = parse_session_row(&row)?;
		tracing::debug!(session_id = %session.id, user_id = %user_id, "session created");
		Ok(session)
	}

	/// Find the session for an exact token value.
	#[tracing::instrument(skip(self, token))]
	pub async fn find_by_token(&self, token: &str) -> Result<Option<Session>, DbError> {
		let row = sqlx::query(
			"SELECT id, user_id, token, created_at, updated_at FROM sessions WHERE token = ?",
		)
		.bind(token)
		.fetch_optional(&self.pool)
		.await?;

		row.as_ref().map(parse_session_row).transpose()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::testing::{create_test_pool, insert_test_user};

	#[tokio::test]
	async fn create_and_find_session() {
		let pool = create_test_pool().await;
		let user_id = insert_test_user(&pool, "s@example.com").await;
		let repo = SessionRepository::new(pool);

		let created = repo.create_session(user_id, "tok-123").await.unwrap();
		assert_eq!(created.user_id, user_id);

		let found = repo.find_by_token("tok-123").await.unwrap().unwrap();
		assert_eq!(found.id, created.id);
	}

	#[tokio::test]
	async fn unknown_token_is_none() {
		let pool = create_test_pool().await;
		let repo = SessionRepository::new(pool);

		assert!(repo.find_by_token("missing").await.unwrap().is_none());
	}
}
