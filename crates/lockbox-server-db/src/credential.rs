// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Credential record repository.
//!
//! Pure data access: every function maps 1:1 to a single-row or filtered-set
//! operation. The `password` column always holds ciphertext here; encryption
//! and decryption happen in the service layer.

use lockbox_server_auth::{CredentialId, UserId};
use sqlx::{sqlite::SqlitePool, Row};

use crate::error::{map_insert_error, DbError};

/// A full credential row, password column included (ciphertext).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialRecord {
	pub id: CredentialId,
	pub user_id: UserId,
	pub title: String,
	pub url: String,
	pub username: String,
	pub password: String,
}

/// Partial projection of a credential row without the password column.
///
/// Used internally for existence and ownership checks that have no business
/// touching ciphertext.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialMeta {
	pub id: CredentialId,
	pub user_id: UserId,
	pub title: String,
}

fn parse_credential_row(row: &sqlx::sqlite::SqliteRow) -> Result<CredentialRecord, DbError> {
	Ok(CredentialRecord {
		id: CredentialId::new(row.try_get("id")?),
		user_id: UserId::new(row.try_get("user_id")?),
		title: row.try_get("title")?,
		url: row.try_get("url")?,
		username: row.try_get("username")?,
		password: row.try_get("password")?,
	})
}

fn parse_credential_meta_row(row: &sqlx::sqlite::SqliteRow) -> Result<CredentialMeta, DbError> {
	Ok(CredentialMeta {
		id: CredentialId::new(row.try_get("id")?),
		user_id: UserId::new(row.try_get("user_id")?),
		title: row.try_get("title")?,
	})
}

/// Repository for credential rows.
#[derive(Clone)]
pub struct CredentialRepository {
	pool: SqlitePool,
}

impl CredentialRepository {
	/// Create a new credential repository with the given pool.
	pub fn new(pool: SqlitePool) -> Self {
		Self { pool }
	}

	/// Insert a credential row.
	///
	/// `password` must already be ciphertext.
	///
	/// # Errors
	/// `DbError::Conflict` when the (user_id, title) UNIQUE index rejects the
	/// insert - this is the backstop for the check-then-insert race.
	#[tracing::instrument(skip(self, password), fields(user_id = %user_id, title = %title))]
	pub async fn create(
		&self,
		user_id: UserId,
		title: &str,
		url: &str,
		username: &str,
		password: &str,
	) -> Result<CredentialRecord, DbError> {
		let row = sqlx::query(
			r#"
			INSERT INTO credentials (user_id, title, url, username, password)
			VALUES (?, ?, ?, ?, ?)
			RETURNING id, user_id, title, url, username, password
			"#,
		)
		.bind(user_id.into_inner())
		.bind(title)
		.bind(url)
		.bind(username)
		.bind(password)
		.fetch_one(&self.pool)
		.await
		.map_err(|e| map_insert_error(e, "credential title"))?;

		let record = parse_credential_row(&row)?;
		tracing::debug!(credential_id = %record.id, user_id = %user_id, "credential created");
		Ok(record)
	}

	/// Fetch a full credential row by id.
	#[tracing::instrument(skip(self), fields(credential_id = %id))]
	pub async fn find_by_id(&self, id: CredentialId) -> Result<Option<CredentialRecord>, DbError> {
		let row = sqlx::query(
			"SELECT id, user_id, title, url, username, password FROM credentials WHERE id = ?",
		)
		.bind(id.into_inner())
		.fetch_optional(&self.pool)
		.await?;

		row.as_ref().map(parse_credential_row).transpose()
	}

	/// Fetch the metadata projection of a credential row by id.
	#[tracing::instrument(skip(self), fields(credential_id = %id))]
	pub async fn find_meta_by_id(&self, id: CredentialId) -> Result<Option<CredentialMeta>, DbError> {
		let row = sqlx::query("SELECT id, user_id, title FROM credentials WHERE id = ?")
			.bind(id.into_inner())
			.fetch_optional(&self.pool)
			.await?;

		row.as_ref().map(parse_credential_meta_row).transpose()
	}

	/// Fetch the metadata projection of a user's credential with this title.
	#[tracing::instrument(skip(self), fields(user_id = %user_id, title = %title))]
	pub async fn find_by_title(
		&self,
		user_id: UserId,
		title: &str,
	) -> Result<Option<CredentialMeta>, DbError> {
		let row =
			sqlx::query("SELECT id, user_id, title FROM credentials WHERE user_id = ? AND title = ?")
				.bind(user_id.into_inner())
				.bind(title)
				.fetch_optional(&self.pool)
				.await?;

		row.as_ref().map(parse_credential_meta_row).transpose()
	}

	/// List all of a user's credential rows in insertion order.
	#[tracing::instrument(skip(self), fields(user_id = %user_id))]
	pub async fn list_for_user(&self, user_id: UserId) -> Result<Vec<CredentialRecord>, DbError> {
		let rows = sqlx::query(
			"SELECT id, user_id, title, url, username, password FROM credentials WHERE user_id = ? ORDER BY id",
		)
		.bind(user_id.into_inner())
		.fetch_all(&self.pool)
		.await?;

		rows.iter().map(parse_credential_row).collect()
	}

	/// Hard-delete a credential row by id.
	///
	/// # Errors
	/// `DbError::NotFound` if no row matches; callers that need a domain-level
	/// not-found must pre-check existence instead of relying on this.
	#[tracing::instrument(skip(self), fields(credential_id = %id))]
	pub async fn delete(&self, id: CredentialId) -> Result<(), DbError> {
		let result = sqlx::query("DELETE FROM credentials WHERE id = ?")
			.bind(id.into_inner())
			.execute(&self.pool)
			.await?;

		if result.rows_affected() == 0 {
			return Err(DbError::NotFound(format!("credential {id}")));
		}

		tracing::debug!(credential_id = %id, "credential deleted");
		Ok(())
	}
}
