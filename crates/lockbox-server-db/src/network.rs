// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Network record repository.
//!
//! Same shape as the credential repository, parameterized only by the entity
//! columns (an SSID instead of url/username).

use lockbox_server_auth::{NetworkId, UserId};
use sqlx::{sqlite::SqlitePool, Row};

use crate::error::{map_insert_error, DbError};

/// A full network row, password column included (ciphertext).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkRecord {
	pub id: NetworkId,
	pub user_id: UserId,
	pub title: String,
	pub network: String,
	pub password: String,
}

/// Partial projection of a network row without the password column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkMeta {
	pub id: NetworkId,
	pub user_id: UserId,
	pub title: String,
}

fn parse_network_row(row: &sqlx::sqlite::SqliteRow) -> Result<NetworkRecord, DbError> {
	Ok(NetworkRecord {
		id: NetworkId::new(row.try_get("id")?),
		user_id: UserId::new(row.try_get("user_id")?),
		title: row.try_get("title")?,
		network: row.try_get("network")?,
		password: row.try_get("password")?,
	})
}

fn parse_network_meta_row(row: &sqlx::sqlite::SqliteRow) -> Result<NetworkMeta, DbError> {
	Ok(NetworkMeta {
		id: NetworkId::new(row.try_get("id")?),
		user_id: UserId::new(row.try_get("user_id")?),
		title: row.try_get("title")?,
	})
}

/// Repository for network rows.
#[derive(Clone)]
pub struct NetworkRepository {
	pool: SqlitePool,
}

impl NetworkRepository {
	/// Create a new network repository with the given pool.
	pub fn new(pool: SqlitePool) -> Self {
		Self { pool }
	}

	/// Insert a network row.
	///
	/// `password` must already be ciphertext.
	///
	/// # Errors
	/// `DbError::Conflict` when the (user_id, title) UNIQUE index rejects the
	/// insert.
	#[tracing::instrument(skip(self, password), fields(user_id = %user_id, title = %title))]
	pub async fn create(
		&self,
		user_id: UserId,
		title: &str,
		network: &str,
		password: &str,
	) -> Result<NetworkRecord, DbError> {
		let row = sqlx::query(
			r#"
			INSERT INTO networks (user_id, title, network, password)
			VALUES (?, ?, ?, ?)
			RETURNING id, user_id, title, network, password
			"#,
		)
		.bind(user_id.into_inner())
		.bind(title)
		.bind(network)
		.bind(password)
		.fetch_one(&self.pool)
		.await
		.map_err(|e| map_insert_error(e, "network title"))?;

		let record = parse_network_row(&row)?;
		tracing::debug!(network_id = %record.id, user_id = %user_id, "network created");
		Ok(record)
	}

	/// Fetch a full network row by id.
	#[tracing::instrument(skip(self), fields(network_id = %id))]
	pub async fn find_by_id(&self, id: NetworkId) -> Result<Option<NetworkRecord>, DbError> {
		let row = sqlx::query("SELECT id, user_id, title, network, password FROM networks WHERE id = ?")
			.bind(id.into_inner())
			.fetch_optional(&self.pool)
			.await?;

		row.as_ref().map(parse_network_row).transpose()
	}

	/// Fetch the metadata projection of a network row by id.
	#[tracing::instrument(skip(self), fields(network_id = %id))]
	pub async fn find_meta_by_id(&self, id: NetworkId) -> Result<Option<NetworkMeta>, DbError> {
		let row = sqlx::query("SELECT id, user_id, title FROM networks WHERE id = ?")
			.bind(id.into_inner())
			.fetch_optional(&self.pool)
			.await?;

		row.as_ref().map(parse_network_meta_row).transpose()
	}

	/// Fetch the metadata projection of a user's network with this title.
	#[tracing::instrument(skip(self), fields(user_id = %user_id, title = %title))]
	pub async fn find_by_title(
		&self,
		user_id: UserId,
		title: &str,
	) -> Result<Option<NetworkMeta>, DbError> {
		let row = sqlx::query("SELECT id, user_id, title FROM networks WHERE user_id = ? AND title = ?")
			.bind(user_id.into_inner())
			.bind(title)
			.fetch_optional(&self.pool)
			.await?;

		row.as_ref().map(parse_network_meta_row).transpose()
	}

	/// List all of a user's network rows in insertion order.
	#[tracing::instrument(skip(self), fields(user_id = %user_id))]
	pub async fn list_for_user(&self, user_id: UserId) -> Result<Vec<NetworkRecord>, DbError> {
		let rows = sqlx::query(
			"SELECT id, user_id, title, network, password FROM networks WHERE user_id = ? ORDER BY id",
		)
		.bind(user_id.into_inner())
		.fetch_all(&self.pool)
		.await?;

		rows.iter().map(parse_network_row).collect()
	}

	/// Hard-delete a network row by id.
	///
	/// # Errors
	/// `DbError::NotFound` if no row matches.
	#[tracing::instrument(skip(self), fields(network_id = %id))]
	pub async fn delete(&self, id: NetworkId) -> Result<(), DbError> {
		let result = sqlx::query("DELETE FROM networks WHERE id = ?")
			.bind(id.into_inner())
			.execute(&self.pool)
			.await?;

		if result.rows_affected() == 0 {
			return Err(DbError::NotFound(format!("network {id}")));
		}

		tracing::debug!(network_id = %id, "network deleted");
		Ok(())
	}
}
