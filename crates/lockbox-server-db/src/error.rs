// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

#[derive(Debug, thiserror::Error)]
pub enum DbError {
	#[error("Database error: {0}")]
	Sqlx(#[from] sqlx::Error),

	#[error("Not found: {0}")]
	NotFound(String),

	#[error("Conflict: {0}")]
	Conflict(String),

	#[error("Internal: {0}")]
	Internal(String),
}

pub type Result<T> = std::result::Result<T, DbError>;

/// Map an insert error, surfacing UNIQUE index violations as [`DbError::Conflict`].
///
/// This is what closes the check-then-insert race on (user_id, title): two
/// concurrent creates can both pass the service pre-check, but only one
/// insert survives the index and the loser gets a typed conflict.
pub(crate) fn map_insert_error(e: sqlx::Error, what: &str) -> DbError {
	if let sqlx::Error::Database(ref db) = e {
		if db.is_unique_violation() {
			return DbError::Conflict(format!("{what} already exists"));
		}
	}
	DbError::Sqlx(e)
}
