// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Test helpers for crates that exercise the database layer.

use lockbox_server_auth::UserId;
use sqlx::sqlite::SqlitePool;
use sqlx::Row;

use crate::migrations::run_migrations;

/// Create an in-memory pool with the full schema applied.
pub async fn create_test_pool() -> SqlitePool {
	let pool = SqlitePool::connect(":memory:").await.unwrap();
	run_migrations(&pool).await.unwrap();
	pool
}

/// Insert a bare user row and return its id.
pub async fn insert_test_user(pool: &SqlitePool, email: &str) -> UserId {
	let row = sqlx::query(
		r#"
		INSERT INTO users (email, password, created_at, updated_at)
		VALUES (?, 'test-hash', '2024-01-01T00:00:00+00:00', '2024-01-01T00:00:00+00:00')
		RETURNING id
		"#,
	)
	.bind(email)
	.fetch_one(pool)
	.await
	.unwrap();

	UserId::new(row.try_get("id").unwrap())
}
