// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Session types.
//!
//! A bearer token only authenticates while a matching session row exists;
//! signing out (or clearing sessions) invalidates otherwise-valid JWTs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{SessionId, UserId};

/// A persisted login session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
	/// Unique identifier for this session.
	pub id: SessionId,

	/// The user this session belongs to.
	pub user_id: UserId,

	/// The exact token issued at sign-in.
	#[serde(skip_serializing)]
	pub token: String,

	/// When the session was created.
	pub created_at: DateTime<Utc>,

	/// When the session was last updated.
	pub updated_at: DateTime<Utc>,
}
