// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use lockbox_server_db::NetworkRecord;
use serde::{Deserialize, Serialize};

/// Request to store a new network.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateNetworkRequest {
	pub title: String,
	pub network: String,
	pub password: String,
}

/// A network in API responses, password already decrypted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkResponse {
	pub id: i64,
	#[serde(rename = "userId")]
	pub user_id: i64,
	pub title: String,
	pub network: String,
	pub password: String,
}

impl From<NetworkRecord> for NetworkResponse {
	fn from(record: NetworkRecord) -> Self {
		Self {
			id: record.id.into_inner(),
			user_id: record.user_id.into_inner(),
			title: record.title,
			network: record.network,
			password: record.password,
		}
	}
}
