// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use lockbox_server_db::CredentialRecord;
use serde::{Deserialize, Serialize};

/// Request to store a new credential.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCredentialRequest {
	pub title: String,
	pub url: String,
	pub username: String,
	pub password: String,
}

/// A credential in API responses.
///
/// The `password` field carries the decrypted plaintext; this type is only
/// ever built from a record the service has already decrypted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CredentialResponse {
	pub id: i64,
	#[serde(rename = "userId")]
	pub user_id: i64,
	pub title: String,
	pub url: String,
	pub username: String,
	pub password: String,
}

impl From<CredentialRecord> for CredentialResponse {
	fn from(record: CredentialRecord) -> Self {
		Self {
			id: record.id.into_inner(),
			user_id: record.user_id.into_inner(),
			title: record.title,
			url: record.url,
			username: record.username,
			password: record.password,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use lockbox_server_auth::{CredentialId, UserId};

	#[test]
	fn response_uses_camel_case_owner_field() {
		let response = CredentialResponse::from(CredentialRecord {
			id: CredentialId::new(1),
			user_id: UserId::new(2),
			title: "github".to_string(),
			url: "https://github.com".to_string(),
			username: "octocat".to_string(),
			password: "plaintext".to_string(),
		});

		let json = serde_json::to_string(&response).unwrap();
		assert!(json.contains("\"userId\":2"));
		assert!(!json.contains("user_id"));
	}
}
