// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use serde::{Deserialize, Serialize};

/// Error body returned for every failed request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
	/// Stable error name, e.g. `NotFoundError`.
	pub name: String,
	/// Human-readable message.
	pub message: String,
}

impl ErrorBody {
	pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			message: message.into(),
		}
	}
}

/// Creation response shared by both resource groups.
///
/// The field is named `credentialId` even for networks; existing clients
/// read that exact key, so both groups return it verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedResponse {
	#[serde(rename = "credentialId")]
	pub credential_id: i64,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn created_response_uses_the_shared_field_name() {
		let body = CreatedResponse { credential_id: 12 };
		let json = serde_json::to_string(&body).unwrap();
		assert_eq!(json, r#"{"credentialId":12}"#);
	}

	#[test]
	fn error_body_shape() {
		let body = ErrorBody::new("NotFoundError", "No result for this search!");
		let json = serde_json::to_string(&body).unwrap();
		assert_eq!(
			json,
			r#"{"name":"NotFoundError","message":"No result for this search!"}"#
		);
	}
}
