// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

#[derive(Debug, thiserror::Error)]
pub enum SecretsError {
	#[error("Encryption failed: {0}")]
	Encryption(String),

	#[error("Decryption failed: {0}")]
	Decryption(String),

	#[error("Invalid key size: expected {expected} bytes, got {actual}")]
	InvalidKeySize { expected: usize, actual: usize },

	#[error("Invalid key encoding: {0}")]
	KeyDecode(String),

	#[error("Malformed ciphertext: {0}")]
	MalformedCiphertext(String),
}

pub type SecretsResult<T> = std::result::Result<T, SecretsError>;
