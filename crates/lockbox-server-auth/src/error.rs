// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
	#[error("Password hashing failed: {0}")]
	Hash(String),

	#[error("Token signing failed: {0}")]
	TokenSign(String),

	#[error("Invalid token")]
	InvalidToken,
}

pub type Result<T> = std::result::Result<T, AuthError>;
