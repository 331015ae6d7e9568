// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Argon2 hashing for account login passwords.
//!
//! Production uses Argon2id with the crate's strong defaults
//! (memory ~19 MiB, 2 iterations). Tests use reduced-cost parameters so the
//! suite stays fast; those parameters MUST NOT be used in production.

use argon2::{
	password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
	Argon2,
};
#[cfg(test)]
use argon2::{Algorithm, Params, Version};

use crate::error::AuthError;

/// Returns an Argon2 instance configured for the build context.
#[inline]
fn argon2_instance() -> Argon2<'static> {
	#[cfg(test)]
	{
		// Fast, insecure parameters for tests ONLY.
		let params = Params::new(
			1024, // memory_kib: 1 MiB
			1,    // iterations
			1,    // parallelism
			None, // output length = default
		)
		.expect("valid Argon2 params for tests");
		Argon2::new(Algorithm::Argon2id, Version::V0x13, params)
	}

	#[cfg(not(test))]
	{
		Argon2::default()
	}
}

/// Hash a login password for storage.
pub fn hash_password(plaintext: &str) -> Result<String, AuthError> {
	let salt = SaltString::generate(&mut OsRng);
	argon2_instance()
		.hash_password(plaintext.as_bytes(), &salt)
		.map(|hash| hash.to_string())
		.map_err(|e| AuthError::Hash(e.to_string()))
}

/// Verify a login password against its stored hash.
///
/// Returns `false` both for a wrong password and for a hash that fails to
/// parse; callers treat either as bad credentials.
pub fn verify_password(plaintext: &str, stored_hash: &str) -> bool {
	let Ok(parsed) = PasswordHash::new(stored_hash) else {
		return false;
	};
	argon2_instance()
		.verify_password(plaintext.as_bytes(), &parsed)
		.is_ok()
}
