// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! AES-256-GCM cipher for the stored password field.
//!
//! Stored form is `base64(nonce || ciphertext)` in a TEXT column. The nonce
//! travels with the ciphertext, so decryption needs only the process-wide key.

use aes_gcm::{
	aead::{Aead, KeyInit, OsRng},
	Aes256Gcm, Key, Nonce,
};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use rand::RngCore;
use zeroize::Zeroizing;

use crate::error::{SecretsError, SecretsResult};

/// Size of the encryption key in bytes (256 bits for AES-256).
pub const KEY_SIZE: usize = 32;

/// Size of the AES-GCM nonce in bytes.
pub const NONCE_SIZE: usize = 12;

/// Generate a random encryption key.
///
/// Used by operators to mint the process-wide key; the running server only
/// ever loads an existing key from configuration.
pub fn generate_key() -> Zeroizing<[u8; KEY_SIZE]> {
	let mut key = Zeroizing::new([0u8; KEY_SIZE]);
	OsRng.fill_bytes(key.as_mut());
	key
}

/// Generate a random nonce.
///
/// Uses 96-bit random nonces from OsRng. The same (key, nonce) pair must
/// never be reused; AES-GCM has a 2^-32 collision probability after
/// approximately 2^32 encryptions with the same key - well beyond expected
/// volumes for per-user vault records.
fn generate_nonce() -> [u8; NONCE_SIZE] {
	let mut nonce = [0u8; NONCE_SIZE];
	OsRng.fill_bytes(&mut nonce);
	nonce
}

/// Process-wide cipher for record passwords.
///
/// Cheap to clone; holds only the derived AES key. Safe for concurrent use
/// from any number of request handlers.
#[derive(Clone)]
pub struct Cipher {
	inner: Aes256Gcm,
}

impl std::fmt::Debug for Cipher {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		// Never expose key material through Debug.
		f.debug_struct("Cipher").finish_non_exhaustive()
	}
}

impl Cipher {
	/// Create a cipher from raw key bytes.
	pub fn new(key: &[u8; KEY_SIZE]) -> Self {
		let key = Key::<Aes256Gcm>::from_slice(key);
		Self {
			inner: Aes256Gcm::new(key),
		}
	}

	/// Create a cipher from a hex-encoded key (64 hex characters).
	///
	/// This is the form the key takes in configuration
	/// (`LOCKBOX_SERVER_SECRETS_CIPHER_KEY`).
	pub fn from_hex(encoded: &str) -> SecretsResult<Self> {
		let bytes = hex::decode(encoded.trim())
			.map_err(|e| SecretsError::KeyDecode(format!("invalid hex key: {e}")))?;
		if bytes.len() != KEY_SIZE {
			return Err(SecretsError::InvalidKeySize {
				expected: KEY_SIZE,
				actual: bytes.len(),
			});
		}
		let mut key = Zeroizing::new([0u8; KEY_SIZE]);
		key.copy_from_slice(&bytes);
		Ok(Self::new(&key))
	}

	/// Encrypt a plaintext password for storage.
	///
	/// Returns `base64(nonce || ciphertext)`. Two encryptions of the same
	/// plaintext produce different outputs (random nonce), but every output
	/// decrypts back to the exact original.
	pub fn encrypt(&self, plaintext: &str) -> SecretsResult<String> {
		let nonce_bytes = generate_nonce();
		let nonce = Nonce::from_slice(&nonce_bytes);

		let ciphertext = self
			.inner
			.encrypt(nonce, plaintext.as_bytes())
			.map_err(|e| SecretsError::Encryption(format!("password encryption failed: {e}")))?;

		let mut out = Vec::with_capacity(NONCE_SIZE + ciphertext.len());
		out.extend_from_slice(&nonce_bytes);
		out.extend_from_slice(&ciphertext);
		Ok(BASE64.encode(out))
	}

	/// Decrypt a stored password.
	///
	/// Exact inverse of [`Cipher::encrypt`] for every ciphertext produced
	/// under the same key.
	pub fn decrypt(&self, stored: &str) -> SecretsResult<String> {
		let raw = BASE64
			.decode(stored)
			.map_err(|e| SecretsError::MalformedCiphertext(format!("invalid base64: {e}")))?;
		if raw.len() < NONCE_SIZE {
			return Err(SecretsError::MalformedCiphertext(format!(
				"ciphertext too short: {} bytes",
				raw.len()
			)));
		}

		let (nonce_bytes, ciphertext) = raw.split_at(NONCE_SIZE);
		let nonce = Nonce::from_slice(nonce_bytes);

		let plaintext: Zeroizing<Vec<u8>> = Zeroizing::new(
			self.inner
				.decrypt(nonce, ciphertext)
				.map_err(|e| SecretsError::Decryption(format!("password decryption failed: {e}")))?,
		);

		String::from_utf8(plaintext.to_vec())
			.map_err(|e| SecretsError::Decryption(format!("plaintext is not valid UTF-8: {e}")))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	fn test_cipher() -> Cipher {
		Cipher::new(&generate_key())
	}

	#[test]
	fn key_generation_produces_unique_keys() {
		let key1 = generate_key();
		let key2 = generate_key();
		assert_ne!(key1.as_slice(), key2.as_slice());
	}

	#[test]
	fn from_hex_roundtrip() {
		let key = generate_key();
		let encoded = hex::encode(key.as_slice());
		let cipher = Cipher::from_hex(&encoded).unwrap();

		let stored = cipher.encrypt("hunter2").unwrap();
		assert_eq!(cipher.decrypt(&stored).unwrap(), "hunter2");
	}

	#[test]
	fn from_hex_rejects_wrong_length() {
		let result = Cipher::from_hex("deadbeef");
		assert!(matches!(
			result,
			Err(SecretsError::InvalidKeySize {
				expected: KEY_SIZE,
				actual: 4
			})
		));
	}

	#[test]
	fn from_hex_rejects_non_hex() {
		assert!(matches!(
			Cipher::from_hex("zz"),
			Err(SecretsError::KeyDecode(_))
		));
	}

	#[test]
	fn encryption_roundtrip() {
		let cipher = test_cipher();
		let stored = cipher.encrypt("super secret value").unwrap();

		assert_ne!(stored, "super secret value");
		assert_eq!(cipher.decrypt(&stored).unwrap(), "super secret value");
	}

	#[test]
	fn empty_password_roundtrip() {
		let cipher = test_cipher();
		let stored = cipher.encrypt("").unwrap();
		assert_eq!(cipher.decrypt(&stored).unwrap(), "");
	}

	#[test]
	fn unicode_password_roundtrip() {
		let cipher = test_cipher();
		let plaintext = "pa\u{00df}w\u{00f6}rd-\u{65e5}\u{672c}\u{8a9e}-\u{1f512}";
		let stored = cipher.encrypt(plaintext).unwrap();
		assert_eq!(cipher.decrypt(&stored).unwrap(), plaintext);
	}

	#[test]
	fn long_password_roundtrip() {
		let cipher = test_cipher();
		let plaintext = "x".repeat(4096);
		let stored = cipher.encrypt(&plaintext).unwrap();
		assert_eq!(cipher.decrypt(&stored).unwrap(), plaintext);
	}

	#[test]
	fn wrong_key_fails_decryption() {
		let cipher1 = test_cipher();
		let cipher2 = test_cipher();

		let stored = cipher1.encrypt("secret").unwrap();
		assert!(cipher2.decrypt(&stored).is_err());
	}

	#[test]
	fn tampered_ciphertext_fails() {
		let cipher = test_cipher();
		let stored = cipher.encrypt("secret").unwrap();

		let mut raw = BASE64.decode(&stored).unwrap();
		let last = raw.len() - 1;
		raw[last] ^= 0xFF;
		let tampered = BASE64.encode(raw);

		assert!(cipher.decrypt(&tampered).is_err());
	}

	#[test]
	fn truncated_ciphertext_fails() {
		let cipher = test_cipher();
		assert!(matches!(
			cipher.decrypt(&BASE64.encode([0u8; NONCE_SIZE - 1])),
			Err(SecretsError::MalformedCiphertext(_))
		));
	}

	#[test]
	fn non_base64_input_fails() {
		let cipher = test_cipher();
		assert!(matches!(
			cipher.decrypt("not base64 at all!!!"),
			Err(SecretsError::MalformedCiphertext(_))
		));
	}

	proptest! {
		#[test]
		fn prop_encryption_roundtrip(plaintext in "\\PC{0,512}") {
			let cipher = test_cipher();

			let stored = cipher.encrypt(&plaintext).unwrap();
			prop_assert_eq!(cipher.decrypt(&stored).unwrap(), plaintext);
		}

		#[test]
		fn prop_different_encryptions_produce_different_ciphertexts(plaintext in "\\PC{1,256}") {
			let cipher = test_cipher();

			let stored1 = cipher.encrypt(&plaintext).unwrap();
			let stored2 = cipher.encrypt(&plaintext).unwrap();

			prop_assert_ne!(stored1, stored2);
		}

		#[test]
		fn prop_stored_form_is_base64_with_nonce_prefix(plaintext in "\\PC{0,256}") {
			let cipher = test_cipher();

			let stored = cipher.encrypt(&plaintext).unwrap();
			let raw = BASE64.decode(&stored).unwrap();

			prop_assert!(raw.len() >= NONCE_SIZE);
		}
	}
}
