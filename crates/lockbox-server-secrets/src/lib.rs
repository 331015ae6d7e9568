// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Symmetric encryption for vault record passwords.
//!
//! Record passwords are encrypted at rest with AES-256-GCM under a single
//! process-wide key loaded from configuration at startup. Decryption is the
//! exact inverse of encryption for every stored ciphertext for the lifetime
//! of the key: there is no per-record key, no salt rotation, and no key
//! versioning.

pub mod cipher;
pub mod error;

pub use cipher::{generate_key, Cipher, KEY_SIZE, NONCE_SIZE};
pub use error::{SecretsError, SecretsResult};
