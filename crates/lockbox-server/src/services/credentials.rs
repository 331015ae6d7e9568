// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Credential domain service.

use lockbox_server_auth::{CredentialId, UserId};
use lockbox_server_db::{CredentialRecord, CredentialRepository, DbError};
use lockbox_server_secrets::Cipher;

use crate::error::ServiceError;

/// Per-user CRUD over credential records, with the password field encrypted
/// on the way in and decrypted on the way out.
#[derive(Clone)]
pub struct CredentialsService {
	repo: CredentialRepository,
	cipher: Cipher,
}

impl CredentialsService {
	pub fn new(repo: CredentialRepository, cipher: Cipher) -> Self {
		Self { repo, cipher }
	}

	/// List all of a user's credentials with passwords decrypted.
	///
	/// An empty result set is `NotFound`, not an empty 200; existing
	/// clients treat the two differently.
	#[tracing::instrument(skip(self), fields(user_id = %user_id))]
	pub async fn list(&self, user_id: UserId) -> Result<Vec<CredentialRecord>, ServiceError> {
		let mut records = self.repo.list_for_user(user_id).await?;
		if records.is_empty() {
			return Err(ServiceError::NotFound);
		}

		for record in &mut records {
			record.password = self.cipher.decrypt(&record.password)?;
		}
		Ok(records)
	}

	/// Fetch one credential by id with the password decrypted.
	///
	/// Ownership is checked after the fetch; a record owned by another user
	/// is reported exactly like a missing one.
	#[tracing::instrument(skip(self), fields(user_id = %user_id, credential_id = %id))]
	pub async fn locate(
		&self,
		user_id: UserId,
		id: CredentialId,
	) -> Result<CredentialRecord, ServiceError> {
		let Some(mut record) = self.repo.find_by_id(id).await? else {
			return Err(ServiceError::NotFound);
		};
		if record.user_id != user_id {
			return Err(ServiceError::NotFound);
		}

		record.password = self.cipher.decrypt(&record.password)?;
		Ok(record)
	}

	/// Encrypt and store a new credential, enforcing per-user title uniqueness.
	#[tracing::instrument(skip(self, password), fields(user_id = %user_id, title = %title))]
	pub async fn create(
		&self,
		user_id: UserId,
		title: &str,
		url: &str,
		username: &str,
		password: &str,
	) -> Result<CredentialId, ServiceError> {
		if self.repo.find_by_title(user_id, title).await?.is_some() {
			return Err(ServiceError::NameConflict);
		}

		let encrypted = self.cipher.encrypt(password)?;
		match self.repo.create(user_id, title, url, username, &encrypted).await {
			Ok(record) => Ok(record.id),
			// Two concurrent creates can both pass the pre-check; the UNIQUE
			// index decides and the loser surfaces here.
			Err(DbError::Conflict(_)) => Err(ServiceError::NameConflict),
			Err(e) => Err(e.into()),
		}
	}

	/// Delete a credential under the same absent-or-not-owned rule as locate.
	#[tracing::instrument(skip(self), fields(user_id = %user_id, credential_id = %id))]
	pub async fn delete(&self, user_id: UserId, id: CredentialId) -> Result<(), ServiceError> {
		let Some(meta) = self.repo.find_meta_by_id(id).await? else {
			return Err(ServiceError::NotFound);
		};
		if meta.user_id != user_id {
			return Err(ServiceError::NotFound);
		}

		self.repo.delete(id).await?;
		Ok(())
	}
}
