// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Network domain service.
//!
//! Same shape as the credential service, parameterized by the entity: a
//! network record carries an SSID instead of url/username, and the same
//! title-uniqueness, ownership and encryption rules apply.

use lockbox_server_auth::{NetworkId, UserId};
use lockbox_server_db::{DbError, NetworkRecord, NetworkRepository};
use lockbox_server_secrets::Cipher;

use crate::error::ServiceError;

/// Per-user CRUD over network records.
#[derive(Clone)]
pub struct NetworksService {
	repo: NetworkRepository,
	cipher: Cipher,
}

impl NetworksService {
	pub fn new(repo: NetworkRepository, cipher: Cipher) -> Self {
		Self { repo, cipher }
	}

	/// List all of a user's networks with passwords decrypted.
	///
	/// An empty result set is `NotFound`, matching the credential contract.
	#[tracing::instrument(skip(self), fields(user_id = %user_id))]
	pub async fn list(&self, user_id: UserId) -> Result<Vec<NetworkRecord>, ServiceError> {
		let mut records = self.repo.list_for_user(user_id).await?;
		if records.is_empty() {
			return Err(ServiceError::NotFound);
		}

		for record in &mut records {
			record.password = self.cipher.decrypt(&record.password)?;
		}
		Ok(records)
	}

	/// Fetch one network by id with the password decrypted.
	#[tracing::instrument(skip(self), fields(user_id = %user_id, network_id = %id))]
	pub async fn locate(&self, user_id: UserId, id: NetworkId) -> Result<NetworkRecord, ServiceError> {
		let Some(mut record) = self.repo.find_by_id(id).await? else {
			return Err(ServiceError::NotFound);
		};
		if record.user_id != user_id {
			return Err(ServiceError::NotFound);
		}

		record.password = self.cipher.decrypt(&record.password)?;
		Ok(record)
	}

	/// Encrypt and store a new network, enforcing per-user title uniqueness.
	#[tracing::instrument(skip(self, password), fields(user_id = %user_id, title = %title))]
	pub async fn create(
		&self,
		user_id: UserId,
		title: &str,
		network: &str,
		password: &str,
	) -> Result<NetworkId, ServiceError> {
		if self.repo.find_by_title(user_id, title).await?.is_some() {
			return Err(ServiceError::NameConflict);
		}

		let encrypted = self.cipher.encrypt(password)?;
		match self.repo.create(user_id, title, network, &encrypted).await {
			Ok(record) => Ok(record.id),
			Err(DbError::Conflict(_)) => Err(ServiceError::NameConflict),
			Err(e) => Err(e.into()),
		}
	}

	/// Delete a network under the absent-or-not-owned rule.
	#[tracing::instrument(skip(self), fields(user_id = %user_id, network_id = %id))]
	pub async fn delete(&self, user_id: UserId, id: NetworkId) -> Result<(), ServiceError> {
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
