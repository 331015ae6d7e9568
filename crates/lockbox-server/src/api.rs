// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Application state and router assembly.

use axum::{
	middleware,
	routing::{get, post},
	Router,
};
use lockbox_server_auth::AuthConfig;
use lockbox_server_config::ServerConfig;
use lockbox_server_db::{
	CredentialRepository, NetworkRepository, SessionRepository, UserRepository,
};
use lockbox_server_secrets::{Cipher, SecretsError};
use sqlx::SqlitePool;

use crate::{
	auth_middleware,
	routes,
	services::{AccountsService, CredentialsService, NetworksService},
};

/// Application state shared across handlers.
///
/// Everything here is read-only after startup (the cipher key, the auth
/// config) or internally synchronized (the pool); requests never contend.
#[derive(Clone)]
pub struct AppState {
	pub pool: SqlitePool,
	pub user_repo: UserRepository,
	pub session_repo: SessionRepository,
	pub credentials_service: CredentialsService,
	pub networks_service: NetworksService,
	pub accounts_service: AccountsService,
	pub auth_config: AuthConfig,
}

/// Creates the application state from a pool and resolved configuration.
///
/// # Errors
/// Fails if the configured cipher key is not a valid hex-encoded 256-bit key.
pub fn create_app_state(pool: SqlitePool, config: &ServerConfig) -> Result<AppState, SecretsError> {
	let cipher = Cipher::from_hex(&config.secrets.cipher_key)?;

	let auth_config = AuthConfig {
		jwt_secret: config.auth.jwt_secret.clone(),
		token_ttl_secs: config.auth.token_ttl_secs,
	};

	let user_repo = UserRepository::new(pool.clone());
	let session_repo = SessionRepository::new(pool.clone());

	let credentials_service =
		CredentialsService::new(CredentialRepository::new(pool.clone()), cipher.clone());
	let networks_service = NetworksService::new(NetworkRepository::new(pool.clone()), cipher);
	let accounts_service = AccountsService::new(
		user_repo.clone(),
		session_repo.clone(),
		auth_config.clone(),
	);

	Ok(AppState {
		pool,
		user_repo,
		session_repo,
		credentials_service,
		networks_service,
		accounts_service,
		auth_config,
	})
}

/// Build the full router.
///
/// Both resource groups sit behind the bearer-token middleware; health and
/// the account endpoints are public.
pub fn create_router(state: AppState) -> Router {
	let vault_routes = Router::new()
		.route(
			"/credentials",
			get(routes::credentials::credentials_list).post(routes::credentials::credentials_store),
		)
		.route(
			"/credentials/{credential_id}",
			get(routes::credentials::credentials_locate)
				.delete(routes::credentials::credentials_delete),
		)
		.route(
			"/networks",
			get(routes::networks::networks_list).post(routes::networks::networks_store),
		)
		.route(
			"/networks/{network_id}",
			get(routes::networks::networks_locate).delete(routes::networks::networks_delete),
		)
		.route_layer(middleware::from_fn_with_state(
			state.clone(),
			auth_middleware::authenticate,
		));

	Router::new()
		.route("/health", get(routes::health::health_check))
		.route("/users", post(routes::users::sign_up))
		.route("/auth/sign-in", post(routes::users::sign_in))
		.merge(vault_routes)
		.with_state(state)
}
