// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration sources: defaults, TOML file, environment variables.

use std::path::PathBuf;

use tracing::{debug, trace};

use crate::error::ConfigError;
use crate::sections::{
	AuthConfigLayer, DatabaseConfigLayer, HttpConfigLayer, LoggingConfigLayer, SecretsConfigLayer,
	ServerConfigLayer,
};

/// Source precedence levels (higher = overrides lower).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
	Defaults = 10,
	ConfigFile = 20,
	Environment = 50,
}

/// Trait for configuration sources.
pub trait ConfigSource: Send + Sync {
	fn name(&self) -> &'static str;
	fn precedence(&self) -> Precedence;
	fn load(&self) -> Result<ServerConfigLayer, ConfigError>;
}

/// Built-in defaults source.
pub struct DefaultsSource;

impl ConfigSource for DefaultsSource {
	fn name(&self) -> &'static str {
		"defaults"
	}

	fn precedence(&self) -> Precedence {
		Precedence::Defaults
	}

	fn load(&self) -> Result<ServerConfigLayer, ConfigError> {
		debug!("loading defaults");
		Ok(ServerConfigLayer::default())
	}
}

/// TOML file configuration source.
pub struct TomlSource {
	path: PathBuf,
}

impl TomlSource {
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}

	pub fn system() -> Self {
		Self::new("/etc/lockbox/server.toml")
	}
}

impl ConfigSource for TomlSource {
	fn name(&self) -> &'static str {
		"toml-config"
	}

	fn precedence(&self) -> Precedence {
		Precedence::ConfigFile
	}

	fn load(&self) -> Result<ServerConfigLayer, ConfigError> {
		if !self.path.exists() {
			debug!(path = %self.path.display(), "config file not found, skipping");
			return Ok(ServerConfigLayer::default());
		}

		debug!(path = %self.path.display(), "loading config file");
		let content = std::fs::read_to_string(&self.path).map_err(|e| ConfigError::FileRead {
			path: self.path.clone(),
			source: e,
		})?;

		let layer: ServerConfigLayer =
			toml::from_str(&content).map_err(|e| ConfigError::TomlParse {
				path: self.path.clone(),
				source: e,
			})?;

		trace!("parsed config layer from TOML");
		Ok(layer)
	}
}

/// Environment variable source.
///
/// Convention: `LOCKBOX_SERVER_<SECTION>_<FIELD>`.
pub struct EnvSource;

impl ConfigSource for EnvSource {
	fn name(&self) -> &'static str {
		"environment"
	}

	fn precedence(&self) -> Precedence {
		Precedence::Environment
	}

	fn load(&self) -> Result<ServerConfigLayer, ConfigError> {
		debug!("loading environment variables");
		Ok(ServerConfigLayer {
			http: Some(HttpConfigLayer {
				host: env_var("LOCKBOX_SERVER_HTTP_HOST"),
				port: env_u16("LOCKBOX_SERVER_HTTP_PORT")?,
			}),
			database: Some(DatabaseConfigLayer {
				url: env_var("LOCKBOX_SERVER_DATABASE_URL"),
			}),
			auth: Some(AuthConfigLayer {
				jwt_secret: env_var("LOCKBOX_SERVER_AUTH_JWT_SECRET"),
				token_ttl_secs: env_i64("LOCKBOX_SERVER_AUTH_TOKEN_TTL_SECS")?,
				environment: env_var("LOCKBOX_SERVER_ENV"),
			}),
			secrets: Some(SecretsConfigLayer {
				cipher_key: env_var("LOCKBOX_SERVER_SECRETS_CIPHER_KEY"),
			}),
			logging: Some(LoggingConfigLayer {
				level: env_var("LOCKBOX_SERVER_LOGGING_LEVEL"),
			}),
		})
	}
}

fn env_var(name: &str) -> Option<String> {
	std::env::var(name).ok().filter(|s| !s.is_empty())
}

fn env_u16(name: &str) -> Result<Option<u16>, ConfigError> {
	match env_var(name) {
		Some(v) => v.parse().map(Some).map_err(|_| ConfigError::InvalidValue {
			key: name.to_string(),
			message: format!("invalid u16 value '{v}'"),
		}),
		None => Ok(None),
	}
}

fn env_i64(name: &str) -> Result<Option<i64>, ConfigError> {
	match env_var(name) {
		Some(v) => v.parse().map(Some).map_err(|_| ConfigError::InvalidValue {
			key: name.to_string(),
			message: format!("invalid i64 value '{v}'"),
		}),
		None => Ok(None),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn toml_layer_parses_all_sections() {
		let layer: ServerConfigLayer = toml::from_str(
			r#"
			[http]
			host = "0.0.0.0"
			port = 8080

			[database]
			url = "sqlite:/var/lib/lockbox/data.db"

			[auth]
			jwt_secret = "file-secret"

			[secrets]
			cipher_key = "abcd"

			[logging]
			level = "debug"
			"#,
		)
		.unwrap();

		assert_eq!(layer.http.unwrap().port, Some(8080));
		assert_eq!(
			layer.database.unwrap().url.as_deref(),
			Some("sqlite:/var/lib/lockbox/data.db")
		);
		assert_eq!(layer.auth.unwrap().jwt_secret.as_deref(), Some("file-secret"));
		assert_eq!(layer.secrets.unwrap().cipher_key.as_deref(), Some("abcd"));
		assert_eq!(layer.logging.unwrap().level.as_deref(), Some("debug"));
	}

	#[test]
	fn toml_layer_tolerates_missing_sections() {
		let layer: ServerConfigLayer = toml::from_str("[http]\nport = 9999\n").unwrap();
		assert!(layer.database.is_none());
		assert_eq!(layer.http.unwrap().port, Some(9999));
	}

	#[test]
	fn missing_file_loads_empty_layer() {
		let source = TomlSource::new("/nonexistent/lockbox-test.toml");
		let layer = source.load().unwrap();
		assert!(layer.http.is_none());
	}

	#[test]
	fn precedence_ordering() {
		assert!(Precedence::Environment > Precedence::ConfigFile);
		assert!(Precedence::ConfigFile > Precedence::Defaults);
	}
}
