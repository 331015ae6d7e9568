// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Lockbox password vault server.
//!
//! This crate provides an HTTP server exposing per-user CRUD for two secret
//! types - credentials (website logins) and networks (Wi-Fi records) - with
//! the sensitive field encrypted at rest and decrypted on the way out.

pub mod api;
pub mod auth_middleware;
pub mod error;
pub mod routes;
pub mod services;
pub mod validation;

pub use api::{create_app_state, create_router, AppState};
pub use error::ServiceError;
pub use lockbox_server_config::ServerConfig;
