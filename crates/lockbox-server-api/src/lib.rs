// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! HTTP request and response types for the lockbox server.
//!
//! These are the wire shapes clients depend on; field names (including the
//! shared `credentialId` creation response) are part of the contract and
//! must not drift from what existing clients expect.

pub mod common;
pub mod credentials;
pub mod networks;
pub mod users;

pub use common::{CreatedResponse, ErrorBody};
pub use credentials::{CreateCredentialRequest, CredentialResponse};
pub use networks::{CreateNetworkRequest, NetworkResponse};
pub use users::{SignInRequest, SignInResponse, SignUpRequest, SignUpResponse};
