// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0
//! # API management
//!
//! Management service of the API gateway configuration. The crate currently
//! covers the identity providers of an environment: the external or built-in
//! user directories (in-memory, LDAP, OAuth based social logins, OpenID
//! Connect) users authenticate with.
//!
//! The crate is organized in providers. Every provider exposes its operations
//! through a trait ([`identity_provider::IdentityProviderApi`],
//! [`audit::AuditApi`], [`role::RoleApi`]) and delegates the persistence to a
//! backend driver selected in the configuration. The [`provider::Provider`]
//! manager gives the providers access to each other, which allows replacing
//! any of them with a mock in the tests.
//!
//! - [`identity_provider`]: create, update, list and delete the identity
//!   providers of the environment while keeping their display order dense.
//!
//! - [`audit`]: record the changes applied to the configuration.
//!
//! - [`role`]: resolve the roles referenced by the identity provider role
//!   mappings.
//!
//! - [`api`]: the HTTP API with the paginated collections.

pub mod api;
pub mod audit;
pub mod common;
pub mod config;
pub mod db;
pub mod db_migration;
pub mod error;
pub mod identity_provider;
pub mod provider;
pub mod role;
pub mod service;
