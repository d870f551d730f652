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
//! # Provider manager
//!
//! Provider manager provides access to the individual service providers. This
//! gives an easy interact for passing overall manager down to the individual
//! providers that might need to call other providers while also allowing an
//! easy injection of mocked providers.
use derive_builder::Builder;
use mockall_double::double;

use crate::audit::AuditApi;
#[double]
use crate::audit::AuditProvider;
use crate::config::Config;
use crate::error::ManagementError;
use crate::identity_provider::IdentityProviderApi;
#[double]
use crate::identity_provider::IdentityProviderDirectory;
use crate::role::RoleApi;
#[double]
use crate::role::RoleProvider;

/// Global provider manager.
#[derive(Builder, Clone)]
// It is necessary to use the owned pattern since otherwise builder invokes clone which immediately
// confuses mockall used in tests
#[builder(pattern = "owned")]
pub struct Provider {
    /// Configuration.
    pub config: Config,
    /// Audit provider.
    audit: AuditProvider,
    /// Identity provider directory.
    identity_provider: IdentityProviderDirectory,
    /// Role provider.
    role: RoleProvider,
}

impl Provider {
    pub fn new(cfg: Config) -> Result<Self, ManagementError> {
        let audit_provider = AuditProvider::new(&cfg)?;
        let identity_provider_directory = IdentityProviderDirectory::new(&cfg)?;
        let role_provider = RoleProvider::new(&cfg)?;

        Ok(Self {
            config: cfg,
            audit: audit_provider,
            identity_provider: identity_provider_directory,
            role: role_provider,
        })
    }

    /// Get the audit provider.
    pub fn get_audit_provider(&self) -> &impl AuditApi {
        &self.audit
    }

    /// Get the identity provider directory.
    pub fn get_identity_provider_directory(&self) -> &impl IdentityProviderApi {
        &self.identity_provider
    }

    /// Get the role provider.
    pub fn get_role_provider(&self) -> &impl RoleApi {
        &self.role
    }
}

#[cfg(test)]
impl Provider {
    pub fn mocked_builder() -> ProviderBuilder {
        let config = Config::default();
        let audit_mock = crate::audit::MockAuditProvider::default();
        let identity_provider_mock =
            crate::identity_provider::MockIdentityProviderDirectory::default();
        let role_mock = crate::role::MockRoleProvider::default();

        ProviderBuilder::default()
            .config(config.clone())
            .audit(audit_mock)
            .identity_provider(identity_provider_mock)
            .role(role_mock)
    }
}
