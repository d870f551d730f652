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
//! # Role lookup provider
//!
//! Resolves the portal and management roles referenced by identity provider
//! role mappings.
use async_trait::async_trait;
use std::sync::Arc;

pub mod backend;
pub mod error;
#[cfg(test)]
mod mock;
pub mod types;

use crate::config::Config;
use crate::service::ServiceState;
use backend::{RoleBackend, SqlBackend};
use error::RoleProviderError;
use types::*;

#[cfg(test)]
pub use mock::MockRoleProvider;
pub use types::RoleApi;

#[derive(Clone)]
pub struct RoleProvider {
    backend_driver: Arc<dyn RoleBackend>,
}

impl RoleProvider {
    pub fn new(config: &Config) -> Result<Self, RoleProviderError> {
        let backend_driver: Arc<dyn RoleBackend> = match config.role.driver.as_str() {
            "sql" => Arc::new(SqlBackend::default()),
            other => {
                return Err(RoleProviderError::UnsupportedDriver(other.to_string()));
            }
        };
        Ok(Self { backend_driver })
    }

    #[cfg(test)]
    pub(crate) fn with_backend(backend_driver: Arc<dyn RoleBackend>) -> Self {
        Self { backend_driver }
    }
}

#[async_trait]
impl RoleApi for RoleProvider {
    /// Find role by scope and name.
    #[tracing::instrument(level = "debug", skip(self, state), err)]
    async fn find_role<'a>(
        &self,
        state: &ServiceState,
        scope: RoleScope,
        name: &'a str,
    ) -> Result<Role, RoleProviderError> {
        self.backend_driver
            .find_role(state, scope, name)
            .await?
            .ok_or_else(|| RoleProviderError::RoleNotFound {
                scope,
                name: name.to_string(),
            })
    }
}
