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
use async_trait::async_trait;

use crate::common::types::ReferenceType;
use crate::identity_provider::types::*;
use crate::service::ServiceState;

pub mod error;
pub mod sql;

use error::IdentityProviderDatabaseError;
pub use sql::SqlBackend;

/// Backend driver interface for the identity provider directory.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IdentityProviderBackend: Send + Sync {
    /// Persist new identity provider.
    async fn create_identity_provider(
        &self,
        state: &ServiceState,
        idp: IdentityProvider,
    ) -> Result<IdentityProvider, IdentityProviderDatabaseError>;

    /// Delete identity provider.
    async fn delete_identity_provider(
        &self,
        state: &ServiceState,
        id: &str,
    ) -> Result<(), IdentityProviderDatabaseError>;

    /// Get single identity provider by ID.
    async fn get_identity_provider(
        &self,
        state: &ServiceState,
        id: &str,
    ) -> Result<Option<IdentityProvider>, IdentityProviderDatabaseError>;

    /// Highest order among the identity providers of the reference scope.
    async fn get_max_order(
        &self,
        state: &ServiceState,
        reference_id: &str,
        reference_type: ReferenceType,
    ) -> Result<Option<i32>, IdentityProviderDatabaseError>;

    /// List identity providers of the reference scope.
    async fn list_identity_providers(
        &self,
        state: &ServiceState,
        reference_id: &str,
        reference_type: ReferenceType,
    ) -> Result<Vec<IdentityProvider>, IdentityProviderDatabaseError>;

    /// Replace the stored identity provider.
    async fn update_identity_provider(
        &self,
        state: &ServiceState,
        idp: IdentityProvider,
    ) -> Result<IdentityProvider, IdentityProviderDatabaseError>;
}
