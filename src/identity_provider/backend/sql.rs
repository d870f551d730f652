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

use super::IdentityProviderBackend;
use super::error::IdentityProviderDatabaseError;
use crate::common::types::ReferenceType;
use crate::identity_provider::types::*;
use crate::service::ServiceState;

mod identity_provider;

#[derive(Default)]
pub struct SqlBackend {}

#[async_trait]
impl IdentityProviderBackend for SqlBackend {
    /// Persist new identity provider.
    #[tracing::instrument(level = "debug", skip(self, state, idp), fields(id = %idp.id))]
    async fn create_identity_provider(
        &self,
        state: &ServiceState,
        idp: IdentityProvider,
    ) -> Result<IdentityProvider, IdentityProviderDatabaseError> {
        identity_provider::create(&state.db, idp).await
    }

    /// Delete identity provider.
    #[tracing::instrument(level = "debug", skip(self, state))]
    async fn delete_identity_provider(
        &self,
        state: &ServiceState,
        id: &str,
    ) -> Result<(), IdentityProviderDatabaseError> {
        identity_provider::delete(&state.db, id).await
    }

    /// Get single identity provider by ID.
    #[tracing::instrument(level = "debug", skip(self, state))]
    async fn get_identity_provider(
        &self,
        state: &ServiceState,
        id: &str,
    ) -> Result<Option<IdentityProvider>, IdentityProviderDatabaseError> {
        identity_provider::get(&state.db, id).await
    }

    /// Highest order among the identity providers of the reference scope.
    #[tracing::instrument(level = "debug", skip(self, state))]
    async fn get_max_order(
        &self,
        state: &ServiceState,
        reference_id: &str,
        reference_type: ReferenceType,
    ) -> Result<Option<i32>, IdentityProviderDatabaseError> {
        identity_provider::max_order(&state.db, reference_id, reference_type).await
    }

    /// List identity providers of the reference scope.
    #[tracing::instrument(level = "debug", skip(self, state))]
    async fn list_identity_providers(
        &self,
        state: &ServiceState,
        reference_id: &str,
        reference_type: ReferenceType,
    ) -> Result<Vec<IdentityProvider>, IdentityProviderDatabaseError> {
        identity_provider::list(&state.db, reference_id, reference_type).await
    }

    /// Replace the stored identity provider.
    #[tracing::instrument(level = "debug", skip(self, state, idp), fields(id = %idp.id))]
    async fn update_identity_provider(
        &self,
        state: &ServiceState,
        idp: IdentityProvider,
    ) -> Result<IdentityProvider, IdentityProviderDatabaseError> {
        identity_provider::update(&state.db, idp).await
    }
}
