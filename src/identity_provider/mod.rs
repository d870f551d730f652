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
//! # Identity provider directory
//!
//! Manages the identity provider configuration records of a reference scope
//! (environment).
//!
//! ## Identifier
//!
//! The identifier of the identity provider is derived from its name at the
//! creation time and never changes afterwards. Creating a second identity
//! provider with a name resolving to the same identifier is rejected.
//!
//! ## Order
//!
//! Identity providers with a positive `order` form a dense run `1..=n` used
//! for the display sequence. Moving one provider shifts the providers in
//! between by one, see [`reorder`]. The order updates are persisted one by one
//! and are not transactional: a failure in the middle leaves the already
//! persisted providers with their new order.
//!
//! ## Social providers
//!
//! Providers backed by a third party OAuth exchange (`GOOGLE`, `GITHUB`)
//! require the `clientId` and `clientSecret` configuration.
use async_trait::async_trait;
use chrono::Utc;
use itertools::Itertools;
use std::collections::BTreeMap;
use std::sync::Arc;
use validator::Validate;

pub mod backend;
pub mod error;
#[cfg(test)]
mod mock;
pub mod reorder;
pub mod types;

use crate::audit::AuditApi;
use crate::audit::error::AuditProviderError;
use crate::audit::types::{AuditEvent, AuditRecordCreateBuilder};
use crate::common::id::generate_id;
use crate::common::types::ExecutionContext;
use crate::config::Config;
use crate::role::RoleApi;
use crate::role::types::RoleScope;
use crate::service::ServiceState;
use backend::{IdentityProviderBackend, SqlBackend};
pub use error::IdentityProviderError;
use types::*;

#[cfg(test)]
pub use mock::MockIdentityProviderDirectory;
pub use types::IdentityProviderApi;

/// Audit property naming the identity provider the event is about.
pub const AUDIT_PROPERTY: &str = "IDENTITY_PROVIDER";

#[derive(Clone)]
pub struct IdentityProviderDirectory {
    backend_driver: Arc<dyn IdentityProviderBackend>,
}

impl IdentityProviderDirectory {
    pub fn new(config: &Config) -> Result<Self, IdentityProviderError> {
        let backend_driver: Arc<dyn IdentityProviderBackend> =
            match config.identity_provider.driver.as_str() {
                "sql" => Arc::new(SqlBackend::default()),
                other => {
                    return Err(IdentityProviderError::UnsupportedDriver(other.to_string()));
                }
            };
        Ok(Self { backend_driver })
    }

    #[cfg(test)]
    pub(crate) fn with_backend(backend_driver: Arc<dyn IdentityProviderBackend>) -> Self {
        Self { backend_driver }
    }

    /// Emit the audit record of the identity provider change.
    ///
    /// The record belongs to the reference scope of the `subject`.
    async fn audit(
        &self,
        state: &ServiceState,
        event: AuditEvent,
        subject: &IdentityProvider,
        old_value: Option<&IdentityProvider>,
        new_value: Option<&IdentityProvider>,
    ) -> Result<(), IdentityProviderError> {
        let mut record = AuditRecordCreateBuilder::default();
        record
            .reference_id(subject.reference_id.clone())
            .reference_type(subject.reference_type)
            .event(event)
            .properties(BTreeMap::from([(
                AUDIT_PROPERTY.to_string(),
                subject.id.clone(),
            )]))
            .created_at(Utc::now());
        if let Some(val) = old_value {
            record.old_value(serde_json::to_value(val)?);
        }
        if let Some(val) = new_value {
            record.new_value(serde_json::to_value(val)?);
        }
        state
            .provider
            .get_audit_provider()
            .create_audit_record(state, record.build().map_err(AuditProviderError::from)?)
            .await?;
        Ok(())
    }

    /// Ensure the social identity provider carries the client credentials.
    fn check_social_provider(idp: &IdentityProvider) -> Result<(), IdentityProviderError> {
        if idp.configuration_str(CLIENT_ID).is_none() {
            return Err(IdentityProviderError::ClientIdRequired(idp.name.clone()));
        }
        if idp.configuration_str(CLIENT_SECRET).is_none() {
            return Err(IdentityProviderError::ClientSecretRequired(idp.name.clone()));
        }
        Ok(())
    }

    /// Ensure every role referenced by the role mappings exists.
    async fn check_role_mappings(
        &self,
        state: &ServiceState,
        params: &IdentityProviderUpdate,
    ) -> Result<(), IdentityProviderError> {
        for mapping in params.role_mappings.values() {
            if let Some(role) = &mapping.portal {
                state
                    .provider
                    .get_role_provider()
                    .find_role(state, RoleScope::Portal, role)
                    .await?;
            }
            if let Some(role) = &mapping.management {
                state
                    .provider
                    .get_role_provider()
                    .find_role(state, RoleScope::Management, role)
                    .await?;
            }
        }
        Ok(())
    }

    /// Renumber the ordered siblings of the identity provider moved to
    /// `target.order`.
    async fn reorder_and_save(
        &self,
        state: &ServiceState,
        target: &IdentityProvider,
    ) -> Result<IdentityProvider, IdentityProviderError> {
        let siblings = self
            .backend_driver
            .list_identity_providers(state, &target.reference_id, target.reference_type)
            .await
            .map_err(IdentityProviderError::technical(format!(
                "An error occurs while trying to reorder identity providers of {}",
                target.reference_id
            )))?;

        let mut saved_target: Option<IdentityProvider> = None;
        for idp in reorder::reorder(siblings, target)? {
            let id = idp.id.clone();
            let saved = self
                .backend_driver
                .update_identity_provider(state, idp)
                .await
                .map_err(IdentityProviderError::technical(format!(
                    "An error occurs while trying to update identity provider {id} order"
                )))?;
            if saved.id == target.id {
                saved_target = Some(saved);
            }
        }

        match saved_target {
            Some(saved) => Ok(saved),
            // The target was not part of the ordering before.
            None => self
                .backend_driver
                .update_identity_provider(state, target.clone())
                .await
                .map_err(IdentityProviderError::technical(format!(
                    "An error occurs while trying to update identity provider {} order",
                    target.id
                ))),
        }
    }
}

#[async_trait]
impl IdentityProviderApi for IdentityProviderDirectory {
    /// Create identity provider.
    #[tracing::instrument(level = "debug", skip(self, state, params), fields(name = %params.name), err)]
    async fn create_identity_provider(
        &self,
        state: &ServiceState,
        ctx: &ExecutionContext,
        params: IdentityProviderCreate,
    ) -> Result<IdentityProvider, IdentityProviderError> {
        params.validate()?;
        let id = generate_id(&params.name);
        if id.is_empty() {
            return Err(IdentityProviderError::InvalidName(params.name));
        }
        let failure = format!(
            "An error occurs while trying to create identity provider {}",
            params.name
        );

        if self
            .backend_driver
            .get_identity_provider(state, &id)
            .await
            .map_err(IdentityProviderError::technical(failure.clone()))?
            .is_some()
        {
            return Err(IdentityProviderError::AlreadyExists(id));
        }

        let order = match params.order {
            Some(order) => order,
            None if params.provider_type.has_default_order() => {
                self.backend_driver
                    .get_max_order(state, ctx.environment_id(), ctx.reference_type())
                    .await
                    .map_err(IdentityProviderError::technical(failure.clone()))?
                    .unwrap_or(0)
                    .checked_add(1)
                    .ok_or_else(|| IdentityProviderError::OrderOutOfRange(id.clone()))?
            }
            None => 0,
        };

        let now = Utc::now();
        let idp = IdentityProvider {
            id,
            name: params.name,
            description: params.description,
            provider_type: params.provider_type,
            enabled: params.enabled,
            configuration: params.configuration,
            user_profile_mapping: params.user_profile_mapping,
            email_required: params.email_required.unwrap_or(true),
            order,
            group_mappings: BTreeMap::new(),
            role_mappings: BTreeMap::new(),
            reference_id: ctx.environment_id().to_string(),
            reference_type: ctx.reference_type(),
            created_at: now,
            updated_at: now,
        };

        if idp.provider_type.is_social() {
            Self::check_social_provider(&idp)?;
        }

        let created = self
            .backend_driver
            .create_identity_provider(state, idp)
            .await
            .map_err(IdentityProviderError::technical(failure))?;

        self.audit(
            state,
            AuditEvent::IdentityProviderCreated,
            &created,
            None,
            Some(&created),
        )
        .await?;
        Ok(created)
    }

    /// Delete identity provider.
    #[tracing::instrument(level = "debug", skip(self, state), err)]
    async fn delete_identity_provider<'a>(
        &self,
        state: &ServiceState,
        ctx: &ExecutionContext,
        id: &'a str,
    ) -> Result<(), IdentityProviderError> {
        let failure = format!("An error occurs while trying to delete identity provider {id}");
        let current = self
            .backend_driver
            .get_identity_provider(state, id)
            .await
            .map_err(IdentityProviderError::technical(failure.clone()))?
            .ok_or_else(|| IdentityProviderError::NotFound(id.to_string()))?;

        self.backend_driver
            .delete_identity_provider(state, id)
            .await
            .map_err(IdentityProviderError::technical(failure))?;

        self.audit(
            state,
            AuditEvent::IdentityProviderDeleted,
            &current,
            Some(&current),
            None,
        )
        .await
    }

    /// Get single identity provider by ID.
    #[tracing::instrument(level = "debug", skip(self, state), err)]
    async fn get_identity_provider<'a>(
        &self,
        state: &ServiceState,
        id: &'a str,
    ) -> Result<IdentityProvider, IdentityProviderError> {
        self.backend_driver
            .get_identity_provider(state, id)
            .await
            .map_err(IdentityProviderError::technical(format!(
                "An error occurs while trying to find identity provider {id}"
            )))?
            .ok_or_else(|| IdentityProviderError::NotFound(id.to_string()))
    }

    /// List identity providers of the current reference scope.
    #[tracing::instrument(level = "debug", skip(self, state), err)]
    async fn list_identity_providers(
        &self,
        state: &ServiceState,
        ctx: &ExecutionContext,
    ) -> Result<Vec<IdentityProvider>, IdentityProviderError> {
        Ok(self
            .backend_driver
            .list_identity_providers(state, ctx.environment_id(), ctx.reference_type())
            .await
            .map_err(IdentityProviderError::technical(format!(
                "An error occurs while trying to find all identity providers of {}",
                ctx.environment_id()
            )))?
            .into_iter()
            .unique_by(|idp| idp.id.clone())
            .sorted_by(|a, b| a.order.cmp(&b.order).then_with(|| a.name.cmp(&b.name)))
            .collect())
    }

    /// Update identity provider.
    #[tracing::instrument(level = "debug", skip(self, state, params), err)]
    async fn update_identity_provider<'a>(
        &self,
        state: &ServiceState,
        ctx: &ExecutionContext,
        id: &'a str,
        params: IdentityProviderUpdate,
    ) -> Result<IdentityProvider, IdentityProviderError> {
        let failure = format!("An error occurs while trying to update identity provider {id}");
        let current = self
            .backend_driver
            .get_identity_provider(state, id)
            .await
            .map_err(IdentityProviderError::technical(failure.clone()))?
            .ok_or_else(|| IdentityProviderError::NotFound(id.to_string()))?;

        params.validate()?;
        self.check_role_mappings(state, &params).await?;

        let requested_order = params.order;
        let idp = IdentityProvider {
            id: current.id.clone(),
            name: params.name,
            description: params.description,
            provider_type: current.provider_type,
            enabled: params.enabled,
            configuration: params.configuration,
            user_profile_mapping: params.user_profile_mapping,
            email_required: params.email_required.unwrap_or(true),
            order: current.order,
            group_mappings: params.group_mappings,
            role_mappings: params.role_mappings,
            reference_id: current.reference_id.clone(),
            reference_type: current.reference_type,
            created_at: current.created_at,
            updated_at: Utc::now(),
        };

        let mut updated = self
            .backend_driver
            .update_identity_provider(state, idp)
            .await
            .map_err(IdentityProviderError::technical(failure))?;

        self.audit(
            state,
            AuditEvent::IdentityProviderUpdated,
            &current,
            Some(&current),
            Some(&updated),
        )
        .await?;

        if let Some(order) = requested_order
            && order != current.order
        {
            updated.order = order;
            updated = self.reorder_and_save(state, &updated).await?;
        }
        Ok(updated)
    }
}
