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
//! # Audit provider
//!
//! Records the changes applied to the managed configuration. Every record
//! names the event, the reference scope it happened in and carries the state
//! of the subject before and after the change.
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

pub mod backend;
pub mod error;
#[cfg(test)]
mod mock;
pub mod types;

use crate::config::Config;
use crate::service::ServiceState;
use backend::{AuditBackend, SqlBackend};
use error::AuditProviderError;
use types::*;

#[cfg(test)]
pub use mock::MockAuditProvider;
pub use types::AuditApi;

#[derive(Clone)]
pub struct AuditProvider {
    backend_driver: Arc<dyn AuditBackend>,
}

impl AuditProvider {
    pub fn new(config: &Config) -> Result<Self, AuditProviderError> {
        let backend_driver: Arc<dyn AuditBackend> = match config.audit.driver.as_str() {
            "sql" => Arc::new(SqlBackend::default()),
            other => {
                return Err(AuditProviderError::UnsupportedDriver(other.to_string()));
            }
        };
        Ok(Self { backend_driver })
    }

    #[cfg(test)]
    pub(crate) fn with_backend(backend_driver: Arc<dyn AuditBackend>) -> Self {
        Self { backend_driver }
    }
}

#[async_trait]
impl AuditApi for AuditProvider {
    /// Persist a new audit record.
    #[tracing::instrument(level = "debug", skip(self, state, record), fields(event = %record.event), err)]
    async fn create_audit_record(
        &self,
        state: &ServiceState,
        record: AuditRecordCreate,
    ) -> Result<AuditRecord, AuditProviderError> {
        let record = AuditRecord {
            id: Uuid::new_v4().to_string(),
            reference_id: record.reference_id,
            reference_type: record.reference_type,
            event: record.event,
            properties: record.properties,
            old_value: record.old_value,
            new_value: record.new_value,
            created_at: record.created_at,
        };
        Ok(self.backend_driver.create_audit_record(state, record).await?)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use sea_orm::DatabaseConnection;
    use serde_json::json;
    use std::collections::BTreeMap;

    use super::backend::MockAuditBackend;
    use super::*;
    use crate::common::types::ReferenceType;
    use crate::provider::Provider;
    use crate::service::Service;

    #[tokio::test]
    async fn test_create_audit_record_assigns_id() {
        let state = Arc::new(Service::new(
            Config::default(),
            DatabaseConnection::Disconnected,
            Provider::mocked_builder().build().unwrap(),
        ));
        let mut backend = MockAuditBackend::default();
        backend
            .expect_create_audit_record()
            .withf(|_, record: &AuditRecord| {
                !record.id.is_empty()
                    && record.event == AuditEvent::IdentityProviderDeleted
                    && record.properties.get("IDENTITY_PROVIDER") == Some(&"google".to_string())
            })
            .returning(|_, record| Ok(record));
        let provider = AuditProvider::with_backend(Arc::new(backend));

        let record = provider
            .create_audit_record(
                &state,
                AuditRecordCreateBuilder::default()
                    .reference_id("DEFAULT")
                    .reference_type(ReferenceType::Environment)
                    .event(AuditEvent::IdentityProviderDeleted)
                    .properties(BTreeMap::from([(
                        "IDENTITY_PROVIDER".to_string(),
                        "google".to_string(),
                    )]))
                    .old_value(json!({"id": "google"}))
                    .created_at(Utc::now())
                    .build()
                    .unwrap(),
            )
            .await
            .unwrap();
        assert!(Uuid::parse_str(&record.id).is_ok());
        assert_eq!(None, record.new_value);
    }
}
