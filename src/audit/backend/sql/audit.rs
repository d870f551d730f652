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
use sea_orm::DatabaseConnection;
use sea_orm::entity::*;

use crate::audit::backend::error::{AuditDatabaseError, db_err};
use crate::audit::types::*;
use crate::db::entity::audit as db_audit;

impl TryFrom<db_audit::Model> for AuditRecord {
    type Error = AuditDatabaseError;

    fn try_from(value: db_audit::Model) -> Result<Self, Self::Error> {
        Ok(Self {
            reference_type: value
                .reference_type
                .parse()
                .map_err(|_| AuditDatabaseError::UnsupportedValue(value.reference_type.clone()))?,
            event: value
                .event
                .parse()
                .map_err(AuditDatabaseError::UnsupportedValue)?,
            properties: serde_json::from_value(value.properties)?,
            id: value.id,
            reference_id: value.reference_id,
            old_value: value.old_value,
            new_value: value.new_value,
            created_at: value.created_at,
        })
    }
}

pub async fn create(
    db: &DatabaseConnection,
    record: AuditRecord,
) -> Result<AuditRecord, AuditDatabaseError> {
    let entry = db_audit::ActiveModel {
        id: Set(record.id),
        reference_id: Set(record.reference_id),
        reference_type: Set(record.reference_type.to_string()),
        event: Set(record.event.to_string()),
        properties: Set(serde_json::to_value(&record.properties)?),
        old_value: Set(record.old_value),
        new_value: Set(record.new_value),
        created_at: Set(record.created_at),
    };

    let db_entry: db_audit::Model = entry
        .insert(db)
        .await
        .map_err(|err| db_err(err, "persisting audit record"))?;

    db_entry.try_into()
}
