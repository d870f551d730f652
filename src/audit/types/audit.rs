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
use chrono::{DateTime, Utc};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::common::types::ReferenceType;

/// Audited event.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuditEvent {
    IdentityProviderCreated,
    IdentityProviderUpdated,
    IdentityProviderDeleted,
}

impl AuditEvent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::IdentityProviderCreated => "IDENTITY_PROVIDER_CREATED",
            Self::IdentityProviderUpdated => "IDENTITY_PROVIDER_UPDATED",
            Self::IdentityProviderDeleted => "IDENTITY_PROVIDER_DELETED",
        }
    }
}

impl fmt::Display for AuditEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AuditEvent {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "IDENTITY_PROVIDER_CREATED" => Ok(Self::IdentityProviderCreated),
            "IDENTITY_PROVIDER_UPDATED" => Ok(Self::IdentityProviderUpdated),
            "IDENTITY_PROVIDER_DELETED" => Ok(Self::IdentityProviderDeleted),
            other => Err(other.to_string()),
        }
    }
}

/// Persisted audit record.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct AuditRecord {
    /// Record ID.
    pub id: String,
    /// ID of the scope owner the event happened in.
    pub reference_id: String,
    /// Type of the scope owner.
    pub reference_type: ReferenceType,
    /// Event.
    pub event: AuditEvent,
    /// Event properties (i.e. the subject of the change).
    pub properties: BTreeMap<String, String>,
    /// State of the subject before the change.
    pub old_value: Option<Value>,
    /// State of the subject after the change.
    pub new_value: Option<Value>,
    /// Event timestamp.
    pub created_at: DateTime<Utc>,
}

/// New audit record.
#[derive(Builder, Clone, Debug, PartialEq)]
#[builder(setter(strip_option, into))]
pub struct AuditRecordCreate {
    pub reference_id: String,
    pub reference_type: ReferenceType,
    pub event: AuditEvent,
    #[builder(default)]
    pub properties: BTreeMap<String, String>,
    #[builder(default)]
    pub old_value: Option<Value>,
    #[builder(default)]
    pub new_value: Option<Value>,
    pub created_at: DateTime<Utc>,
}
