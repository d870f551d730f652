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
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;
use validator::Validate;

use crate::common::types::ReferenceType;

/// Configuration key holding the OAuth client id of social providers.
pub const CLIENT_ID: &str = "clientId";
/// Configuration key holding the OAuth client secret of social providers.
pub const CLIENT_SECRET: &str = "clientSecret";
/// Highest display order accepted from the callers.
pub const MAX_ORDER: i32 = 1_000_000;

/// Kind of the identity provider.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IdentityProviderType {
    Memory,
    Ldap,
    Gravitee,
    Google,
    Github,
    Oidc,
    GraviteeioAm,
}

impl IdentityProviderType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Memory => "MEMORY",
            Self::Ldap => "LDAP",
            Self::Gravitee => "GRAVITEE",
            Self::Google => "GOOGLE",
            Self::Github => "GITHUB",
            Self::Oidc => "OIDC",
            Self::GraviteeioAm => "GRAVITEEIO_AM",
        }
    }

    /// Whether the provider delegates to a third party OAuth exchange and
    /// therefore requires client credentials.
    pub fn is_social(&self) -> bool {
        matches!(self, Self::Google | Self::Github)
    }

    /// Whether the provider is appended to the end of the display order when
    /// created without an explicit order.
    pub fn has_default_order(&self) -> bool {
        matches!(self, Self::Memory | Self::Ldap | Self::Gravitee)
    }
}

impl fmt::Display for IdentityProviderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IdentityProviderType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MEMORY" => Ok(Self::Memory),
            "LDAP" => Ok(Self::Ldap),
            "GRAVITEE" => Ok(Self::Gravitee),
            "GOOGLE" => Ok(Self::Google),
            "GITHUB" => Ok(Self::Github),
            "OIDC" => Ok(Self::Oidc),
            "GRAVITEEIO_AM" => Ok(Self::GraviteeioAm),
            other => Err(other.to_string()),
        }
    }
}

/// Roles granted when a role mapping condition matches.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct RoleMapping {
    /// Portal role name.
    pub portal: Option<String>,
    /// Management role name.
    pub management: Option<String>,
}

/// Identity provider configuration record.
#[derive(Builder, Clone, Debug, Deserialize, PartialEq, Serialize)]
#[builder(setter(strip_option, into))]
pub struct IdentityProvider {
    /// Identifier derived from the name at creation.
    pub id: String,

    pub name: String,

    #[builder(default)]
    pub description: Option<String>,

    #[serde(rename = "type")]
    pub provider_type: IdentityProviderType,

    #[builder(default)]
    pub enabled: bool,

    /// Provider specific configuration.
    #[builder(default)]
    pub configuration: BTreeMap<String, Value>,

    /// Mapping of the user profile attributes.
    #[builder(default)]
    pub user_profile_mapping: BTreeMap<String, String>,

    #[builder(default = "true")]
    pub email_required: bool,

    /// Display order. Values below 1 are not part of the ordering.
    #[builder(default)]
    pub order: i32,

    /// Condition expression to the set of group names.
    #[builder(default)]
    pub group_mappings: BTreeMap<String, BTreeSet<String>>,

    /// Condition expression to the granted roles.
    #[builder(default)]
    pub role_mappings: BTreeMap<String, RoleMapping>,

    pub reference_id: String,

    #[builder(default)]
    pub reference_type: ReferenceType,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

impl IdentityProvider {
    /// Non empty string value of the configuration key.
    pub fn configuration_str<K: AsRef<str>>(&self, key: K) -> Option<&str> {
        match self.configuration.get(key.as_ref()) {
            Some(Value::String(val)) if !val.is_empty() => Some(val),
            _ => None,
        }
    }
}

/// New identity provider.
#[derive(Builder, Clone, Debug, PartialEq, Validate)]
#[builder(setter(strip_option, into))]
pub struct IdentityProviderCreate {
    #[validate(length(min = 1, max = 255))]
    pub name: String,

    #[builder(default)]
    #[validate(length(max = 4096))]
    pub description: Option<String>,

    pub provider_type: IdentityProviderType,

    #[builder(default)]
    pub enabled: bool,

    #[builder(default)]
    pub configuration: BTreeMap<String, Value>,

    #[builder(default)]
    pub user_profile_mapping: BTreeMap<String, String>,

    /// Defaults to `true` when unset.
    #[builder(default)]
    pub email_required: Option<bool>,

    /// Display order. Appended to the end of the ordering for the providers
    /// with a default order when unset.
    #[builder(default)]
    #[validate(range(min = 0, max = MAX_ORDER))]
    pub order: Option<i32>,
}

/// Identity provider update.
///
/// The update replaces the mutable attributes of the identity provider.
#[derive(Builder, Clone, Debug, PartialEq, Validate)]
#[builder(setter(strip_option, into))]
pub struct IdentityProviderUpdate {
    #[validate(length(min = 1, max = 255))]
    pub name: String,

    #[builder(default)]
    #[validate(length(max = 4096))]
    pub description: Option<String>,

    #[builder(default)]
    pub enabled: bool,

    #[builder(default)]
    pub configuration: BTreeMap<String, Value>,

    #[builder(default)]
    pub user_profile_mapping: BTreeMap<String, String>,

    #[builder(default)]
    pub email_required: Option<bool>,

    /// Requested display order. The current order is kept when unset.
    #[builder(default)]
    #[validate(range(min = 0, max = MAX_ORDER))]
    pub order: Option<i32>,

    #[builder(default)]
    pub group_mappings: BTreeMap<String, BTreeSet<String>>,

    #[builder(default)]
    pub role_mappings: BTreeMap<String, RoleMapping>,
}
