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
//! Identity provider API types.
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::api::types::PaginationLinks;
use crate::identity_provider::types;
use crate::identity_provider::types::MAX_ORDER;
pub use crate::identity_provider::types::IdentityProviderType;

/// Groups granted to the user matching the condition.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize, ToSchema, Validate)]
pub struct GroupMapping {
    /// Condition expression evaluated against the user profile.
    #[validate(length(min = 1))]
    pub condition: String,

    /// Names of the groups.
    #[serde(default)]
    pub groups: Vec<String>,
}

/// Roles granted to the user matching the condition.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize, ToSchema, Validate)]
pub struct RoleMapping {
    /// Condition expression evaluated against the user profile.
    #[validate(length(min = 1))]
    pub condition: String,

    /// Name of the portal role.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub portal: Option<String>,

    /// Name of the management role.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub management: Option<String>,
}

/// Identity provider data
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize, ToSchema)]
pub struct IdentityProvider {
    /// The ID of the identity provider, derived from the name at creation.
    pub id: String,

    /// The name of the identity provider.
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// The kind of the identity provider.
    #[serde(rename = "type")]
    pub provider_type: IdentityProviderType,

    /// Inactive identity providers can not be used for login.
    pub enabled: bool,

    /// Provider specific configuration.
    #[schema(value_type = Object)]
    pub configuration: BTreeMap<String, Value>,

    /// Mapping of the user profile attributes.
    pub user_profile_mapping: BTreeMap<String, String>,

    pub email_required: bool,

    /// Display order. Providers with the order below 1 are not ordered.
    pub order: i32,

    pub group_mappings: Vec<GroupMapping>,

    pub role_mappings: Vec<RoleMapping>,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

/// Identity provider response.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize, ToSchema)]
pub struct IdentityProviderResponse {
    /// Identity provider object.
    pub identity_provider: IdentityProvider,
}

/// New identity provider data.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize, ToSchema, Validate)]
pub struct IdentityProviderCreate {
    /// Identity provider name. The identifier is derived from it.
    #[validate(length(min = 1, max = 255))]
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(nullable = false)]
    #[validate(length(max = 4096))]
    pub description: Option<String>,

    #[serde(rename = "type")]
    pub provider_type: IdentityProviderType,

    #[serde(default)]
    pub enabled: bool,

    #[serde(default)]
    #[schema(value_type = Object)]
    pub configuration: BTreeMap<String, Value>,

    #[serde(default)]
    pub user_profile_mapping: BTreeMap<String, String>,

    /// Defaults to `true`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(nullable = false)]
    pub email_required: Option<bool>,

    /// Display order. `MEMORY`, `LDAP` and `GRAVITEE` providers are appended
    /// to the end of the ordering when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(nullable = false)]
    #[validate(range(min = 0, max = MAX_ORDER))]
    pub order: Option<i32>,
}

/// Identity provider create request.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize, ToSchema, Validate)]
pub struct IdentityProviderCreateRequest {
    #[validate(nested)]
    pub identity_provider: IdentityProviderCreate,
}

/// Identity provider update data.
///
/// The update replaces the mutable attributes of the identity provider.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize, ToSchema, Validate)]
pub struct IdentityProviderUpdate {
    #[validate(length(min = 1, max = 255))]
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(nullable = false)]
    #[validate(length(max = 4096))]
    pub description: Option<String>,

    #[serde(default)]
    pub enabled: bool,

    #[serde(default)]
    #[schema(value_type = Object)]
    pub configuration: BTreeMap<String, Value>,

    #[serde(default)]
    pub user_profile_mapping: BTreeMap<String, String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(nullable = false)]
    pub email_required: Option<bool>,

    /// New display order. The siblings are renumbered when it changes. The
    /// current order is kept when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(nullable = false)]
    #[validate(range(min = 0, max = MAX_ORDER))]
    pub order: Option<i32>,

    #[serde(default)]
    #[validate(nested)]
    pub group_mappings: Vec<GroupMapping>,

    #[serde(default)]
    #[validate(nested)]
    pub role_mappings: Vec<RoleMapping>,
}

/// Identity provider update request.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize, ToSchema, Validate)]
pub struct IdentityProviderUpdateRequest {
    #[validate(nested)]
    pub identity_provider: IdentityProviderUpdate,
}

/// Page of the identity providers.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize, ToSchema)]
pub struct IdentityProviderList {
    /// Collection of identity providers.
    pub identity_providers: Vec<IdentityProvider>,

    /// Navigation links. Absent when everything fits into a single page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<PaginationLinks>,
}

impl IntoResponse for IdentityProviderList {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

/// List parameters.
#[derive(Clone, Debug, Default, Deserialize, Serialize, IntoParams, Validate)]
pub struct IdentityProviderListParameters {
    /// Page number (1 based).
    #[param(nullable = false, minimum = 1)]
    #[validate(range(min = 1))]
    pub page: Option<u64>,

    /// Page size.
    #[param(nullable = false, minimum = 1)]
    #[validate(range(min = 1))]
    pub size: Option<u64>,
}

impl From<types::IdentityProvider> for IdentityProvider {
    fn from(value: types::IdentityProvider) -> Self {
        Self {
            id: value.id,
            name: value.name,
            description: value.description,
            provider_type: value.provider_type,
            enabled: value.enabled,
            configuration: value.configuration,
            user_profile_mapping: value.user_profile_mapping,
            email_required: value.email_required,
            order: value.order,
            group_mappings: value
                .group_mappings
                .into_iter()
                .map(|(condition, groups)| GroupMapping {
                    condition,
                    groups: groups.into_iter().collect(),
                })
                .collect(),
            role_mappings: value
                .role_mappings
                .into_iter()
                .map(|(condition, roles)| RoleMapping {
                    condition,
                    portal: roles.portal,
                    management: roles.management,
                })
                .collect(),
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl IntoResponse for types::IdentityProvider {
    fn into_response(self) -> Response {
        (
            StatusCode::OK,
            Json(IdentityProviderResponse {
                identity_provider: IdentityProvider::from(self),
            }),
        )
            .into_response()
    }
}

impl From<IdentityProviderCreateRequest> for types::IdentityProviderCreate {
    fn from(value: IdentityProviderCreateRequest) -> Self {
        Self {
            name: value.identity_provider.name,
            description: value.identity_provider.description,
            provider_type: value.identity_provider.provider_type,
            enabled: value.identity_provider.enabled,
            configuration: value.identity_provider.configuration,
            user_profile_mapping: value.identity_provider.user_profile_mapping,
            email_required: value.identity_provider.email_required,
            order: value.identity_provider.order,
        }
    }
}

impl From<IdentityProviderUpdateRequest> for types::IdentityProviderUpdate {
    fn from(value: IdentityProviderUpdateRequest) -> Self {
        let idp = value.identity_provider;
        // Repeated conditions accumulate their groups.
        let group_mappings = idp.group_mappings.into_iter().fold(
            BTreeMap::<String, BTreeSet<String>>::new(),
            |mut acc, mapping| {
                acc.entry(mapping.condition)
                    .or_default()
                    .extend(mapping.groups);
                acc
            },
        );
        Self {
            name: idp.name,
            description: idp.description,
            enabled: idp.enabled,
            configuration: idp.configuration,
            user_profile_mapping: idp.user_profile_mapping,
            email_required: idp.email_required,
            order: idp.order,
            group_mappings,
            role_mappings: idp
                .role_mappings
                .into_iter()
                .map(|mapping| {
                    (
                        mapping.condition,
                        types::RoleMapping {
                            portal: mapping.portal,
                            management: mapping.management,
                        },
                    )
                })
                .collect(),
        }
    }
}
