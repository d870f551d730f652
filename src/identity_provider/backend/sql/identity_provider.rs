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
use sea_orm::entity::*;

use crate::db::entity::identity_provider as db_identity_provider;
use crate::identity_provider::backend::error::IdentityProviderDatabaseError;
use crate::identity_provider::types::*;

mod create;
mod delete;
mod get;
mod list;
mod max_order;
mod update;

pub use create::create;
pub use delete::delete;
pub use get::get;
pub use list::list;
pub use max_order::max_order;
pub use update::update;

impl TryFrom<db_identity_provider::Model> for IdentityProvider {
    type Error = IdentityProviderDatabaseError;

    fn try_from(value: db_identity_provider::Model) -> Result<Self, Self::Error> {
        let mut builder = IdentityProviderBuilder::default();
        builder.id(value.id.clone());
        builder.name(value.name.clone());
        builder.provider_type(
            value
                .r#type
                .parse::<IdentityProviderType>()
                .map_err(IdentityProviderDatabaseError::UnsupportedValue)?,
        );
        builder.enabled(value.enabled);
        if let Some(val) = &value.description {
            builder.description(val);
        }
        if let Some(val) = value.configuration {
            builder.configuration(serde_json::from_value::<
                std::collections::BTreeMap<String, serde_json::Value>,
            >(val)?);
        }
        if let Some(val) = value.user_profile_mapping {
            builder.user_profile_mapping(serde_json::from_value::<
                std::collections::BTreeMap<String, String>,
            >(val)?);
        }
        builder.email_required(value.email_required.unwrap_or(true));
        builder.order(value.order);
        if let Some(val) = value.group_mappings {
            builder.group_mappings(serde_json::from_value::<
                std::collections::BTreeMap<String, std::collections::BTreeSet<String>>,
            >(val)?);
        }
        if let Some(val) = value.role_mappings {
            builder.role_mappings(serde_json::from_value::<
                std::collections::BTreeMap<String, RoleMapping>,
            >(val)?);
        }
        builder.reference_id(value.reference_id.clone());
        builder.reference_type(
            value
                .reference_type
                .parse::<crate::common::types::ReferenceType>()
                .map_err(|err| IdentityProviderDatabaseError::UnsupportedValue(err.0))?,
        );
        builder.created_at(value.created_at);
        builder.updated_at(value.updated_at);
        builder
            .build()
            .map_err(|err| IdentityProviderDatabaseError::UnsupportedValue(err.to_string()))
    }
}

/// Build the active model storing every attribute of the identity provider.
fn to_active_model(
    idp: &IdentityProvider,
) -> Result<db_identity_provider::ActiveModel, IdentityProviderDatabaseError> {
    Ok(db_identity_provider::ActiveModel {
        id: Set(idp.id.clone()),
        name: Set(idp.name.clone()),
        description: Set(idp.description.clone()),
        r#type: Set(idp.provider_type.to_string()),
        enabled: Set(idp.enabled),
        configuration: Set(Some(serde_json::to_value(&idp.configuration)?)),
        user_profile_mapping: Set(Some(serde_json::to_value(&idp.user_profile_mapping)?)),
        email_required: Set(Some(idp.email_required)),
        order: Set(idp.order),
        group_mappings: Set(Some(serde_json::to_value(&idp.group_mappings)?)),
        role_mappings: Set(Some(serde_json::to_value(&idp.role_mappings)?)),
        reference_id: Set(idp.reference_id.clone()),
        reference_type: Set(idp.reference_type.to_string()),
        created_at: Set(idp.created_at),
        updated_at: Set(idp.updated_at),
    })
}
