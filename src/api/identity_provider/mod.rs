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
//! # Identity providers API
//!
//! Configuration of the identity providers users of an environment log in
//! with.
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::service::ServiceState;

mod create;
mod delete;
mod list;
mod show;
pub mod types;
mod update;

pub(crate) static DESCRIPTION: &str = r#"Identity providers API.

Identity providers authenticate the users of the environment. The identifier of
the identity provider is derived from its name at the creation.

Identity providers with a positive `order` are displayed in that order. Changing
the order of one provider shifts the providers in between."#;

pub(super) fn openapi_router() -> OpenApiRouter<ServiceState> {
    OpenApiRouter::new()
        .routes(routes!(list::list, create::create))
        .routes(routes!(show::show, update::update, delete::remove))
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use sea_orm::DatabaseConnection;
    use std::sync::Arc;

    use crate::config::Config;
    use crate::identity_provider::{MockIdentityProviderDirectory, types as provider_types};
    use crate::provider::Provider;
    use crate::service::{Service, ServiceState};

    pub(super) fn get_mocked_state(directory_mock: MockIdentityProviderDirectory) -> ServiceState {
        get_mocked_state_with_config(directory_mock, Config::default())
    }

    pub(super) fn get_mocked_state_with_config(
        directory_mock: MockIdentityProviderDirectory,
        config: Config,
    ) -> ServiceState {
        let provider = Provider::mocked_builder()
            .identity_provider(directory_mock)
            .build()
            .unwrap();

        Arc::new(Service::new(
            config,
            DatabaseConnection::Disconnected,
            provider,
        ))
    }

    pub(super) fn get_idp(id: &str, order: i32) -> provider_types::IdentityProvider {
        provider_types::IdentityProviderBuilder::default()
            .id(id)
            .name(id)
            .provider_type(provider_types::IdentityProviderType::Memory)
            .enabled(true)
            .order(order)
            .reference_id("env1")
            .created_at(Utc.with_ymd_and_hms(2026, 3, 1, 10, 0, 0).unwrap())
            .updated_at(Utc.with_ymd_and_hms(2026, 3, 1, 10, 0, 0).unwrap())
            .build()
            .unwrap()
    }
}
