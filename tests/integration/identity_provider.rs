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
use eyre::Report;
use std::sync::Arc;

use apim_management::common::types::ExecutionContext;
use apim_management::config::Config;
use apim_management::identity_provider::IdentityProviderApi;
use apim_management::identity_provider::types::*;
use apim_management::provider::Provider;
use apim_management::service::{Service, ServiceState};

use crate::common::get_isolated_database;

mod create;
mod delete;
mod update;

async fn get_state() -> Result<ServiceState, Report> {
    let db = get_isolated_database().await?;
    let cfg: Config = Config::default();
    let provider = Provider::new(cfg.clone())?;

    Ok(Arc::new(Service::new(cfg, db, provider)))
}

async fn create_idp(
    state: &ServiceState,
    ctx: &ExecutionContext,
    name: &str,
    provider_type: IdentityProviderType,
    order: Option<i32>,
) -> Result<IdentityProvider, Report> {
    let mut builder = IdentityProviderCreateBuilder::default();
    builder
        .name(name)
        .provider_type(provider_type)
        .enabled(true);
    if let Some(order) = order {
        builder.order(order);
    }
    Ok(state
        .provider
        .get_identity_provider_directory()
        .create_identity_provider(state, ctx, builder.build()?)
        .await?)
}

/// `(id, order)` of the identity providers in the listing order.
async fn list_orders(
    state: &ServiceState,
    ctx: &ExecutionContext,
) -> Result<Vec<(String, i32)>, Report> {
    Ok(state
        .provider
        .get_identity_provider_directory()
        .list_identity_providers(state, ctx)
        .await?
        .into_iter()
        .map(|idp| (idp.id, idp.order))
        .collect())
}
