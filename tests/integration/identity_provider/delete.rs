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
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};

use apim_management::common::types::ExecutionContext;
use apim_management::db::entity::{audit, prelude::Audit};
use apim_management::identity_provider::IdentityProviderApi;
use apim_management::identity_provider::error::IdentityProviderError;
use apim_management::identity_provider::types::*;

use super::{create_idp, get_state, list_orders};

#[tokio::test]
async fn test_delete() -> Result<(), Report> {
    let state = get_state().await?;
    let ctx = ExecutionContext::new("env1");
    create_idp(&state, &ctx, "a", IdentityProviderType::Memory, None).await?;
    create_idp(&state, &ctx, "b", IdentityProviderType::Memory, None).await?;

    state
        .provider
        .get_identity_provider_directory()
        .delete_identity_provider(&state, &ctx, "a")
        .await?;

    // Remaining providers keep their order.
    assert_eq!(vec![("b".to_string(), 2)], list_orders(&state, &ctx).await?);
    match state
        .provider
        .get_identity_provider_directory()
        .get_identity_provider(&state, "a")
        .await
    {
        Err(IdentityProviderError::NotFound(id)) => assert_eq!("a", id),
        other => panic!("NotFound expected, got {other:?}"),
    }

    let records = Audit::find()
        .filter(audit::Column::Event.eq("IDENTITY_PROVIDER_DELETED"))
        .all(&state.db)
        .await?;
    assert_eq!(1, records.len());
    assert_eq!("env1", records[0].reference_id);
    assert!(records[0].old_value.is_some());
    assert!(records[0].new_value.is_none());
    Ok(())
}

#[tokio::test]
async fn test_delete_missing() -> Result<(), Report> {
    let state = get_state().await?;

    match state
        .provider
        .get_identity_provider_directory()
        .delete_identity_provider(&state, &ExecutionContext::default(), "missing")
        .await
    {
        Err(IdentityProviderError::NotFound(id)) => assert_eq!("missing", id),
        other => panic!("NotFound expected, got {other:?}"),
    }
    assert!(Audit::find().all(&state.db).await?.is_empty());
    Ok(())
}
