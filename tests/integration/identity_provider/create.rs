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
use sea_orm::EntityTrait;

use apim_management::common::types::ExecutionContext;
use apim_management::db::entity::prelude::Audit;
use apim_management::identity_provider::IdentityProviderApi;
use apim_management::identity_provider::error::IdentityProviderError;
use apim_management::identity_provider::types::*;

use super::{create_idp, get_state, list_orders};

#[tokio::test]
async fn test_create_appends_to_ordering() -> Result<(), Report> {
    let state = get_state().await?;
    let ctx = ExecutionContext::new("env1");

    let memory = create_idp(&state, &ctx, "Inline Users", IdentityProviderType::Memory, None).await?;
    assert_eq!("inline-users", memory.id);
    assert_eq!(1, memory.order);
    assert!(memory.email_required);

    create_idp(&state, &ctx, "Corporate LDAP", IdentityProviderType::Ldap, None).await?;
    create_idp(&state, &ctx, "Okta", IdentityProviderType::Oidc, None).await?;

    assert_eq!(
        vec![
            ("okta".to_string(), 0),
            ("inline-users".to_string(), 1),
            ("corporate-ldap".to_string(), 2),
        ],
        list_orders(&state, &ctx).await?
    );
    // Every creation is audited.
    assert_eq!(3, Audit::find().all(&state.db).await?.len());
    Ok(())
}

#[tokio::test]
async fn test_create_ordering_is_per_environment() -> Result<(), Report> {
    let state = get_state().await?;
    let env1 = ExecutionContext::new("env1");
    let env2 = ExecutionContext::new("env2");

    create_idp(&state, &env1, "a", IdentityProviderType::Memory, None).await?;
    create_idp(&state, &env1, "b", IdentityProviderType::Memory, None).await?;
    let other = create_idp(&state, &env2, "c", IdentityProviderType::Gravitee, None).await?;

    assert_eq!(1, other.order);
    assert_eq!("env2", other.reference_id);
    assert_eq!(vec![("c".to_string(), 1)], list_orders(&state, &env2).await?);
    Ok(())
}

#[tokio::test]
async fn test_create_duplicate() -> Result<(), Report> {
    let state = get_state().await?;
    let ctx = ExecutionContext::default();

    create_idp(&state, &ctx, "Corporate LDAP", IdentityProviderType::Ldap, None).await?;
    match create_idp(&state, &ctx, "corporate  ldap", IdentityProviderType::Ldap, None)
        .await
        .map_err(|e| e.downcast::<IdentityProviderError>())
    {
        Err(Ok(IdentityProviderError::AlreadyExists(id))) => {
            assert_eq!("corporate-ldap", id);
        }
        other => panic!("AlreadyExists expected, got {other:?}"),
    }
    Ok(())
}

#[tokio::test]
async fn test_create_social_persists_configuration() -> Result<(), Report> {
    let state = get_state().await?;
    let ctx = ExecutionContext::default();

    let created = state
        .provider
        .get_identity_provider_directory()
        .create_identity_provider(
            &state,
            &ctx,
            IdentityProviderCreateBuilder::default()
                .name("GitHub")
                .provider_type(IdentityProviderType::Github)
                .configuration([
                    (CLIENT_ID.to_string(), serde_json::json!("cid")),
                    (CLIENT_SECRET.to_string(), serde_json::json!("secret")),
                ])
                .email_required(false)
                .build()?,
        )
        .await?;

    let fetched = state
        .provider
        .get_identity_provider_directory()
        .get_identity_provider(&state, "github")
        .await?;
    assert_eq!(created, fetched);
    assert_eq!(Some("cid"), fetched.configuration_str(CLIENT_ID));
    assert!(!fetched.email_required);
    assert_eq!(0, fetched.order);
    Ok(())
}

#[tokio::test]
async fn test_create_order_out_of_range() -> Result<(), Report> {
    let state = get_state().await?;
    let ctx = ExecutionContext::default();

    match create_idp(&state, &ctx, "big", IdentityProviderType::Oidc, Some(i32::MAX))
        .await
        .map_err(|e| e.downcast::<IdentityProviderError>())
    {
        Err(Ok(IdentityProviderError::Validation { .. })) => {}
        other => panic!("Validation expected, got {other:?}"),
    }

    create_idp(&state, &ctx, "top", IdentityProviderType::Oidc, Some(MAX_ORDER)).await?;
    let inline = create_idp(&state, &ctx, "Inline", IdentityProviderType::Memory, None).await?;
    assert_eq!(MAX_ORDER + 1, inline.order);
    Ok(())
}
