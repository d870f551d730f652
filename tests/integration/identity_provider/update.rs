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
use std::collections::{BTreeMap, BTreeSet};

use apim_management::common::types::ExecutionContext;
use apim_management::identity_provider::IdentityProviderApi;
use apim_management::identity_provider::error::IdentityProviderError;
use apim_management::identity_provider::types::*;
use apim_management::role::error::RoleProviderError;
use apim_management::role::types::RoleScope;

use super::{create_idp, get_state, list_orders};

fn ids(orders: &[(&str, i32)]) -> Vec<(String, i32)> {
    orders.iter().map(|(id, order)| (id.to_string(), *order)).collect()
}

#[tokio::test]
async fn test_update_moves_up() -> Result<(), Report> {
    let state = get_state().await?;
    let ctx = ExecutionContext::new("env1");
    for name in ["a", "b", "c"] {
        create_idp(&state, &ctx, name, IdentityProviderType::Memory, None).await?;
    }

    let updated = state
        .provider
        .get_identity_provider_directory()
        .update_identity_provider(
            &state,
            &ctx,
            "c",
            IdentityProviderUpdateBuilder::default()
                .name("c")
                .enabled(true)
                .order(1)
                .build()?,
        )
        .await?;

    assert_eq!(1, updated.order);
    assert_eq!(
        ids(&[("c", 1), ("a", 2), ("b", 3)]),
        list_orders(&state, &ctx).await?
    );
    Ok(())
}

#[tokio::test]
async fn test_update_moves_down() -> Result<(), Report> {
    let state = get_state().await?;
    let ctx = ExecutionContext::new("env1");
    for name in ["a", "b", "c"] {
        create_idp(&state, &ctx, name, IdentityProviderType::Ldap, None).await?;
    }

    state
        .provider
        .get_identity_provider_directory()
        .update_identity_provider(
            &state,
            &ctx,
            "a",
            IdentityProviderUpdateBuilder::default()
                .name("a")
                .order(3)
                .build()?,
        )
        .await?;

    assert_eq!(
        ids(&[("b", 1), ("c", 2), ("a", 3)]),
        list_orders(&state, &ctx).await?
    );
    Ok(())
}

#[tokio::test]
async fn test_update_mappings() -> Result<(), Report> {
    let state = get_state().await?;
    let ctx = ExecutionContext::default();
    let created = create_idp(&state, &ctx, "Okta", IdentityProviderType::Oidc, None).await?;

    let updated = state
        .provider
        .get_identity_provider_directory()
        .update_identity_provider(
            &state,
            &ctx,
            "okta",
            IdentityProviderUpdateBuilder::default()
                .name("Okta SSO")
                .description("Corporate SSO")
                .group_mappings(BTreeMap::from([(
                    "{#jsonPath(#profile, '$.dept') == 'dev'}".to_string(),
                    BTreeSet::from(["developers".to_string()]),
                )]))
                .role_mappings(BTreeMap::from([(
                    "{#profile.admin}".to_string(),
                    RoleMapping {
                        portal: Some("USER".into()),
                        management: Some("ADMIN".into()),
                    },
                )]))
                .build()?,
        )
        .await?;

    // The id, type and owner never change.
    assert_eq!("okta", updated.id);
    assert_eq!(IdentityProviderType::Oidc, updated.provider_type);
    assert_eq!(created.created_at, updated.created_at);
    assert_eq!("Okta SSO", updated.name);

    let fetched = state
        .provider
        .get_identity_provider_directory()
        .get_identity_provider(&state, "okta")
        .await?;
    assert_eq!(updated.group_mappings, fetched.group_mappings);
    assert_eq!(updated.role_mappings, fetched.role_mappings);
    Ok(())
}

#[tokio::test]
async fn test_update_unknown_role() -> Result<(), Report> {
    let state = get_state().await?;
    let ctx = ExecutionContext::default();
    create_idp(&state, &ctx, "Okta", IdentityProviderType::Oidc, None).await?;

    let res = state
        .provider
        .get_identity_provider_directory()
        .update_identity_provider(
            &state,
            &ctx,
            "okta",
            IdentityProviderUpdateBuilder::default()
                .name("Okta")
                .role_mappings(BTreeMap::from([(
                    "true".to_string(),
                    RoleMapping {
                        portal: None,
                        management: Some("USER".into()),
                    },
                )]))
                .build()?,
        )
        .await;
    match res {
        Err(IdentityProviderError::Role {
            source: RoleProviderError::RoleNotFound { scope, name },
        }) => {
            assert_eq!(RoleScope::Management, scope);
            assert_eq!("USER", name);
        }
        other => panic!("RoleNotFound expected, got {other:?}"),
    }
    // Nothing was saved.
    let fetched = state
        .provider
        .get_identity_provider_directory()
        .get_identity_provider(&state, "okta")
        .await?;
    assert!(fetched.role_mappings.is_empty());
    Ok(())
}
