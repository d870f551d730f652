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
//! Identity providers: list
use axum::{
    extract::{OriginalUri, Query, State},
    response::IntoResponse,
};
use validator::Validate;

use super::types::*;
use crate::api::common::{build_pagination_links, paginate};
use crate::api::error::ManagementApiError;
use crate::common::types::ExecutionContext;
use crate::identity_provider::IdentityProviderApi;
use crate::service::ServiceState;

/// List identity providers.
///
/// List the identity providers of the environment ordered by the display
/// order and name. The collection is paginated; navigation links are returned
/// when the collection spans over multiple pages.
#[utoipa::path(
    get,
    path = "/",
    operation_id = "/configuration/identity_provider:list",
    params(
        ("env_id" = String, Path, description = "The ID of the environment"),
        IdentityProviderListParameters
    ),
    responses(
        (status = OK, description = "Page of identity providers", body = IdentityProviderList),
        (status = 400, description = "Invalid pagination", example = json!({"error": {"code": 400, "message": "page size must not exceed 100"}})),
        (status = 500, description = "Internal error", example = json!({"error": {"code": 500, "message": "internal server error"}}))
    ),
    tag="identity_providers"
)]
#[tracing::instrument(
    name = "api::identity_provider_list",
    level = "debug",
    skip(state),
    err(Debug)
)]
pub(super) async fn list(
    ctx: ExecutionContext,
    OriginalUri(uri): OriginalUri,
    Query(query): Query<IdentityProviderListParameters>,
    State(state): State<ServiceState>,
) -> Result<impl IntoResponse, ManagementApiError> {
    query.validate()?;
    let page = query.page.unwrap_or(1);
    let size = query.size.unwrap_or(state.config.api.default_page_size);
    if size > state.config.api.max_page_size {
        return Err(ManagementApiError::BadRequest(format!(
            "page size must not exceed {}",
            state.config.api.max_page_size
        )));
    }

    let identity_providers = state
        .provider
        .get_identity_provider_directory()
        .list_identity_providers(&state, &ctx)
        .await
        .map_err(ManagementApiError::identity_provider)?;

    let links = build_pagination_links(
        uri.path(),
        uri.query(),
        page,
        size,
        identity_providers.len() as u64,
    )?;
    Ok(IdentityProviderList {
        identity_providers: paginate(identity_providers, page, size)
            .into_iter()
            .map(Into::into)
            .collect(),
        links,
    })
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use http_body_util::BodyExt; // for `collect`

    use tower::ServiceExt; // for `call`, `oneshot`, and `ready`
    use tower_http::trace::TraceLayer;
    use tracing_test::traced_test;

    use super::super::tests::{get_idp, get_mocked_state, get_mocked_state_with_config};
    use super::*;
    use crate::api::openapi_router;
    use crate::config::Config;
    use crate::identity_provider::MockIdentityProviderDirectory;

    fn directory_with(count: i32) -> MockIdentityProviderDirectory {
        let mut directory_mock = MockIdentityProviderDirectory::default();
        directory_mock
            .expect_list_identity_providers()
            .withf(|_, ctx: &ExecutionContext| ctx.environment_id() == "env1")
            .returning(move |_, _| {
                Ok((1..=count)
                    .map(|order| get_idp(&format!("idp{order:02}"), order))
                    .collect())
            });
        directory_mock
    }

    async fn get(state: &ServiceState, uri: &str) -> (StatusCode, Vec<u8>) {
        let mut api = openapi_router()
            .layer(TraceLayer::new_for_http())
            .with_state(state.clone());

        let response = api
            .as_service()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, body.to_vec())
    }

    #[tokio::test]
    #[traced_test]
    async fn test_list_single_page() {
        let state = get_mocked_state(directory_with(3));
        let (status, body) = get(&state, "/environments/env1/configuration/identities").await;
        assert_eq!(status, StatusCode::OK);
        let res: IdentityProviderList = serde_json::from_slice(&body).unwrap();
        assert_eq!(
            vec!["idp01", "idp02", "idp03"],
            res.identity_providers
                .iter()
                .map(|x| x.id.as_str())
                .collect::<Vec<_>>()
        );
        assert!(res.links.is_none());
    }

    #[tokio::test]
    #[traced_test]
    async fn test_list_paginated() {
        let state = get_mocked_state(directory_with(25));
        let (status, body) = get(
            &state,
            "/environments/env1/configuration/identities?page=2&size=10",
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let res: IdentityProviderList = serde_json::from_slice(&body).unwrap();
        assert_eq!(10, res.identity_providers.len());
        assert_eq!("idp11", res.identity_providers[0].id);
        let links = res.links.unwrap();
        let path = "/environments/env1/configuration/identities";
        assert_eq!(format!("{path}?page=2&size=10"), links.self_link);
        assert_eq!(format!("{path}?page=1&size=10"), links.first);
        assert_eq!(Some(format!("{path}?page=1&size=10")), links.prev);
        assert_eq!(Some(format!("{path}?page=3&size=10")), links.next);
        assert_eq!(format!("{path}?page=3&size=10"), links.last);

        let (status, body) = get(
            &state,
            "/environments/env1/configuration/identities?page=3&size=10",
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let res: IdentityProviderList = serde_json::from_slice(&body).unwrap();
        assert_eq!(5, res.identity_providers.len());
        assert!(res.links.unwrap().next.is_none());
    }

    #[tokio::test]
    #[traced_test]
    async fn test_list_default_page_size() {
        let mut config = Config::default();
        config.api.default_page_size = 20;
        let state = get_mocked_state_with_config(directory_with(25), config);
        let (status, body) = get(&state, "/environments/env1/configuration/identities").await;
        assert_eq!(status, StatusCode::OK);
        let res: IdentityProviderList = serde_json::from_slice(&body).unwrap();
        assert_eq!(20, res.identity_providers.len());
        let links = res.links.unwrap();
        assert_eq!("/environments/env1/configuration/identities", links.self_link);
        assert_eq!(
            "/environments/env1/configuration/identities?page=2",
            links.last
        );
    }

    #[tokio::test]
    #[traced_test]
    async fn test_list_page_out_of_range() {
        let state = get_mocked_state(directory_with(5));
        let (status, body) = get(
            &state,
            "/environments/env1/configuration/identities?page=4",
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let res: IdentityProviderList = serde_json::from_slice(&body).unwrap();
        assert!(res.identity_providers.is_empty());
        assert!(res.links.is_none());
    }

    #[tokio::test]
    #[traced_test]
    async fn test_list_invalid_pagination() {
        let state = get_mocked_state(MockIdentityProviderDirectory::default());
        for uri in [
            "/environments/env1/configuration/identities?page=0",
            "/environments/env1/configuration/identities?size=0",
            "/environments/env1/configuration/identities?size=101",
            "/environments/env1/configuration/identities?page=abc",
        ] {
            let (status, _) = get(&state, uri).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        }
    }
}
