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
//! Identity providers: update
use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use validator::Validate;

use super::types::*;
use crate::api::error::ManagementApiError;
use crate::common::types::ExecutionContext;
use crate::identity_provider::IdentityProviderApi;
use crate::service::ServiceState;

/// Update identity provider.
///
/// Replace the mutable attributes of the identity provider. The identifier,
/// type and creation time never change. Moving the provider to another
/// `order` shifts the providers in between; an omitted `order` keeps the
/// current one. The roles referenced by the role mappings must exist.
#[utoipa::path(
    put,
    path = "/{id}",
    operation_id = "/configuration/identity_provider:update",
    params(
        ("env_id" = String, Path, description = "The ID of the environment"),
        ("id" = String, Path, description = "The ID of the identity provider")
    ),
    request_body = IdentityProviderUpdateRequest,
    responses(
        (status = OK, description = "identity provider object", body = IdentityProviderResponse),
        (status = 400, description = "Invalid identity provider", example = json!({"error": {"code": 400, "message": "role GHOST not found in scope PORTAL"}})),
        (status = 404, description = "identity provider not found", example = json!({"error": {"code": 404, "message": "could not find identity provider: ldap"}}))
    ),
    tag="identity_providers"
)]
#[tracing::instrument(
    name = "api::identity_provider_update",
    level = "debug",
    skip(state),
    err(Debug)
)]
pub(super) async fn update(
    ctx: ExecutionContext,
    Path((_env_id, id)): Path<(String, String)>,
    State(state): State<ServiceState>,
    Json(req): Json<IdentityProviderUpdateRequest>,
) -> Result<impl IntoResponse, ManagementApiError> {
    req.validate()?;
    state
        .provider
        .get_identity_provider_directory()
        .update_identity_provider(&state, &ctx, &id, req.into())
        .await
        .map_err(ManagementApiError::identity_provider)
}
