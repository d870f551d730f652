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
//! Identity providers: delete
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::api::error::ManagementApiError;
use crate::common::types::ExecutionContext;
use crate::identity_provider::IdentityProviderApi;
use crate::service::ServiceState;

/// Delete identity provider.
///
/// Deletes the identity provider. The order of the remaining providers is
/// left untouched.
#[utoipa::path(
    delete,
    path = "/{id}",
    operation_id = "/configuration/identity_provider:delete",
    params(
        ("env_id" = String, Path, description = "The ID of the environment"),
        ("id" = String, Path, description = "The ID of the identity provider")
    ),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "identity provider not found", example = json!({"error": {"code": 404, "message": "could not find identity provider: ldap"}}))
    ),
    tag="identity_providers"
)]
#[tracing::instrument(
    name = "api::identity_provider_delete",
    level = "debug",
    skip(state),
    err(Debug)
)]
pub(super) async fn remove(
    ctx: ExecutionContext,
    Path((_env_id, id)): Path<(String, String)>,
    State(state): State<ServiceState>,
) -> Result<impl IntoResponse, ManagementApiError> {
    state
        .provider
        .get_identity_provider_directory()
        .delete_identity_provider(&state, &ctx, &id)
        .await
        .map_err(ManagementApiError::identity_provider)?;
    Ok((StatusCode::NO_CONTENT).into_response())
}
