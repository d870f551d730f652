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
//! Identity providers: create
use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
};
use validator::Validate;

use super::types::*;
use crate::api::error::ManagementApiError;
use crate::common::types::ExecutionContext;
use crate::identity_provider::IdentityProviderApi;
use crate::service::ServiceState;

/// Create identity provider.
///
/// Create the identity provider in the environment. The identifier is derived
/// from the name. `MEMORY`, `LDAP` and `GRAVITEE` providers created without an
/// explicit order are appended to the end of the display order. `GOOGLE` and
/// `GITHUB` providers require the `clientId` and `clientSecret`
/// configuration.
#[utoipa::path(
    post,
    path = "/",
    operation_id = "/configuration/identity_provider:create",
    params(
        ("env_id" = String, Path, description = "The ID of the environment")
    ),
    request_body = IdentityProviderCreateRequest,
    responses(
        (status = CREATED, description = "identity provider object", body = IdentityProviderResponse),
        (status = 400, description = "Invalid identity provider", example = json!({"error": {"code": 400, "message": "client id is required for the identity provider Google"}})),
        (status = 409, description = "Identity provider already exists", example = json!({"error": {"code": 409, "message": "identity provider google already exists"}}))
    ),
    tag="identity_providers"
)]
#[tracing::instrument(
    name = "api::identity_provider_create",
    level = "debug",
    skip(state),
    err(Debug)
)]
pub(super) async fn create(
    ctx: ExecutionContext,
    State(state): State<ServiceState>,
    Json(req): Json<IdentityProviderCreateRequest>,
) -> Result<impl IntoResponse, ManagementApiError> {
    req.validate()?;
    let res = state
        .provider
        .get_identity_provider_directory()
        .create_identity_provider(&state, &ctx, req.into())
        .await
        .map_err(ManagementApiError::identity_provider)?;
    Ok((StatusCode::CREATED, res).into_response())
}
