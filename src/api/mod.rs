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
//! Management API
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;

use crate::service::ServiceState;

pub(crate) mod common;
pub mod error;
pub mod identity_provider;
pub mod types;

/// Path of the identity providers collection of the environment.
pub const IDENTITY_PROVIDERS_PATH: &str = "/environments/{env_id}/configuration/identities";

#[derive(OpenApi)]
#[openapi(
    info(title = "API Management", version = "1.0.0"),
    tags(
        (name="identity_providers", description=identity_provider::DESCRIPTION),
    )
)]
pub struct ApiDoc;

pub fn openapi_router() -> OpenApiRouter<ServiceState> {
    OpenApiRouter::new().nest(IDENTITY_PROVIDERS_PATH, identity_provider::openapi_router())
}
