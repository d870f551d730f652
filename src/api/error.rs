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
//! # Management API error.
use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::identity_provider::error::IdentityProviderError;
use crate::role::error::RoleProviderError;

/// Management API operation errors
#[derive(Debug, Error)]
pub enum ManagementApiError {
    #[error("{0}")]
    Conflict(String),

    #[error("could not find {resource}: {identifier}")]
    NotFound {
        resource: String,
        identifier: String,
    },

    #[error("{0}")]
    BadRequest(String),

    #[error(transparent)]
    IdentityProvider { source: IdentityProviderError },

    #[error(transparent)]
    Serde {
        #[from]
        source: serde_json::Error,
    },

    #[error(transparent)]
    QueryEncode {
        #[from]
        source: serde_urlencoded::ser::Error,
    },

    #[error(transparent)]
    JsonExtractorRejection(#[from] JsonRejection),

    #[error(transparent)]
    PathExtractorRejection(#[from] PathRejection),

    /// Request validation error.
    #[error("request validation failed: {source}")]
    Validator {
        /// The source of the error.
        #[from]
        source: validator::ValidationErrors,
    },
}

impl IntoResponse for ManagementApiError {
    fn into_response(self) -> Response {
        error!("Error happened during request processing: {:#?}", self);

        let status_code = match self {
            ManagementApiError::Conflict(_) => StatusCode::CONFLICT,
            ManagementApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ManagementApiError::BadRequest(..)
            | ManagementApiError::JsonExtractorRejection(..)
            | ManagementApiError::PathExtractorRejection(..)
            | ManagementApiError::Validator { .. } => StatusCode::BAD_REQUEST,
            ManagementApiError::IdentityProvider { .. }
            | ManagementApiError::Serde { .. }
            | ManagementApiError::QueryEncode { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (
            status_code,
            Json(json!({"error": {"code": status_code.as_u16(), "message": self.to_string()}})),
        )
            .into_response()
    }
}

impl ManagementApiError {
    /// Translate the identity provider directory error into the API error.
    pub fn identity_provider(source: IdentityProviderError) -> Self {
        match source {
            IdentityProviderError::NotFound(x) => Self::NotFound {
                resource: "identity provider".into(),
                identifier: x,
            },
            IdentityProviderError::AlreadyExists(_) => Self::Conflict(source.to_string()),
            IdentityProviderError::ClientIdRequired(_)
            | IdentityProviderError::ClientSecretRequired(_)
            | IdentityProviderError::InvalidName(_)
            | IdentityProviderError::OrderOutOfRange(_) => Self::BadRequest(source.to_string()),
            IdentityProviderError::Role {
                source: RoleProviderError::RoleNotFound { .. },
            } => Self::BadRequest(source.to_string()),
            IdentityProviderError::Validation { source } => Self::Validator { source },
            _ => Self::IdentityProvider { source },
        }
    }
}

impl From<IdentityProviderError> for ManagementApiError {
    fn from(value: IdentityProviderError) -> Self {
        Self::identity_provider(value)
    }
}
