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
//! # Identity provider directory error types
use thiserror::Error;

use crate::audit::error::AuditProviderError;
use crate::identity_provider::backend::error::IdentityProviderDatabaseError;
use crate::role::error::RoleProviderError;

/// Identity provider directory error.
#[derive(Error, Debug)]
pub enum IdentityProviderError {
    /// An identity provider with the derived id already exists.
    #[error("identity provider {0} already exists")]
    AlreadyExists(String),

    /// Audit error.
    #[error(transparent)]
    Audit {
        #[from]
        source: AuditProviderError,
    },

    /// Social identity provider without the client id.
    #[error("client id is required for the identity provider {0}")]
    ClientIdRequired(String),

    /// Social identity provider without the client secret.
    #[error("client secret is required for the identity provider {0}")]
    ClientSecretRequired(String),

    /// The name does not yield an identifier.
    #[error("identity provider name `{0}` does not contain any usable character")]
    InvalidName(String),

    /// Identity provider not found.
    #[error("identity provider {0} not found")]
    NotFound(String),

    /// The display order of the identity provider can not be shifted further.
    #[error("order of the identity provider {0} is out of range")]
    OrderOutOfRange(String),

    /// Role lookup error.
    #[error(transparent)]
    Role {
        #[from]
        source: RoleProviderError,
    },

    /// (de)serialize error.
    #[error(transparent)]
    Serde {
        #[from]
        source: serde_json::Error,
    },

    /// Storage failure.
    #[error("{message}")]
    Technical {
        message: String,
        #[source]
        source: IdentityProviderDatabaseError,
    },

    /// Unsupported driver.
    #[error("unsupported driver {0}")]
    UnsupportedDriver(String),

    /// Validation error.
    #[error("request validation error: {}", source)]
    Validation {
        /// The source of the error.
        #[from]
        source: validator::ValidationErrors,
    },
}

impl IdentityProviderError {
    /// Build the mapper converting a storage failure into the technical error
    /// naming the attempted operation.
    pub(crate) fn technical<M: Into<String>>(
        message: M,
    ) -> impl FnOnce(IdentityProviderDatabaseError) -> Self {
        let message = message.into();
        move |source| {
            tracing::error!(error = ?source, "{}", message);
            Self::Technical { message, source }
        }
    }
}
