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
//! # Error
//!
//! Errors that can occur while bootstrapping and running the service (not the API).
use thiserror::Error;

use crate::audit::error::AuditProviderError;
use crate::identity_provider::error::IdentityProviderError;
use crate::role::error::RoleProviderError;

/// Management service error.
#[derive(Debug, Error)]
pub enum ManagementError {
    #[error(transparent)]
    Audit {
        #[from]
        source: AuditProviderError,
    },

    #[error(transparent)]
    IdentityProvider {
        #[from]
        source: IdentityProviderError,
    },

    #[error(transparent)]
    IO {
        #[from]
        source: std::io::Error,
    },

    /// Json serialization error.
    #[error("json serde error: {}", source)]
    JsonError {
        /// The source of the error.
        #[from]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Role {
        #[from]
        source: RoleProviderError,
    },
}
