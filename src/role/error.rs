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
//! # Role provider error types
use thiserror::Error;

use crate::role::backend::error::RoleDatabaseError;
use crate::role::types::RoleScope;

/// Role provider error.
#[derive(Error, Debug)]
pub enum RoleProviderError {
    /// Database error.
    #[error(transparent)]
    Database {
        #[from]
        source: RoleDatabaseError,
    },

    /// Role not found.
    #[error("role {name} not found in scope {scope}")]
    RoleNotFound { scope: RoleScope, name: String },

    /// Unsupported driver.
    #[error("unsupported driver {0}")]
    UnsupportedDriver(String),
}
