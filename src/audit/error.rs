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
//! # Audit provider error types
use thiserror::Error;

use crate::audit::backend::error::AuditDatabaseError;
use crate::audit::types::AuditRecordCreateBuilderError;

/// Audit provider error.
#[derive(Error, Debug)]
pub enum AuditProviderError {
    /// Database error.
    #[error(transparent)]
    Database {
        #[from]
        source: AuditDatabaseError,
    },

    /// Structures builder error.
    #[error(transparent)]
    RecordBuilder {
        #[from]
        source: AuditRecordCreateBuilderError,
    },

    /// (de)serialize error.
    #[error(transparent)]
    Serde {
        #[from]
        source: serde_json::Error,
    },

    /// Unsupported driver.
    #[error("unsupported driver {0}")]
    UnsupportedDriver(String),
}
