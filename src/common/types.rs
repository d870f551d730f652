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
//! # Common types
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Environment used when the request does not carry one.
pub const DEFAULT_ENVIRONMENT: &str = "DEFAULT";

/// Request scoped execution context.
///
/// Carries the environment the request operates on. The environment id is
/// used as the `reference_id` of the records managed within the request.
#[derive(Clone, Debug, PartialEq)]
pub struct ExecutionContext {
    environment_id: String,
}

impl ExecutionContext {
    pub fn new<S: Into<String>>(environment_id: S) -> Self {
        Self {
            environment_id: environment_id.into(),
        }
    }

    /// Current environment id.
    pub fn environment_id(&self) -> &str {
        &self.environment_id
    }

    /// Type of the reference the context is bound to.
    pub fn reference_type(&self) -> ReferenceType {
        ReferenceType::Environment
    }
}

impl Default for ExecutionContext {
    fn default() -> Self {
        Self::new(DEFAULT_ENVIRONMENT)
    }
}

/// Kind of the owner a record belongs to.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReferenceType {
    #[default]
    Environment,
}

impl ReferenceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Environment => "ENVIRONMENT",
        }
    }
}

impl fmt::Display for ReferenceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("unknown reference type {0}")]
pub struct UnknownReferenceType(pub String);

impl FromStr for ReferenceType {
    type Err = UnknownReferenceType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ENVIRONMENT" => Ok(Self::Environment),
            other => Err(UnknownReferenceType(other.to_string())),
        }
    }
}
