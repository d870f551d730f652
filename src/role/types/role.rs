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
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Scope a role applies to.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoleScope {
    Management,
    Portal,
}

impl RoleScope {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Management => "MANAGEMENT",
            Self::Portal => "PORTAL",
        }
    }
}

impl fmt::Display for RoleScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoleScope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MANAGEMENT" => Ok(Self::Management),
            "PORTAL" => Ok(Self::Portal),
            other => Err(other.to_string()),
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Role {
    /// Role ID.
    pub id: String,
    /// Scope of the role.
    pub scope: RoleScope,
    /// Role name, unique within the scope.
    pub name: String,
    /// Role description.
    pub description: Option<String>,
}
