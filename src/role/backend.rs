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
use async_trait::async_trait;

use crate::role::types::*;
use crate::service::ServiceState;

pub mod error;
pub mod sql;

use error::RoleDatabaseError;
pub use sql::SqlBackend;

/// Backend driver interface for the role lookup.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RoleBackend: Send + Sync {
    /// Find role by the scope and name.
    async fn find_role(
        &self,
        state: &ServiceState,
        scope: RoleScope,
        name: &str,
    ) -> Result<Option<Role>, RoleDatabaseError>;
}
