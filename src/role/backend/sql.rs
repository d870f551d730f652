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

use super::RoleBackend;
use super::error::RoleDatabaseError;
use crate::role::types::*;
use crate::service::ServiceState;

mod role;

#[derive(Default)]
pub struct SqlBackend {}

#[async_trait]
impl RoleBackend for SqlBackend {
    /// Find role by the scope and name.
    #[tracing::instrument(level = "debug", skip(self, state))]
    async fn find_role(
        &self,
        state: &ServiceState,
        scope: RoleScope,
        name: &str,
    ) -> Result<Option<Role>, RoleDatabaseError> {
        role::find(&state.db, scope, name).await
    }
}
