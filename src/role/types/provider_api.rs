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

use super::role::*;
use crate::role::RoleProviderError;
use crate::service::ServiceState;

/// Role lookup interface.
#[async_trait]
pub trait RoleApi: Send + Sync {
    /// Find the role with the given name in the scope.
    ///
    /// Fails with [`RoleProviderError::RoleNotFound`] when the role does not
    /// exist.
    async fn find_role<'a>(
        &self,
        state: &ServiceState,
        scope: RoleScope,
        name: &'a str,
    ) -> Result<Role, RoleProviderError>;
}
