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
use mockall::mock;

use crate::config::Config;
use crate::role::{RoleApi, RoleProviderError, types::*};
use crate::service::ServiceState;

mock! {
    pub RoleProvider {
        pub fn new(cfg: &Config) -> Result<Self, RoleProviderError>;
    }

    #[async_trait]
    impl RoleApi for RoleProvider {
        async fn find_role<'a>(
            &self,
            state: &ServiceState,
            scope: RoleScope,
            name: &'a str,
        ) -> Result<Role, RoleProviderError>;
    }

    impl Clone for RoleProvider {
        fn clone(&self) -> Self;
    }
}
