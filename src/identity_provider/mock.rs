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

use crate::common::types::ExecutionContext;
use crate::config::Config;
use crate::identity_provider::{IdentityProviderApi, IdentityProviderError, types::*};
use crate::service::ServiceState;

mock! {
    pub IdentityProviderDirectory {
        pub fn new(cfg: &Config) -> Result<Self, IdentityProviderError>;
    }

    #[async_trait]
    impl IdentityProviderApi for IdentityProviderDirectory {
        async fn create_identity_provider(
            &self,
            state: &ServiceState,
            ctx: &ExecutionContext,
            params: IdentityProviderCreate,
        ) -> Result<IdentityProvider, IdentityProviderError>;

        async fn delete_identity_provider<'a>(
            &self,
            state: &ServiceState,
            ctx: &ExecutionContext,
            id: &'a str,
        ) -> Result<(), IdentityProviderError>;

        async fn get_identity_provider<'a>(
            &self,
            state: &ServiceState,
            id: &'a str,
        ) -> Result<IdentityProvider, IdentityProviderError>;

        async fn list_identity_providers(
            &self,
            state: &ServiceState,
            ctx: &ExecutionContext,
        ) -> Result<Vec<IdentityProvider>, IdentityProviderError>;

        async fn update_identity_provider<'a>(
            &self,
            state: &ServiceState,
            ctx: &ExecutionContext,
            id: &'a str,
            params: IdentityProviderUpdate,
        ) -> Result<IdentityProvider, IdentityProviderError>;
    }

    impl Clone for IdentityProviderDirectory {
        fn clone(&self) -> Self;
    }
}
