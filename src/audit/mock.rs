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

use crate::audit::{AuditApi, AuditProviderError, types::*};
use crate::config::Config;
use crate::service::ServiceState;

mock! {
    pub AuditProvider {
        pub fn new(cfg: &Config) -> Result<Self, AuditProviderError>;
    }

    #[async_trait]
    impl AuditApi for AuditProvider {
        async fn create_audit_record(
            &self,
            state: &ServiceState,
            record: AuditRecordCreate,
        ) -> Result<AuditRecord, AuditProviderError>;
    }

    impl Clone for AuditProvider {
        fn clone(&self) -> Self;
    }
}
