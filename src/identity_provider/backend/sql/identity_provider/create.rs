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
use sea_orm::DatabaseConnection;
use sea_orm::entity::*;

use super::to_active_model;
use crate::db::entity::identity_provider as db_identity_provider;
use crate::identity_provider::backend::error::{IdentityProviderDatabaseError, db_err};
use crate::identity_provider::types::*;

pub async fn create(
    db: &DatabaseConnection,
    idp: IdentityProvider,
) -> Result<IdentityProvider, IdentityProviderDatabaseError> {
    let db_entry: db_identity_provider::Model = to_active_model(&idp)?
        .insert(db)
        .await
        .map_err(|err| db_err(err, "persisting new identity provider"))?;

    db_entry.try_into()
}
