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

/// Replace every stored attribute of the identity provider.
pub async fn update(
    db: &DatabaseConnection,
    idp: IdentityProvider,
) -> Result<IdentityProvider, IdentityProviderDatabaseError> {
    let mut entry = to_active_model(&idp)?;
    // primary key is the lookup criteria and is never rewritten
    entry.id = Unchanged(idp.id.clone());

    let db_entry: db_identity_provider::Model = entry
        .update(db)
        .await
        .map_err(|err| db_err(err, "updating identity provider"))?;

    db_entry.try_into()
}
