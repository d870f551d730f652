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

use crate::db::entity::prelude::IdentityProvider as DbIdentityProvider;
use crate::identity_provider::backend::error::{IdentityProviderDatabaseError, db_err};

pub async fn delete<S: AsRef<str>>(
    db: &DatabaseConnection,
    id: S,
) -> Result<(), IdentityProviderDatabaseError> {
    DbIdentityProvider::delete_by_id(id.as_ref())
        .exec(db)
        .await
        .map_err(|err| db_err(err, "deleting identity provider"))?;
    Ok(())
}
