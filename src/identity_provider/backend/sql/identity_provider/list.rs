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
use sea_orm::query::*;

use crate::common::types::ReferenceType;
use crate::db::entity::{
    identity_provider as db_identity_provider, prelude::IdentityProvider as DbIdentityProvider,
};
use crate::identity_provider::backend::error::{IdentityProviderDatabaseError, db_err};
use crate::identity_provider::types::*;

/// List identity providers of the reference scope.
pub async fn list<R: AsRef<str>>(
    db: &DatabaseConnection,
    reference_id: R,
    reference_type: ReferenceType,
) -> Result<Vec<IdentityProvider>, IdentityProviderDatabaseError> {
    let db_entities: Vec<db_identity_provider::Model> = DbIdentityProvider::find()
        .filter(db_identity_provider::Column::ReferenceId.eq(reference_id.as_ref()))
        .filter(db_identity_provider::Column::ReferenceType.eq(reference_type.as_str()))
        .order_by_asc(db_identity_provider::Column::Order)
        .all(db)
        .await
        .map_err(|err| db_err(err, "listing identity providers"))?;

    db_entities
        .into_iter()
        .map(TryInto::<IdentityProvider>::try_into)
        .collect()
}
