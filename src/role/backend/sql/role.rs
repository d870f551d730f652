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

use crate::db::entity::{prelude::Role as DbRole, role as db_role};
use crate::role::backend::error::{RoleDatabaseError, db_err};
use crate::role::types::*;

impl TryFrom<db_role::Model> for Role {
    type Error = RoleDatabaseError;

    fn try_from(value: db_role::Model) -> Result<Self, Self::Error> {
        Ok(Self {
            scope: value
                .scope
                .parse()
                .map_err(RoleDatabaseError::UnsupportedScope)?,
            id: value.id,
            name: value.name,
            description: value.description,
        })
    }
}

pub async fn find<N: AsRef<str>>(
    db: &DatabaseConnection,
    scope: RoleScope,
    name: N,
) -> Result<Option<Role>, RoleDatabaseError> {
    let entry: Option<db_role::Model> = DbRole::find()
        .filter(db_role::Column::Scope.eq(scope.as_str()))
        .filter(db_role::Column::Name.eq(name.as_ref()))
        .one(db)
        .await
        .map_err(|err| db_err(err, "fetching role by scope and name"))?;
    entry.map(TryInto::try_into).transpose()
}
