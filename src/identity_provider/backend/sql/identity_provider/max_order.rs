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
use sea_orm::{DatabaseConnection, FromQueryResult};
use sea_orm::entity::*;
use sea_orm::query::*;
use sea_orm::sea_query::{Expr, Func, SimpleExpr};

use crate::common::types::ReferenceType;
use crate::db::entity::{
    identity_provider as db_identity_provider, prelude::IdentityProvider as DbIdentityProvider,
};
use crate::identity_provider::backend::error::{IdentityProviderDatabaseError, db_err};

#[derive(Debug, FromQueryResult)]
struct MaxOrder {
    max_order: Option<i32>,
}

/// Highest order of the identity providers in the reference scope.
///
/// Returns `None` when the scope has no identity providers.
pub async fn max_order<R: AsRef<str>>(
    db: &DatabaseConnection,
    reference_id: R,
    reference_type: ReferenceType,
) -> Result<Option<i32>, IdentityProviderDatabaseError> {
    let res: Option<MaxOrder> = DbIdentityProvider::find()
        .select_only()
        .column_as(
            SimpleExpr::from(Func::max(Expr::col((
                DbIdentityProvider,
                db_identity_provider::Column::Order,
            )))),
            "max_order",
        )
        .filter(db_identity_provider::Column::ReferenceId.eq(reference_id.as_ref()))
        .filter(db_identity_provider::Column::ReferenceType.eq(reference_type.as_str()))
        .into_model::<MaxOrder>()
        .one(db)
        .await
        .map_err(|err| db_err(err, "fetching max identity provider order"))?;

    Ok(res.and_then(|x| x.max_order))
}

#[cfg(test)]
mod tests {
    use sea_orm::{DatabaseBackend, MockDatabase, Value};
    use std::collections::BTreeMap;

    use super::*;

    #[tokio::test]
    async fn test_max_order() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[BTreeMap::from([("max_order", Value::from(Some(3i32)))])]])
            .into_connection();

        assert_eq!(
            Some(3),
            max_order(&db, "DEFAULT", ReferenceType::Environment)
                .await
                .unwrap()
        );

        let log = db.into_transaction_log();
        assert_eq!(1, log.len());
        assert!(log[0].statements()[0].sql.starts_with(
            r#"SELECT MAX("identity_provider"."order") AS "max_order" FROM "identity_provider""#
        ));
    }

    #[tokio::test]
    async fn test_max_order_empty_scope() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[BTreeMap::from([("max_order", Value::Int(None))])]])
            .into_connection();

        assert_eq!(
            None,
            max_order(&db, "DEFAULT", ReferenceType::Environment)
                .await
                .unwrap()
        );
    }
}
