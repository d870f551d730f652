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
use crate::identity_provider::types::*;

pub async fn get<I: AsRef<str>>(
    db: &DatabaseConnection,
    id: I,
) -> Result<Option<IdentityProvider>, IdentityProviderDatabaseError> {
    DbIdentityProvider::find_by_id(id.as_ref())
        .one(db)
        .await
        .map_err(|err| db_err(err, "fetching identity provider by id"))?
        .map(TryInto::try_into)
        .transpose()
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, MockDatabase, Transaction};

    use super::super::tests::get_idp_mock;
    use super::*;
    use crate::db::entity::identity_provider as db_identity_provider;

    #[tokio::test]
    async fn test_get() {
        let ts = Utc::now();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([
                vec![get_idp_mock("ldap", 2, ts)],
                Vec::<db_identity_provider::Model>::new(),
            ])
            .into_connection();

        let idp = get(&db, "ldap").await.unwrap().unwrap();
        assert_eq!("ldap", idp.id);
        assert_eq!(2, idp.order);
        assert_eq!(IdentityProviderType::Memory, idp.provider_type);
        assert!(get(&db, "missing").await.unwrap().is_none());

        assert_eq!(
            db.into_transaction_log(),
            [
                Transaction::from_sql_and_values(
                    DatabaseBackend::Postgres,
                    r#"SELECT "identity_provider"."id", "identity_provider"."name", "identity_provider"."description", "identity_provider"."type", "identity_provider"."enabled", "identity_provider"."configuration", "identity_provider"."user_profile_mapping", "identity_provider"."email_required", "identity_provider"."order", "identity_provider"."group_mappings", "identity_provider"."role_mappings", "identity_provider"."reference_id", "identity_provider"."reference_type", "identity_provider"."created_at", "identity_provider"."updated_at" FROM "identity_provider" WHERE "identity_provider"."id" = $1 LIMIT $2"#,
                    ["ldap".into(), 1u64.into()]
                ),
                Transaction::from_sql_and_values(
                    DatabaseBackend::Postgres,
                    r#"SELECT "identity_provider"."id", "identity_provider"."name", "identity_provider"."description", "identity_provider"."type", "identity_provider"."enabled", "identity_provider"."configuration", "identity_provider"."user_profile_mapping", "identity_provider"."email_required", "identity_provider"."order", "identity_provider"."group_mappings", "identity_provider"."role_mappings", "identity_provider"."reference_id", "identity_provider"."reference_type", "identity_provider"."created_at", "identity_provider"."updated_at" FROM "identity_provider" WHERE "identity_provider"."id" = $1 LIMIT $2"#,
                    ["missing".into(), 1u64.into()]
                ),
            ]
        );
    }
}
