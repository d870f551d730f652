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
use eyre::{Result, WrapErr};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbConn, entity::*};
use sea_orm_migration::MigratorTrait;
use uuid::Uuid;

use apim_management::db::entity::{prelude::Role, role};
use apim_management::db_migration::Migrator;

/// Seed the roles referenced by the role mappings.
async fn bootstrap(db: &DbConn) -> Result<()> {
    Role::insert_many([
        role::ActiveModel {
            id: Set("portal-user".into()),
            scope: Set("PORTAL".into()),
            name: Set("USER".into()),
            description: NotSet,
        },
        role::ActiveModel {
            id: Set("management-admin".into()),
            scope: Set("MANAGEMENT".into()),
            name: Set("ADMIN".into()),
            description: Set(Some("Environment administrator".into())),
        },
    ])
    .exec(db)
    .await?;
    Ok(())
}

/// Prepare the isolated Database
///
/// Based on the `DATABASE_URL` environment variable prepare the database for the tests:
///
/// - `postgres` - create a unique schema
/// - other - use whatever passed.
///
/// By default (when `DATABASE_URL` var is unset) use inmemory sqlite.
pub async fn get_isolated_database() -> Result<DatabaseConnection> {
    let db_conn = std::env::var("DATABASE_URL").unwrap_or("sqlite::memory:".to_string());
    let isolated_db_url = if db_conn.starts_with("postgres") {
        let root_db = Database::connect(ConnectOptions::new(&db_conn).sqlx_logging(false).to_owned())
            .await
            .wrap_err_with(|| format!("Failed to connect to database at {db_conn}"))?;
        let schema_name = format!("test_schema_{}", Uuid::new_v4().simple());
        root_db
            .execute_unprepared(&format!("CREATE SCHEMA \"{schema_name}\""))
            .await?;
        let separator = if db_conn.contains('?') { '&' } else { '?' };
        format!("{db_conn}{separator}options=-c%20search_path%3D{schema_name}")
    } else {
        db_conn
    };
    // Each connection to the in-memory sqlite is a separate database.
    let db = Database::connect(
        ConnectOptions::new(&isolated_db_url)
            .sqlx_logging(false)
            .max_connections(1)
            .to_owned(),
    )
    .await
    .wrap_err_with(|| format!("Failed to connect to database at {isolated_db_url}"))?;

    Migrator::up(&db, None).await?;
    bootstrap(&db).await?;

    Ok(db)
}
