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
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(IdentityProvider::Table)
                    .if_not_exists()
                    .col(string_len(IdentityProvider::Id, 64).primary_key())
                    .col(string_len(IdentityProvider::Name, 255))
                    .col(text_null(IdentityProvider::Description))
                    .col(string_len(IdentityProvider::Type, 64))
                    .col(boolean(IdentityProvider::Enabled))
                    .col(json_null(IdentityProvider::Configuration))
                    .col(json_null(IdentityProvider::UserProfileMapping))
                    .col(boolean_null(IdentityProvider::EmailRequired))
                    .col(integer(IdentityProvider::Order).default(0))
                    .col(json_null(IdentityProvider::GroupMappings))
                    .col(json_null(IdentityProvider::RoleMappings))
                    .col(string_len(IdentityProvider::ReferenceId, 64))
                    .col(string_len(IdentityProvider::ReferenceType, 64))
                    .col(timestamp_with_time_zone(IdentityProvider::CreatedAt))
                    .col(timestamp_with_time_zone(IdentityProvider::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("ix-identity_provider-reference")
                    .table(IdentityProvider::Table)
                    .col(IdentityProvider::ReferenceId)
                    .col(IdentityProvider::ReferenceType)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Audit::Table)
                    .if_not_exists()
                    .col(string_len(Audit::Id, 64).primary_key())
                    .col(string_len(Audit::ReferenceId, 64))
                    .col(string_len(Audit::ReferenceType, 64))
                    .col(string_len(Audit::Event, 64))
                    .col(json(Audit::Properties))
                    .col(json_null(Audit::OldValue))
                    .col(json_null(Audit::NewValue))
                    .col(timestamp_with_time_zone(Audit::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("ix-audit-reference")
                    .table(Audit::Table)
                    .col(Audit::ReferenceId)
                    .col(Audit::ReferenceType)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Role::Table)
                    .if_not_exists()
                    .col(string_len(Role::Id, 64).primary_key())
                    .col(string_len(Role::Scope, 32))
                    .col(string_len(Role::Name, 255))
                    .col(text_null(Role::Description))
                    .index(
                        Index::create()
                            .unique()
                            .name("ixu-role-scope-name")
                            .col(Role::Scope)
                            .col(Role::Name),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Role::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Audit::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(IdentityProvider::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum IdentityProvider {
    Table,
    Id,
    Name,
    Description,
    Type,
    Enabled,
    Configuration,
    UserProfileMapping,
    EmailRequired,
    Order,
    GroupMappings,
    RoleMappings,
    ReferenceId,
    ReferenceType,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Audit {
    Table,
    Id,
    ReferenceId,
    ReferenceType,
    Event,
    Properties,
    OldValue,
    NewValue,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Role {
    Table,
    Id,
    Scope,
    Name,
    Description,
}
