/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EmployeeRole::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(EmployeeRole::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(EmployeeRole::EmployeeId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(EmployeeRole::RoleId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(EmployeeRole::CreatedAt)
                            .timestamp()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(EmployeeRole::UpdatedAt)
                            .timestamp()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-employee_role-employee")
                            .from(EmployeeRole::Table, EmployeeRole::EmployeeId)
                            .to(Employee::Table, Employee::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-employee_role-role")
                            .from(EmployeeRole::Table, EmployeeRole::RoleId)
                            .to(Role::Table, Role::Id)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-employee_role-employee-role")
                    .table(EmployeeRole::Table)
                    .col(EmployeeRole::EmployeeId)
                    .col(EmployeeRole::RoleId)
                    .unique()
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EmployeeRole::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum EmployeeRole {
    Table,
    Id,
    EmployeeId,
    RoleId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Employee {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Role {
    Table,
    Id,
}
