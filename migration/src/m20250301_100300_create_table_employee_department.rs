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
                    .table(EmployeeDepartment::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(EmployeeDepartment::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(EmployeeDepartment::EmployeeId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(EmployeeDepartment::DepartmentId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(EmployeeDepartment::CreatedAt)
                            .timestamp()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(EmployeeDepartment::UpdatedAt)
                            .timestamp()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-employee_department-employee")
                            .from(EmployeeDepartment::Table, EmployeeDepartment::EmployeeId)
                            .to(Employee::Table, Employee::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-employee_department-department")
                            .from(EmployeeDepartment::Table, EmployeeDepartment::DepartmentId)
                            .to(Department::Table, Department::Id)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-employee_department-employee-department")
                    .table(EmployeeDepartment::Table)
                    .col(EmployeeDepartment::EmployeeId)
                    .col(EmployeeDepartment::DepartmentId)
                    .unique()
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EmployeeDepartment::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum EmployeeDepartment {
    Table,
    Id,
    EmployeeId,
    DepartmentId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Employee {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Department {
    Table,
    Id,
}
