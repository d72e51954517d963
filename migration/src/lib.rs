/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub use sea_orm_migration::prelude::*;

mod m20250301_100000_create_table_employee;
mod m20250301_100100_create_table_department;
mod m20250301_100200_create_table_role;
mod m20250301_100300_create_table_employee_department;
mod m20250301_100400_create_table_employee_role;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_100000_create_table_employee::Migration),
            Box::new(m20250301_100100_create_table_department::Migration),
            Box::new(m20250301_100200_create_table_role::Migration),
            Box::new(m20250301_100300_create_table_employee_department::Migration),
            Box::new(m20250301_100400_create_table_employee_role::Migration),
        ]
    }
}
