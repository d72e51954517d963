/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use anyhow::{Context, Result};
use chrono::Utc;
use migration::{Migrator, MigratorTrait};
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::{
    ColumnTrait, ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, TransactionTrait,
};
use std::time::Duration;
use tracing::log::LevelFilter;

use super::associations::{add_employee_department, add_employee_role};
use super::consts::{
    IN_MEMORY_CONNECTION_LIFETIME, SEED_DEPARTMENTS, SEED_EMPLOYEES, SEED_ROLES,
};
use super::input::is_in_memory_database;
use super::types::*;

pub async fn connect_db(cli: &Cli) -> Result<DatabaseConnection> {
    let opt = connect_options(cli)?;

    let db = Database::connect(opt)
        .await
        .context("Failed to connect to database")?;
    Migrator::up(&db, None)
        .await
        .context("Failed to run database migrations")?;
    Ok(db)
}

/// Pool settings for the configured database url.
pub fn connect_options(cli: &Cli) -> Result<ConnectOptions> {
    let db_url = if let Some(file) = &cli.database_url_file {
        std::fs::read_to_string(file)
            .context("Failed to read database url from file")?
            .trim()
            .to_string()
    } else {
        cli.database_url.clone()
    };

    let in_memory = is_in_memory_database(&db_url);
    let max_connections = if in_memory { 1 } else { cli.max_connections };

    let mut opt = ConnectOptions::new(db_url);

    // Only enable SQL logging at debug level
    if cli.log_level == "debug" {
        opt.sqlx_logging(true)
            .sqlx_logging_level(LevelFilter::Debug);
    } else {
        opt.sqlx_logging(false);
    }

    opt.max_connections(max_connections)
        .min_connections(1)
        .connect_timeout(Duration::from_secs(8))
        .acquire_timeout(Duration::from_secs(8));

    // The in-memory database lives only as long as its single connection.
    if in_memory {
        opt.max_lifetime(IN_MEMORY_CONNECTION_LIFETIME)
            .idle_timeout(IN_MEMORY_CONNECTION_LIFETIME);
    }

    Ok(opt)
}

/// Rebuilds every table and fills them with the fixed sample data.
pub async fn seed_db(db: &DatabaseConnection) -> Result<(), DbErr> {
    Migrator::refresh(db).await?;

    let txn = db.begin().await?;

    let departments = bulk_create_departments(&txn, &SEED_DEPARTMENTS).await?;
    let roles = bulk_create_roles(&txn, &SEED_ROLES).await?;
    let employees = bulk_create_employees(
        &txn,
        &SEED_EMPLOYEES
            .iter()
            .map(|e| (e.name, e.email))
            .collect::<Vec<_>>(),
    )
    .await?;

    for (seed, employee) in SEED_EMPLOYEES.iter().zip(employees.iter()) {
        let department = departments.get(seed.department).ok_or_else(|| {
            DbErr::Custom(format!("Unknown seed department {}", seed.department))
        })?;
        let role = roles
            .get(seed.role)
            .ok_or_else(|| DbErr::Custom(format!("Unknown seed role {}", seed.role)))?;

        add_employee_department(&txn, employee.id, department.id).await?;
        add_employee_role(&txn, employee.id, role.id).await?;
    }

    txn.commit().await?;

    tracing::info!(
        departments = departments.len(),
        roles = roles.len(),
        employees = employees.len(),
        "Database seeded"
    );

    Ok(())
}

/// Inserts all departments in one statement and returns them in the order of `names`.
pub async fn bulk_create_departments<C>(conn: &C, names: &[&str]) -> Result<Vec<MDepartment>, DbErr>
where
    C: ConnectionTrait,
{
    if names.is_empty() {
        return Ok(Vec::new());
    }

    let now = Utc::now().naive_utc();
    let adepartments = names.iter().map(|name| ADepartment {
        id: NotSet,
        name: Set(name.to_string()),
        created_at: Set(now),
        updated_at: Set(now),
    });

    EDepartment::insert_many(adepartments).exec(conn).await?;

    let departments = EDepartment::find()
        .filter(CDepartment::Name.is_in(names.iter().copied()))
        .all(conn)
        .await?;

    Ok(names
        .iter()
        .filter_map(|name| departments.iter().find(|d| d.name == *name).cloned())
        .collect())
}

/// Inserts all roles in one statement and returns them in the order of `titles`.
pub async fn bulk_create_roles<C>(conn: &C, titles: &[&str]) -> Result<Vec<MRole>, DbErr>
where
    C: ConnectionTrait,
{
    if titles.is_empty() {
        return Ok(Vec::new());
    }

    let now = Utc::now().naive_utc();
    let aroles = titles.iter().map(|title| ARole {
        id: NotSet,
        title: Set(title.to_string()),
        created_at: Set(now),
        updated_at: Set(now),
    });

    ERole::insert_many(aroles).exec(conn).await?;

    let roles = ERole::find()
        .filter(CRole::Title.is_in(titles.iter().copied()))
        .all(conn)
        .await?;

    Ok(titles
        .iter()
        .filter_map(|title| roles.iter().find(|r| r.title == *title).cloned())
        .collect())
}

/// Inserts all `(name, email)` pairs in one statement and returns the
/// employees in input order.
pub async fn bulk_create_employees<C>(
    conn: &C,
    employees: &[(&str, &str)],
) -> Result<Vec<MEmployee>, DbErr>
where
    C: ConnectionTrait,
{
    if employees.is_empty() {
        return Ok(Vec::new());
    }

    let now = Utc::now().naive_utc();
    let aemployees = employees.iter().map(|(name, email)| AEmployee {
        id: NotSet,
        name: Set(name.to_string()),
        email: Set(email.to_string()),
        created_at: Set(now),
        updated_at: Set(now),
    });

    EEmployee::insert_many(aemployees).exec(conn).await?;

    let inserted = EEmployee::find()
        .filter(CEmployee::Email.is_in(employees.iter().map(|(_, email)| *email)))
        .all(conn)
        .await?;

    Ok(employees
        .iter()
        .filter_map(|(_, email)| inserted.iter().find(|e| e.email == *email).cloned())
        .collect())
}
