/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use chrono::Utc;
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
    TransactionTrait,
};

use super::associations::{
    add_employee_department, add_employee_role, remove_employee_associations,
    replace_employee_department, replace_employee_role,
};
use super::input::{validate_email, validate_name};
use super::types::*;

pub async fn get_employee<C>(conn: &C, id: i32) -> Result<Option<MEmployee>, DbErr>
where
    C: ConnectionTrait,
{
    EEmployee::find_by_id(id).one(conn).await
}

pub async fn get_employees<C>(conn: &C) -> Result<Vec<MEmployee>, DbErr>
where
    C: ConnectionTrait,
{
    EEmployee::find()
        .order_by_asc(CEmployee::Id)
        .all(conn)
        .await
}

pub async fn get_employees_sorted_by_name<C>(conn: &C) -> Result<Vec<MEmployee>, DbErr>
where
    C: ConnectionTrait,
{
    EEmployee::find()
        .order_by_asc(CEmployee::Name)
        .all(conn)
        .await
}

/// Inserts the employee together with its optional department and role rows.
///
/// Fails with `DbErr::Custom` before touching the database if the name is
/// blank or the email is malformed.
pub async fn create_employee(
    db: &DatabaseConnection,
    new_employee: NewEmployee,
) -> Result<MEmployee, DbErr> {
    validate_name("name", &new_employee.name)?;
    validate_email(&new_employee.email)?;

    let txn = db.begin().await?;
    let now = Utc::now().naive_utc();

    let aemployee = AEmployee {
        id: NotSet,
        name: Set(new_employee.name),
        email: Set(new_employee.email),
        created_at: Set(now),
        updated_at: Set(now),
    };

    let employee = aemployee.insert(&txn).await?;

    if let Some(department_id) = new_employee.department_id {
        add_employee_department(&txn, employee.id, department_id).await?;
    }

    if let Some(role_id) = new_employee.role_id {
        add_employee_role(&txn, employee.id, role_id).await?;
    }

    txn.commit().await?;

    tracing::debug!(employee = employee.id, "Created employee");

    Ok(employee)
}

/// Applies `patch` to the employee. Returns `None` if the employee does not exist.
///
/// Empty names and emails are ignored, other invalid ones fail the update. A department or role in the patch
/// replaces all existing rows of that kind.
pub async fn update_employee(
    db: &DatabaseConnection,
    id: i32,
    patch: EmployeePatch,
) -> Result<Option<MEmployee>, DbErr> {
    let txn = db.begin().await?;

    let Some(employee) = EEmployee::find_by_id(id).one(&txn).await? else {
        return Ok(None);
    };

    let name = patch.name.filter(|n| !n.is_empty());
    let email = patch.email.filter(|e| !e.is_empty());

    if let Some(name) = &name {
        validate_name("name", name)?;
    }

    if let Some(email) = &email {
        validate_email(email)?;
    }

    let mut aemployee: AEmployee = employee.into();

    if let Some(name) = name {
        aemployee.name = Set(name);
    }

    if let Some(email) = email {
        aemployee.email = Set(email);
    }

    aemployee.updated_at = Set(Utc::now().naive_utc());
    let employee = aemployee.update(&txn).await?;

    if let Some(department_id) = patch.department_id {
        replace_employee_department(&txn, id, department_id).await?;
    }

    if let Some(role_id) = patch.role_id {
        replace_employee_role(&txn, id, role_id).await?;
    }

    txn.commit().await?;

    tracing::debug!(employee = employee.id, "Updated employee");

    Ok(Some(employee))
}

/// Deletes the employee and its join rows. Returns `None` if the employee does not exist.
pub async fn delete_employee(
    db: &DatabaseConnection,
    id: i32,
) -> Result<Option<MEmployee>, DbErr> {
    let txn = db.begin().await?;

    let Some(employee) = EEmployee::find_by_id(id).one(&txn).await? else {
        return Ok(None);
    };

    remove_employee_associations(&txn, id).await?;
    EEmployee::delete_by_id(id).exec(&txn).await?;

    txn.commit().await?;

    tracing::info!(employee = id, "Deleted employee");

    Ok(Some(employee))
}
