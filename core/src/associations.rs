/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Employee to department / role join rows.
//!
//! An employee is expected to have at most one row in each join table. When
//! more exist, the row with the highest id decides the resolved department or
//! role.

use chrono::Utc;
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, JoinType, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait,
};

use super::types::*;

pub async fn get_employee_department<C>(
    conn: &C,
    employee_id: i32,
) -> Result<Option<MDepartment>, DbErr>
where
    C: ConnectionTrait,
{
    let employee_departments = EEmployeeDepartment::find()
        .filter(CEmployeeDepartment::EmployeeId.eq(employee_id))
        .order_by_asc(CEmployeeDepartment::Id)
        .all(conn)
        .await?;

    match employee_departments.last() {
        Some(ed) => EDepartment::find_by_id(ed.department_id).one(conn).await,
        None => Ok(None),
    }
}

pub async fn get_employee_role<C>(conn: &C, employee_id: i32) -> Result<Option<MRole>, DbErr>
where
    C: ConnectionTrait,
{
    let employee_roles = EEmployeeRole::find()
        .filter(CEmployeeRole::EmployeeId.eq(employee_id))
        .order_by_asc(CEmployeeRole::Id)
        .all(conn)
        .await?;

    match employee_roles.last() {
        Some(er) => ERole::find_by_id(er.role_id).one(conn).await,
        None => Ok(None),
    }
}

pub async fn get_employee_details<C>(conn: &C, employee: MEmployee) -> Result<EmployeeDetails, DbErr>
where
    C: ConnectionTrait,
{
    let department = get_employee_department(conn, employee.id).await?;
    let role = get_employee_role(conn, employee.id).await?;

    Ok(EmployeeDetails {
        employee,
        department,
        role,
    })
}

pub async fn get_employees_details<C>(
    conn: &C,
    employees: Vec<MEmployee>,
) -> Result<Vec<EmployeeDetails>, DbErr>
where
    C: ConnectionTrait,
{
    let mut details = Vec::with_capacity(employees.len());

    for employee in employees {
        details.push(get_employee_details(conn, employee).await?);
    }

    Ok(details)
}

/// Employees referenced by the join rows of a department, in join row order.
pub async fn get_employees_by_department<C>(
    conn: &C,
    department_id: i32,
) -> Result<Vec<MEmployee>, DbErr>
where
    C: ConnectionTrait,
{
    EEmployee::find()
        .join(JoinType::InnerJoin, REmployee::EmployeeDepartment.def())
        .filter(CEmployeeDepartment::DepartmentId.eq(department_id))
        .order_by_asc(CEmployeeDepartment::Id)
        .all(conn)
        .await
}

/// Employees referenced by the join rows of a role, in join row order.
pub async fn get_employees_by_role<C>(conn: &C, role_id: i32) -> Result<Vec<MEmployee>, DbErr>
where
    C: ConnectionTrait,
{
    EEmployee::find()
        .join(JoinType::InnerJoin, REmployee::EmployeeRole.def())
        .filter(CEmployeeRole::RoleId.eq(role_id))
        .order_by_asc(CEmployeeRole::Id)
        .all(conn)
        .await
}

pub async fn add_employee_department<C>(
    conn: &C,
    employee_id: i32,
    department_id: i32,
) -> Result<MEmployeeDepartment, DbErr>
where
    C: ConnectionTrait,
{
    let now = Utc::now().naive_utc();

    AEmployeeDepartment {
        id: NotSet,
        employee_id: Set(employee_id),
        department_id: Set(department_id),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(conn)
    .await
}

pub async fn add_employee_role<C>(
    conn: &C,
    employee_id: i32,
    role_id: i32,
) -> Result<MEmployeeRole, DbErr>
where
    C: ConnectionTrait,
{
    let now = Utc::now().naive_utc();

    AEmployeeRole {
        id: NotSet,
        employee_id: Set(employee_id),
        role_id: Set(role_id),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(conn)
    .await
}

/// Drops every department row of the employee before linking the new one.
pub async fn replace_employee_department<C>(
    conn: &C,
    employee_id: i32,
    department_id: i32,
) -> Result<MEmployeeDepartment, DbErr>
where
    C: ConnectionTrait,
{
    EEmployeeDepartment::delete_many()
        .filter(CEmployeeDepartment::EmployeeId.eq(employee_id))
        .exec(conn)
        .await?;

    add_employee_department(conn, employee_id, department_id).await
}

/// Drops every role row of the employee before linking the new one.
pub async fn replace_employee_role<C>(
    conn: &C,
    employee_id: i32,
    role_id: i32,
) -> Result<MEmployeeRole, DbErr>
where
    C: ConnectionTrait,
{
    EEmployeeRole::delete_many()
        .filter(CEmployeeRole::EmployeeId.eq(employee_id))
        .exec(conn)
        .await?;

    add_employee_role(conn, employee_id, role_id).await
}

pub async fn remove_employee_associations<C>(conn: &C, employee_id: i32) -> Result<(), DbErr>
where
    C: ConnectionTrait,
{
    EEmployeeDepartment::delete_many()
        .filter(CEmployeeDepartment::EmployeeId.eq(employee_id))
        .exec(conn)
        .await?;

    EEmployeeRole::delete_many()
        .filter(CEmployeeRole::EmployeeId.eq(employee_id))
        .exec(conn)
        .await?;

    Ok(())
}
