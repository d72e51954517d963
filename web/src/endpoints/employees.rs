/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::error::{WebError, WebResult};
use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use roster_core::associations::{
    get_employee_details, get_employees_by_department, get_employees_by_role,
    get_employees_details,
};
use roster_core::employees;
use roster_core::input::{InputError, validate_email, validate_name};
use roster_core::types::*;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct MakeEmployeeRequest {
    pub name: String,
    pub email: String,
    pub department_id: Option<i32>,
    pub role_id: Option<i32>,
}

impl MakeEmployeeRequest {
    pub fn validate(&self) -> Result<(), InputError> {
        validate_name("name", &self.name)?;
        validate_email(&self.email)
    }
}

impl From<MakeEmployeeRequest> for NewEmployee {
    fn from(body: MakeEmployeeRequest) -> Self {
        NewEmployee {
            name: body.name,
            email: body.email,
            department_id: body.department_id,
            role_id: body.role_id,
        }
    }
}

/// Empty `name` and `email` values are treated like missing ones.
#[derive(Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct PatchEmployeeRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub department_id: Option<i32>,
    pub role_id: Option<i32>,
}

impl PatchEmployeeRequest {
    pub fn validate(&self) -> Result<(), InputError> {
        if let Some(name) = self.name.as_deref().filter(|n| !n.is_empty()) {
            validate_name("name", name)?;
        }

        if let Some(email) = self.email.as_deref().filter(|e| !e.is_empty()) {
            validate_email(email)?;
        }

        Ok(())
    }
}

impl From<PatchEmployeeRequest> for EmployeePatch {
    fn from(body: PatchEmployeeRequest) -> Self {
        EmployeePatch {
            name: body.name,
            email: body.email,
            department_id: body.department_id,
            role_id: body.role_id,
        }
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct DeleteEmployeeRequest {
    pub id: i32,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct EmployeeListResponse {
    pub employees: Vec<EmployeeDetails>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct EmployeeResponse {
    pub employee: EmployeeDetails,
}

pub async fn get(state: State<Arc<ServerState>>) -> WebResult<Json<EmployeeListResponse>> {
    let employees = employees::get_employees(&state.db).await?;
    let employees = get_employees_details(&state.db, employees).await?;

    Ok(Json(EmployeeListResponse { employees }))
}

pub async fn get_details(
    state: State<Arc<ServerState>>,
    path: Result<Path<i32>, PathRejection>,
) -> WebResult<Json<EmployeeResponse>> {
    let Path(id) = path?;

    let employee = employees::get_employee(&state.db, id)
        .await?
        .ok_or_else(|| WebError::not_found("Employee"))?;

    let employee = get_employee_details(&state.db, employee).await?;

    Ok(Json(EmployeeResponse { employee }))
}

pub async fn get_by_department(
    state: State<Arc<ServerState>>,
    path: Result<Path<i32>, PathRejection>,
) -> WebResult<Json<EmployeeListResponse>> {
    let Path(department_id) = path?;

    let employees = get_employees_by_department(&state.db, department_id).await?;
    let employees = get_employees_details(&state.db, employees).await?;

    Ok(Json(EmployeeListResponse { employees }))
}

pub async fn get_by_role(
    state: State<Arc<ServerState>>,
    path: Result<Path<i32>, PathRejection>,
) -> WebResult<Json<EmployeeListResponse>> {
    let Path(role_id) = path?;

    let employees = get_employees_by_role(&state.db, role_id).await?;
    let employees = get_employees_details(&state.db, employees).await?;

    Ok(Json(EmployeeListResponse { employees }))
}

pub async fn get_sorted_by_name(
    state: State<Arc<ServerState>>,
) -> WebResult<Json<EmployeeListResponse>> {
    let employees = employees::get_employees_sorted_by_name(&state.db).await?;
    let employees = get_employees_details(&state.db, employees).await?;

    Ok(Json(EmployeeListResponse { employees }))
}

pub async fn post(
    state: State<Arc<ServerState>>,
    body: Result<Json<MakeEmployeeRequest>, JsonRejection>,
) -> WebResult<(StatusCode, Json<EmployeeResponse>)> {
    let Json(body) = body?;
    body.validate()?;

    let employee = employees::create_employee(&state.db, body.into()).await?;
    let employee = get_employee_details(&state.db, employee).await?;

    Ok((StatusCode::CREATED, Json(EmployeeResponse { employee })))
}

pub async fn put(
    state: State<Arc<ServerState>>,
    path: Result<Path<i32>, PathRejection>,
    body: Result<Json<PatchEmployeeRequest>, JsonRejection>,
) -> WebResult<Json<EmployeeResponse>> {
    let Path(id) = path?;
    let Json(body) = body?;

    employees::get_employee(&state.db, id)
        .await?
        .ok_or_else(|| WebError::not_found("Employee"))?;

    body.validate()?;

    let employee = employees::update_employee(&state.db, id, body.into())
        .await?
        .ok_or_else(|| WebError::not_found("Employee"))?;

    let employee = get_employee_details(&state.db, employee).await?;

    Ok(Json(EmployeeResponse { employee }))
}

pub async fn delete(
    state: State<Arc<ServerState>>,
    body: Result<Json<DeleteEmployeeRequest>, JsonRejection>,
) -> WebResult<Json<BaseResponse<String>>> {
    let Json(body) = body?;

    employees::delete_employee(&state.db, body.id)
        .await?
        .ok_or_else(|| WebError::not_found("Employee"))?;

    let res = BaseResponse {
        error: false,
        message: format!("Employee with ID {} has been deleted", body.id),
    };

    Ok(Json(res))
}
