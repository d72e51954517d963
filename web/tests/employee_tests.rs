/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

mod common;

use axum::http::StatusCode;
use entity::{employee_department, employee_role};
use roster_core::types::*;
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};
use serde_json::{Value, json};
use web::endpoints::employees::{EmployeeListResponse, EmployeeResponse};

fn names(list: &EmployeeListResponse) -> Vec<&str> {
    list.employees
        .iter()
        .map(|e| e.employee.name.as_str())
        .collect()
}

#[tokio::test]
async fn test_seed_db() {
    let (server, _state) = common::create_test_server().await;

    let response = server.get("/seed_db").await;
    response.assert_status_ok();

    let body: BaseResponse<String> = response.json();
    assert!(!body.error);
    assert_eq!(body.message, "Database seeded!");
}

#[tokio::test]
async fn test_seed_db_twice_resets_data() {
    let (server, _state) = common::create_seeded_server().await;

    server
        .post("/employees/new")
        .json(&json!({ "name": "Extra", "email": "extra@example.com" }))
        .await
        .assert_status(StatusCode::CREATED);

    server.get("/seed_db").await.assert_status_ok();

    let list: EmployeeListResponse = server.get("/employees").await.json();
    assert_eq!(list.employees.len(), 3);
}

#[tokio::test]
async fn test_get_employees_after_seed() {
    let (server, _state) = common::create_seeded_server().await;

    let response = server.get("/employees").await;
    response.assert_status_ok();

    let list: EmployeeListResponse = response.json();
    assert_eq!(list.employees.len(), 3);

    let expected = [
        ("Rahul Sharma", "Engineering", "Software Engineer"),
        ("Priya Singh", "Marketing", "Marketing Specialist"),
        ("Ankit Verma", "Engineering", "Product Manager"),
    ];

    for (details, (name, department, role)) in list.employees.iter().zip(expected) {
        assert_eq!(details.employee.name, name);
        assert_eq!(details.department.as_ref().unwrap().name, department);
        assert_eq!(details.role.as_ref().unwrap().title, role);
    }
}

#[tokio::test]
async fn test_get_employees_empty() {
    let (server, _state) = common::create_test_server().await;

    let body: Value = server.get("/employees").await.json();
    assert_eq!(body, json!({ "employees": [] }));
}

#[tokio::test]
async fn test_get_employee_details() {
    let (server, _state) = common::create_seeded_server().await;

    let response = server.get("/employees/details/2").await;
    response.assert_status_ok();

    let body: Value = response.json();
    let employee = &body["employee"];
    assert_eq!(employee["id"], 2);
    assert_eq!(employee["name"], "Priya Singh");
    assert_eq!(employee["email"], "priya.singh@example.com");
    assert_eq!(employee["department"]["name"], "Marketing");
    assert_eq!(employee["role"]["title"], "Marketing Specialist");
    assert!(employee.get("createdAt").is_some());
}

#[tokio::test]
async fn test_get_employee_details_not_found() {
    let (server, _state) = common::create_seeded_server().await;

    let response = server.get("/employees/details/999").await;
    response.assert_status_not_found();

    let body: BaseResponse<String> = response.json();
    assert!(body.error);
    assert_eq!(body.message, "Employee not found");
}

#[tokio::test]
async fn test_get_employee_details_invalid_id() {
    let (server, _state) = common::create_seeded_server().await;

    let response = server.get("/employees/details/abc").await;
    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);

    let body: BaseResponse<String> = response.json();
    assert!(body.error);
}

#[tokio::test]
async fn test_get_employees_by_department() {
    let (server, _state) = common::create_seeded_server().await;

    let list: EmployeeListResponse = server.get("/employees/department/1").await.json();
    assert_eq!(names(&list), vec!["Rahul Sharma", "Ankit Verma"]);

    let list: EmployeeListResponse = server.get("/employees/department/42").await.json();
    assert!(list.employees.is_empty());
}

#[tokio::test]
async fn test_get_employees_by_role() {
    let (server, _state) = common::create_seeded_server().await;

    let list: EmployeeListResponse = server.get("/employees/role/3").await.json();
    assert_eq!(names(&list), vec!["Ankit Verma"]);
    assert_eq!(
        list.employees[0].role.as_ref().unwrap().title,
        "Product Manager"
    );
}

#[tokio::test]
async fn test_get_employees_sorted_by_name() {
    let (server, _state) = common::create_seeded_server().await;

    let response = server.get("/employees/sort-by-name").await;
    response.assert_status_ok();

    let list: EmployeeListResponse = response.json();
    assert_eq!(
        names(&list),
        vec!["Ankit Verma", "Priya Singh", "Rahul Sharma"]
    );
}

#[tokio::test]
async fn test_post_employee() {
    let (server, _state) = common::create_seeded_server().await;

    let response = server
        .post("/employees/new")
        .json(&json!({
            "name": "Meera Nair",
            "email": "meera.nair@example.com",
            "departmentId": 2,
            "roleId": 3
        }))
        .await;
    response.assert_status(StatusCode::CREATED);

    let created: EmployeeResponse = response.json();
    assert_eq!(created.employee.employee.name, "Meera Nair");
    assert_eq!(created.employee.department.unwrap().name, "Marketing");
    assert_eq!(created.employee.role.unwrap().title, "Product Manager");

    let list: EmployeeListResponse = server.get("/employees").await.json();
    assert_eq!(list.employees.len(), 4);
}

#[tokio::test]
async fn test_post_employee_without_associations() {
    let (server, _state) = common::create_seeded_server().await;

    let response = server
        .post("/employees/new")
        .json(&json!({ "name": "Meera Nair", "email": "meera.nair@example.com" }))
        .await;
    response.assert_status(StatusCode::CREATED);

    let body: Value = response.json();
    assert_eq!(body["employee"]["department"], Value::Null);
    assert_eq!(body["employee"]["role"], Value::Null);
}

#[tokio::test]
async fn test_post_employee_duplicate_email() {
    let (server, _state) = common::create_seeded_server().await;

    let response = server
        .post("/employees/new")
        .json(&json!({ "name": "Someone Else", "email": "rahul.sharma@example.com" }))
        .await;
    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);

    let body: BaseResponse<String> = response.json();
    assert!(body.error);

    let list: EmployeeListResponse = server.get("/employees").await.json();
    assert_eq!(list.employees.len(), 3);
}

#[tokio::test]
async fn test_post_employee_invalid_email() {
    let (server, _state) = common::create_seeded_server().await;

    let response = server
        .post("/employees/new")
        .json(&json!({ "name": "Meera Nair", "email": "not-an-email" }))
        .await;
    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);

    let body: BaseResponse<String> = response.json();
    assert_eq!(body.message, "`not-an-email` is not a valid email address");
}

#[tokio::test]
async fn test_post_employee_blank_name() {
    let (server, _state) = common::create_seeded_server().await;

    let response = server
        .post("/employees/new")
        .json(&json!({ "name": "   ", "email": "blank@example.com" }))
        .await;
    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);

    let body: BaseResponse<String> = response.json();
    assert_eq!(body.message, "name cannot be empty");
}

#[tokio::test]
async fn test_post_employee_missing_field() {
    let (server, _state) = common::create_seeded_server().await;

    let response = server
        .post("/employees/new")
        .json(&json!({ "email": "missing.name@example.com" }))
        .await;
    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);

    let body: BaseResponse<String> = response.json();
    assert!(body.error);
}

#[tokio::test]
async fn test_post_employee_unknown_department_rolls_back() {
    let (server, _state) = common::create_seeded_server().await;

    server
        .post("/employees/new")
        .json(&json!({
            "name": "Meera Nair",
            "email": "meera.nair@example.com",
            "departmentId": 99
        }))
        .await
        .assert_status(StatusCode::INTERNAL_SERVER_ERROR);

    let list: EmployeeListResponse = server.get("/employees").await.json();
    assert_eq!(list.employees.len(), 3);
}

#[tokio::test]
async fn test_put_employee() {
    let (server, state) = common::create_seeded_server().await;

    let response = server
        .put("/employees/update/1")
        .json(&json!({ "name": "Rahul S.", "departmentId": 2, "roleId": 2 }))
        .await;
    response.assert_status_ok();

    let updated: EmployeeResponse = response.json();
    assert_eq!(updated.employee.employee.name, "Rahul S.");
    assert_eq!(updated.employee.employee.email, "rahul.sharma@example.com");
    assert_eq!(updated.employee.department.unwrap().name, "Marketing");
    assert_eq!(updated.employee.role.unwrap().title, "Marketing Specialist");

    let rows = employee_department::Entity::find()
        .filter(employee_department::Column::EmployeeId.eq(1))
        .all(&state.db)
        .await
        .unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].department_id, 2);

    let roles = employee_role::Entity::find()
        .filter(employee_role::Column::EmployeeId.eq(1))
        .count(&state.db)
        .await
        .unwrap();
    assert_eq!(roles, 1);
}

#[tokio::test]
async fn test_put_employee_empty_strings_ignored() {
    let (server, _state) = common::create_seeded_server().await;

    let response = server
        .put("/employees/update/3")
        .json(&json!({ "name": "", "email": "" }))
        .await;
    response.assert_status_ok();

    let updated: EmployeeResponse = response.json();
    assert_eq!(updated.employee.employee.name, "Ankit Verma");
    assert_eq!(updated.employee.employee.email, "ankit.verma@example.com");
}

#[tokio::test]
async fn test_put_employee_not_found() {
    let (server, _state) = common::create_seeded_server().await;

    let response = server
        .put("/employees/update/999")
        .json(&json!({ "name": "Nobody" }))
        .await;
    response.assert_status_not_found();

    let body: BaseResponse<String> = response.json();
    assert_eq!(body.message, "Employee not found");
}

#[tokio::test]
async fn test_put_employee_not_found_before_validation() {
    let (server, _state) = common::create_seeded_server().await;

    let response = server
        .put("/employees/update/999")
        .json(&json!({ "email": "bad" }))
        .await;
    response.assert_status_not_found();

    let body: BaseResponse<String> = response.json();
    assert!(body.error);
    assert_eq!(body.message, "Employee not found");
}

#[tokio::test]
async fn test_put_employee_invalid_email() {
    let (server, _state) = common::create_seeded_server().await;

    let response = server
        .put("/employees/update/1")
        .json(&json!({ "email": "bad" }))
        .await;
    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);

    let body: BaseResponse<String> = response.json();
    assert_eq!(body.message, "`bad` is not a valid email address");

    let details: EmployeeResponse = server.get("/employees/details/1").await.json();
    assert_eq!(details.employee.employee.email, "rahul.sharma@example.com");
}

#[tokio::test]
async fn test_put_employee_failure_leaves_state_unchanged() {
    let (server, state) = common::create_seeded_server().await;

    server
        .put("/employees/update/1")
        .json(&json!({ "email": "priya.singh@example.com", "departmentId": 2 }))
        .await
        .assert_status(StatusCode::INTERNAL_SERVER_ERROR);

    let details: EmployeeResponse = server.get("/employees/details/1").await.json();
    assert_eq!(details.employee.employee.email, "rahul.sharma@example.com");
    assert_eq!(details.employee.department.unwrap().name, "Engineering");

    let rows = employee_department::Entity::find()
        .filter(employee_department::Column::EmployeeId.eq(1))
        .all(&state.db)
        .await
        .unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].department_id, 1);
}

#[tokio::test]
async fn test_delete_employee() {
    let (server, state) = common::create_seeded_server().await;

    let response = server
        .delete("/employees/delete")
        .json(&json!({ "id": 2 }))
        .await;
    response.assert_status_ok();

    let body: BaseResponse<String> = response.json();
    assert!(!body.error);
    assert_eq!(body.message, "Employee with ID 2 has been deleted");

    server
        .get("/employees/details/2")
        .await
        .assert_status_not_found();

    let departments = employee_department::Entity::find()
        .filter(employee_department::Column::EmployeeId.eq(2))
        .count(&state.db)
        .await
        .unwrap();
    let roles = employee_role::Entity::find()
        .filter(employee_role::Column::EmployeeId.eq(2))
        .count(&state.db)
        .await
        .unwrap();
    assert_eq!(departments, 0);
    assert_eq!(roles, 0);

    let list: EmployeeListResponse = server.get("/employees").await.json();
    assert_eq!(list.employees.len(), 2);
}

#[tokio::test]
async fn test_delete_employee_not_found() {
    let (server, _state) = common::create_seeded_server().await;

    let response = server
        .delete("/employees/delete")
        .json(&json!({ "id": 999 }))
        .await;
    response.assert_status_not_found();

    let body: BaseResponse<String> = response.json();
    assert_eq!(body.message, "Employee not found");
}
