/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::input::{greater_than_zero, port_in_range};
use clap::Parser;
use entity::*;
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};

#[derive(Parser, Debug)]
#[command(name = "Roster", display_name = "Roster", bin_name = "roster-server", author = "Wavelens", version, about, long_about = None)]
pub struct Cli {
    #[arg(long, env = "ROSTER_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
    #[arg(long, env = "ROSTER_LOG_JSON", default_value = "false")]
    pub log_json: bool,
    #[arg(long, env = "ROSTER_IP", default_value = "127.0.0.1")]
    pub ip: String,
    #[arg(long, env = "ROSTER_PORT", value_parser = port_in_range, default_value_t = 3000)]
    pub port: u16,
    #[arg(
        long,
        env = "ROSTER_DATABASE_URL",
        default_value = "sqlite://roster.db?mode=rwc"
    )]
    pub database_url: String,
    #[arg(long, env = "ROSTER_DATABASE_URL_FILE")]
    pub database_url_file: Option<String>,
    #[arg(long, env = "ROSTER_MAX_CONNECTIONS", value_parser = greater_than_zero::<u32>, default_value = "10")]
    pub max_connections: u32,
}

#[derive(Debug)]
pub struct ServerState {
    pub db: DatabaseConnection,
    pub cli: Cli,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct BaseResponse<T> {
    pub error: bool,
    pub message: T,
}

/// An employee merged with its resolved department and role.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct EmployeeDetails {
    #[serde(flatten)]
    pub employee: MEmployee,
    pub department: Option<MDepartment>,
    pub role: Option<MRole>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEmployee {
    pub name: String,
    pub email: String,
    pub department_id: Option<i32>,
    pub role_id: Option<i32>,
}

/// Fields left as `None` are kept as they are.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeePatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub department_id: Option<i32>,
    pub role_id: Option<i32>,
}

pub type EDepartment = department::Entity;
pub type EEmployee = employee::Entity;
pub type EEmployeeDepartment = employee_department::Entity;
pub type EEmployeeRole = employee_role::Entity;
pub type ERole = role::Entity;

pub type MDepartment = department::Model;
pub type MEmployee = employee::Model;
pub type MEmployeeDepartment = employee_department::Model;
pub type MEmployeeRole = employee_role::Model;
pub type MRole = role::Model;

pub type ADepartment = department::ActiveModel;
pub type AEmployee = employee::ActiveModel;
pub type AEmployeeDepartment = employee_department::ActiveModel;
pub type AEmployeeRole = employee_role::ActiveModel;
pub type ARole = role::ActiveModel;

pub type CDepartment = department::Column;
pub type CEmployee = employee::Column;
pub type CEmployeeDepartment = employee_department::Column;
pub type CEmployeeRole = employee_role::Column;
pub type CRole = role::Column;

pub type RDepartment = department::Relation;
pub type REmployee = employee::Relation;
pub type REmployeeDepartment = employee_department::Relation;
pub type REmployeeRole = employee_role::Relation;
pub type RRole = role::Relation;
