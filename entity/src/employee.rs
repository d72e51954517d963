/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use chrono::NaiveDateTime;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "employee")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    EmployeeDepartment,
    EmployeeRole,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Self::EmployeeDepartment => {
                Entity::has_many(super::employee_department::Entity).into()
            }
            Self::EmployeeRole => Entity::has_many(super::employee_role::Entity).into(),
        }
    }
}

impl Related<super::employee_department::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EmployeeDepartment.def()
    }
}

impl Related<super::employee_role::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EmployeeRole.def()
    }
}

impl Related<super::department::Entity> for Entity {
    fn to() -> RelationDef {
        super::employee_department::Relation::Department.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::employee_department::Relation::Employee.def().rev())
    }
}

impl Related<super::role::Entity> for Entity {
    fn to() -> RelationDef {
        super::employee_role::Relation::Role.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::employee_role::Relation::Employee.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
