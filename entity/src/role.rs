/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use chrono::NaiveDateTime;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "role")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub title: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::employee_role::Entity")]
    EmployeeRole,
}

impl Related<super::employee_role::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EmployeeRole.def()
    }
}

impl Related<super::employee::Entity> for Entity {
    fn to() -> RelationDef {
        super::employee_role::Relation::Employee.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::employee_role::Relation::Role.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
