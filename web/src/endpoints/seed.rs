/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::error::WebResult;
use axum::Json;
use axum::extract::State;
use roster_core::database::seed_db;
use roster_core::types::*;
use std::sync::Arc;

pub async fn get(state: State<Arc<ServerState>>) -> WebResult<Json<BaseResponse<String>>> {
    seed_db(&state.db).await?;

    let res = BaseResponse {
        error: false,
        message: "Database seeded!".to_string(),
    };

    Ok(Json(res))
}
