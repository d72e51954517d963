/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod associations;
pub mod consts;
pub mod database;
pub mod employees;
pub mod input;
pub mod types;

use anyhow::Result;
use database::connect_db;
use std::sync::Arc;
use types::*;

pub async fn init_state(cli: Cli) -> Result<Arc<ServerState>> {
    tracing::info!("Starting Roster Server on {}:{}", cli.ip, cli.port);

    let db = connect_db(&cli).await?;

    Ok(Arc::new(ServerState { db, cli }))
}
