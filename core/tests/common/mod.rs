/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

#![allow(dead_code)]

use roster_core::database::{connect_db, seed_db};
use roster_core::types::*;
use sea_orm::DatabaseConnection;

pub fn create_test_cli() -> Cli {
    Cli {
        log_level: "info".to_string(),
        log_json: false,
        ip: "127.0.0.1".to_string(),
        port: 3000,
        database_url: "sqlite::memory:".to_string(),
        database_url_file: None,
        max_connections: 1,
    }
}

pub async fn create_test_db() -> DatabaseConnection {
    connect_db(&create_test_cli()).await.unwrap()
}

pub async fn create_seeded_db() -> DatabaseConnection {
    let db = create_test_db().await;
    seed_db(&db).await.unwrap();
    db
}
