/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

#![allow(dead_code)]

use axum_test::TestServer;
use roster_core::database::connect_db;
use roster_core::types::*;
use std::sync::Arc;
use web::create_router;

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

pub async fn create_test_state() -> Arc<ServerState> {
    let cli = create_test_cli();
    let db = connect_db(&cli).await.unwrap();

    Arc::new(ServerState { db, cli })
}

pub async fn create_test_server() -> (TestServer, Arc<ServerState>) {
    let state = create_test_state().await;
    let server = TestServer::new(create_router(Arc::clone(&state))).unwrap();

    (server, state)
}

pub async fn create_seeded_server() -> (TestServer, Arc<ServerState>) {
    let (server, state) = create_test_server().await;
    server.get("/seed_db").await.assert_status_ok();

    (server, state)
}
