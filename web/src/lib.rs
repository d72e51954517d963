/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod endpoints;
pub mod error;

use axum::Router;
use axum::routing::{delete, get, post, put};
use roster_core::types::ServerState;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

pub fn create_router(state: Arc<ServerState>) -> Router {
    Router::new()
        .route("/seed_db", get(endpoints::seed::get))
        .route("/employees", get(endpoints::employees::get))
        .route(
            "/employees/details/{id}",
            get(endpoints::employees::get_details),
        )
        .route(
            "/employees/department/{department_id}",
            get(endpoints::employees::get_by_department),
        )
        .route(
            "/employees/role/{role_id}",
            get(endpoints::employees::get_by_role),
        )
        .route(
            "/employees/sort-by-name",
            get(endpoints::employees::get_sorted_by_name),
        )
        .route("/employees/new", post(endpoints::employees::post))
        .route("/employees/update/{id}", put(endpoints::employees::put))
        .route("/employees/delete", delete(endpoints::employees::delete))
        .route("/health", get(endpoints::get_health))
        .fallback(endpoints::handle_404)
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http())
                .layer(PropagateRequestIdLayer::x_request_id())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

pub async fn serve_web(state: Arc<ServerState>) -> std::io::Result<()> {
    let server_url = format!("{}:{}", state.cli.ip, state.cli.port);
    let app = create_router(Arc::clone(&state));

    let listener = tokio::net::TcpListener::bind(&server_url).await?;
    tracing::info!("Listening on {}", server_url);

    axum::serve(listener, app).await
}
