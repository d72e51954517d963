/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use clap::Parser;
use roster_core::init_state;
use roster_core::types::Cli;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt};

fn init_logging(cli: &Cli) {
    let filter = EnvFilter::try_new(&cli.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = fmt().with_env_filter(filter);

    let result = if cli.log_json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    if let Err(e) = result {
        eprintln!("tracing init failed: {}", e);
    }
}

#[tokio::main]
pub async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(&cli);

    let state = init_state(cli).await?;
    web::serve_web(Arc::clone(&state)).await?;

    Ok(())
}
