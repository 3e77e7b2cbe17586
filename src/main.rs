// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::env;
use std::time::Instant;

use prehandler::config::{load_and_validate_config, RuntimeBuilder};
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "info";
const DEFAULT_PROGRAM_NAME: &str = "prehandler";

/// argv[0], or a fixed name when the platform passes no arguments at all.
fn program_name(args: &[String]) -> &str {
    args.first().map(String::as_str).unwrap_or(DEFAULT_PROGRAM_NAME)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        let program = program_name(&args);
        eprintln!("Usage: {} <pipeline.yaml|pipeline.toml>", program);
        eprintln!("Example: {} configs/preload.yaml", program);
        std::process::exit(1);
    }

    let config_file = &args[1];
    let config = load_and_validate_config(config_file)?;
    let pipeline = RuntimeBuilder::from_config(&config)?;

    eprintln!("📋 Configuration: {}", config_file);
    eprintln!("🔧 Pipeline: {} ({} steps)", pipeline.name(), pipeline.len());

    let start_time = Instant::now();
    let results = pipeline.run().await;
    let execution_time = start_time.elapsed();

    println!("{}", serde_json::to_string_pretty(&results.to_json())?);

    eprintln!("⏱️  Execution Time: {:?}", execution_time);
    if results.has_errors() {
        eprintln!("⚠️  Failed steps:");
        for (assign, error) in results.errors() {
            eprintln!("   • {}: {}", assign, error);
        }
    } else {
        eprintln!("✅ All {} steps succeeded", results.len());
    }

    Ok(())
}
