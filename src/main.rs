// MongoDB Anonymizer - Anonymized MongoDB to MongoDB copy
// Copyright (c) 2025 MongoDB Anonymizer Contributors
// Licensed under the MIT License

use clap::Parser;
use mongodb_anonymizer::cli::Cli;
use std::process;

#[tokio::main]
async fn main() {
    // A missing .env file is not an error
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let exit_code = match cli.execute().await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Command execution failed");
            eprintln!("Error: {e:#}");
            5
        }
    };

    process::exit(exit_code);
}
