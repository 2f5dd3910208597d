//
//  antarctica-cli
//  main.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use antarctica_cli::api::{ApiError, ErrorCode};
use antarctica_cli::cli::{Cli, Commands};
use antarctica_cli::exit_codes;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    init_logging();

    // Parse CLI arguments
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.use_stderr() => {
            let _ = e.print();
            std::process::exit(exit_codes::USAGE);
        }
        Err(e) => e.exit(),
    };

    // Execute command
    let result = run(cli).await;

    // Handle result and exit
    match result {
        Ok(()) => std::process::exit(exit_codes::SUCCESS),
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(exit_code(&e));
        }
    }
}

/// Initialize logging based on environment
fn init_logging() {
    let filter = EnvFilter::try_from_env("ANTARCTICA_DEBUG")
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Maps a failure to its exit code
fn exit_code(error: &anyhow::Error) -> i32 {
    match error.downcast_ref::<ApiError>() {
        Some(ApiError::WrongLogin | ApiError::NotAuthenticated) => exit_codes::AUTH_ERROR,
        Some(e) if e.code() == Some(ErrorCode::InvalidToken) => exit_codes::AUTH_ERROR,
        Some(e) if e.is_not_found() => exit_codes::NOT_FOUND,
        _ => exit_codes::ERROR,
    }
}

/// Main command dispatcher
async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Login(cmd) => cmd.run(&cli.global).await,
        Commands::Logout(cmd) => cmd.run(&cli.global).await,
        Commands::Status(cmd) => cmd.run(&cli.global).await,
        Commands::File(cmd) => cmd.run(&cli.global).await,
        Commands::Pkg(cmd) => cmd.run(&cli.global).await,
        Commands::Repo(cmd) => cmd.run(&cli.global).await,
        Commands::Config(cmd) => cmd.run(&cli.global).await,
        Commands::Completion(cmd) => cmd.run(&cli.global).await,
        Commands::Version => {
            println!("antarctica version {}", antarctica_cli::VERSION);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    fn server_error(code: ErrorCode) -> anyhow::Error {
        anyhow::Error::from(ApiError::Server {
            code,
            text: "failed".to_string(),
        })
    }

    #[test]
    fn test_auth_failures_exit_with_auth_code() {
        assert_eq!(exit_code(&ApiError::WrongLogin.into()), exit_codes::AUTH_ERROR);
        assert_eq!(exit_code(&ApiError::NotAuthenticated.into()), exit_codes::AUTH_ERROR);
        assert_eq!(exit_code(&server_error(ErrorCode::InvalidToken)), exit_codes::AUTH_ERROR);
    }

    #[test]
    fn test_not_found_and_other_failures() {
        assert_eq!(exit_code(&server_error(ErrorCode::NotFound)), exit_codes::NOT_FOUND);
        assert_eq!(exit_code(&server_error(ErrorCode::AlreadyExists)), exit_codes::ERROR);
        assert_eq!(exit_code(&anyhow::anyhow!("Not logged in")), exit_codes::ERROR);
    }

    #[test]
    fn test_context_does_not_hide_the_api_error() {
        let error = Err::<(), _>(server_error(ErrorCode::InvalidToken))
            .context("Failed to list files")
            .unwrap_err();
        assert_eq!(exit_code(&error), exit_codes::AUTH_ERROR);
    }
}
