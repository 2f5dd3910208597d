//
//  antarctica-cli
//  interactive/prompt.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Interactive Prompts
//!
//! Thin wrappers over `dialoguer` for the few questions the CLI asks:
//! the login name, the password, and confirmation before deleting.
//!
//! # Example
//!
//! ```no_run
//! use antarctica_cli::interactive::prompt::{prompt_input, prompt_password};
//!
//! let login = prompt_input("Login").unwrap();
//! let password = prompt_password("Password").unwrap();
//! ```

use anyhow::Result;
use dialoguer::{Confirm, Input, Password};

/// Asks for a non-empty line of text.
pub fn prompt_input(message: &str) -> Result<String> {
    let input: String = Input::new().with_prompt(message).interact_text()?;
    Ok(input)
}

/// Asks for a password without echoing it.
pub fn prompt_password(message: &str) -> Result<String> {
    let password = Password::new().with_prompt(message).interact()?;
    Ok(password)
}

/// Asks a yes/no question; the answer defaults to no.
///
/// # Notes
///
/// - Returns `Err` when stdin is not a terminal, so scripted callers
///   should pass `--yes` instead of relying on the prompt
pub fn prompt_confirm(message: &str) -> Result<bool> {
    let confirmed = Confirm::new()
        .with_prompt(message)
        .default(false)
        .interact()?;
    Ok(confirmed)
}
