//! Login gate and password change
//!
//! The password check is a plaintext comparison against the first stored
//! entry. It is a convenience gate, not a security boundary.

use anyhow::Result;
use chrono::Local;
use std::io::{BufRead, Write};

use crate::console::{messages, Console};

const LOGO: &str = r" ____    __    _  _  ____   ___    ___   _  _
(  _ \  /__\  ( \/ )(  _ \ / __ \ / __ \ ( )/ )
 )(_) )/(__)\  \  /  ) _ <( (__) | (__) ) )  (
(____/(__)(__) (__) (____/ \____/ \____/ (_)\_)";

/// Banner printed after a successful login
pub fn welcome_banner() -> String {
    let rule = "_".repeat(42);
    format!("\nWelcome to Daybook\n{}\n{}\n{}", rule, LOGO, rule)
}

/// Today's date in full-date format, e.g. `Today is Monday, 21 October 2019`
pub fn today_line() -> String {
    format!("Today is {}", Local::now().format("%A, %-d %B %Y"))
}

/// Prompt until the input matches the first stored password. No lockout,
/// no retry limit.
pub fn gate<R: BufRead, W: Write, E: Write>(
    console: &mut Console<R, W, E>,
    passwords: &[String],
) -> Result<()> {
    console.show(messages::password_prompt())?;
    let current = passwords.first().map(String::as_str).unwrap_or_default();

    loop {
        let input = console.read_command()?;
        if input == current {
            console.show(welcome_banner())?;
            console.show(today_line())?;
            return Ok(());
        }
        console.show(messages::incorrect_password())?;
    }
}

/// Verify the current password, then replace it. Returns whether the
/// password list was changed.
pub fn change_password<R: BufRead, W: Write, E: Write>(
    console: &mut Console<R, W, E>,
    passwords: &mut [String],
) -> Result<bool> {
    console.show("Input your current password:")?;
    let current = console.read_command()?;
    if passwords.first() != Some(&current) {
        console.show("Incorrect password, change aborted.")?;
        return Ok(false);
    }

    console.show("Input your new password:")?;
    let new_password = console.read_command()?;
    if new_password.is_empty() {
        console.show("Password cannot be empty, change aborted.")?;
        return Ok(false);
    }

    passwords[0] = new_password;
    console.show("Password changed.")?;
    Ok(true)
}
