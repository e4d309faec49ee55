//! Fixed catalog of user-facing status and error strings
//!
//! Pure formatting functions with no side effects. The session layer decides
//! which stream each message goes to: I/O failure and termination messages
//! go to stderr, the rest to stdout.

use std::fmt::Display;

pub fn password_prompt() -> &'static str {
    "Input password to enter Daybook:"
}

pub fn incorrect_password() -> &'static str {
    "Incorrect password, please try again:"
}

pub fn unknown_command() -> &'static str {
    "OOPS!!! I'm sorry, but I don't know what that means :-("
}

/// I/O failure, including the underlying cause text. Error stream.
pub fn io_error(cause: impl Display) -> String {
    format!("An IO error was caught: {}", cause)
}

/// Abrupt end of input. Error stream.
pub fn termination() -> &'static str {
    "System terminating without an input"
}

pub fn incorrect_format() -> &'static str {
    "Please Input in the correct format"
}

pub fn contact_not_found(name: &str) -> String {
    format!("{} is not found in the list.", name)
}

pub fn no_such_index() -> &'static str {
    "There is no such entry number."
}

/// Rejected input that would corrupt the `|`-delimited files
pub fn reserved_character() -> &'static str {
    "Input cannot contain the '|' character"
}

pub fn goodbye() -> &'static str {
    "Bye. Hope to see you again soon!"
}
