use colored::{ColoredString, Colorize};
use std::fmt::Display;

const CLEAR_LINE: &str = "\r\x1b[2K";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Info,
    Question,
    Success,
    Warning,
    Error,
}

impl Status {
    fn symbol(self) -> ColoredString {
        match self {
            Self::Info => "~".cyan(),
            Self::Question => "?".green(),
            Self::Success => "+".green(),
            Self::Warning => "!".yellow(),
            Self::Error => "!".red(),
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Builds a status line such as `[+] message`, without the line clearing prefix.
pub fn format_status(status: Status, message: &impl Display) -> String {
    format!("[{status}] {message}")
}

pub fn status(status: Status, message: &impl Display, newline: bool) {
    let lead = if newline { "\n" } else { "" };
    let line = format_status(status, message);

    match status {
        Status::Error => eprintln!("{lead}{CLEAR_LINE}{line}"),
        Status::Question => print!("{lead}{CLEAR_LINE}{line}"),
        _ => println!("{lead}{CLEAR_LINE}{line}"),
    }
}

/// Clears the current line in the terminal
pub fn clear_line() {
    print!("{CLEAR_LINE}");
}

#[doc(hidden)]
#[macro_export]
macro_rules! log_status {
    ($status:ident, $message:expr) => {
        $crate::io::logger::status($crate::io::logger::Status::$status, &$message, false)
    };
    ($status:ident, $message:expr, $newline:expr) => {
        $crate::io::logger::status($crate::io::logger::Status::$status, &$message, $newline)
    };
}

#[macro_export]
macro_rules! log_info {
    ($($arg:expr),+) => { $crate::log_status!(Info, $($arg),+) };
}

#[macro_export]
macro_rules! log_question {
    ($($arg:expr),+) => { $crate::log_status!(Question, $($arg),+) };
}

#[macro_export]
macro_rules! log_success {
    ($($arg:expr),+) => { $crate::log_status!(Success, $($arg),+) };
}

#[macro_export]
macro_rules! log_warn {
    ($($arg:expr),+) => { $crate::log_status!(Warning, $($arg),+) };
}

#[macro_export]
macro_rules! log_error {
    ($($arg:expr),+) => { $crate::log_status!(Error, $($arg),+) };
}
