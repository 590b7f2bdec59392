use thiserror::Error;

/// Ways a blocking read from the user can end without producing a value.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum InputError {
    #[error("Interrupted by user")]
    Interrupted,
    #[error("End of input reached")]
    EndOfInput,
    #[error("Input file not found: {0}")]
    FileNotFound(String),
    #[error("Input Error: {0}")]
    Io(String),
}

#[allow(clippy::module_name_repetitions)]
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum ZoneError {
    #[error("Malformed record, expected at least 4 fields: '{line}'")]
    MalformedRecord { line: String },
    #[error("Invalid selection '{input}', expected an index below {candidates}")]
    InvalidSelection { input: String, candidates: usize },
    #[error("Invalid prefix length: '{input}'")]
    InvalidPrefix { input: String },
    #[error("Invalid domain '{domain}': {reason}")]
    InvalidDomain { domain: String, reason: String },
    #[error("Invalid {kind} address: '{address}'")]
    InvalidAddress { kind: String, address: String },
    #[error("Internal Error: {0}")]
    InternalInvariantViolation(String),
    #[error(transparent)]
    Input(#[from] InputError),
}

impl From<std::io::Error> for InputError {
    fn from(error: std::io::Error) -> Self {
        if error.kind() == std::io::ErrorKind::Interrupted {
            Self::Interrupted
        } else {
            Self::Io(error.to_string())
        }
    }
}
