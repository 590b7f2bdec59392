use std::collections::HashSet;
use strum_macros::{Display, EnumString};

const NAME_INDEX: usize = 0;
const TYPE_INDEX: usize = 2;
const ADDRESS_INDEX: usize = 3;
pub const MIN_TOKENS: usize = 4;

const COMMENT_PREFIX: char = ';';

/// Address records this tool knows how to reverse.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
pub enum RecordKind {
    A,
    AAAA,
}

/// One line of zone text split on whitespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord {
    tokens: Vec<String>,
}

/// A record known to be of kind A or AAAA, with the four leading fields present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypedRecord {
    pub kind: RecordKind,
    record: RawRecord,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressHostnamePair {
    pub address: String,
    pub hostname: String,
}

impl RawRecord {
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tokens: tokens.into_iter().map(Into::into).collect(),
        }
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn record_type(&self) -> Option<&str> {
        self.tokens.get(TYPE_INDEX).map(String::as_str)
    }

    pub fn line(&self) -> String {
        self.tokens.join(" ")
    }
}

impl TypedRecord {
    /// Only the classifier builds these, after checking the token count.
    pub(crate) const fn new(kind: RecordKind, record: RawRecord) -> Self {
        Self { kind, record }
    }

    pub fn name(&self) -> &str {
        &self.record.tokens[NAME_INDEX]
    }

    pub fn address(&self) -> &str {
        &self.record.tokens[ADDRESS_INDEX]
    }

    #[cfg(test)]
    pub const fn raw(&self) -> &RawRecord {
        &self.record
    }

    pub fn to_pair(&self) -> AddressHostnamePair {
        AddressHostnamePair::new(self.address(), self.name())
    }
}

impl AddressHostnamePair {
    pub fn new(address: impl Into<String>, hostname: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            hostname: hostname.into(),
        }
    }
}

/// Turns raw zone text into records.
///
/// Empty lines and lines starting with `;` are skipped, and a line identical to
/// one already seen is dropped. Surviving lines keep their input order.
pub fn parse_records(text: &str) -> Vec<RawRecord> {
    let mut seen: HashSet<&str> = HashSet::new();

    text.lines()
        .filter(|line| !line.is_empty())
        .filter(|line| !line.starts_with(COMMENT_PREFIX))
        .filter(|line| seen.insert(*line))
        .map(|line| RawRecord::new(line.split_whitespace()))
        .collect()
}
