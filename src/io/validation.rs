use regex::Regex;
use std::sync::LazyLock;

use crate::zone::error::ZoneError;

static LABEL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    // Start and end with alnum/underscore, hyphens allowed in the middle
    Regex::new(r"^[a-zA-Z0-9_](?:[a-zA-Z0-9_-]{0,61}[a-zA-Z0-9_])?$").unwrap()
});

const MAX_LABEL_LENGTH: usize = 63;
const MAX_DOMAIN_LENGTH: usize = 253;

fn invalid_domain(domain: &str, reason: impl Into<String>) -> ZoneError {
    ZoneError::InvalidDomain {
        domain: domain.to_string(),
        reason: reason.into(),
    }
}

/// Checks that a domain suffix is structurally usable in an FQDN.
///
/// A single trailing dot is stripped since the FQDN builder appends its own.
pub fn validate_domain(input: &str) -> Result<String, ZoneError> {
    let input = input.trim();
    let domain = input.strip_suffix('.').unwrap_or(input);

    if domain.is_empty() {
        return Err(invalid_domain(input, "domain must not be empty"));
    }

    if domain.len() > MAX_DOMAIN_LENGTH {
        return Err(invalid_domain(
            input,
            format!("exceeds maximum length of {MAX_DOMAIN_LENGTH} characters"),
        ));
    }

    for label in domain.split('.') {
        if label.len() > MAX_LABEL_LENGTH {
            return Err(invalid_domain(
                input,
                format!("label '{label}' exceeds maximum length of {MAX_LABEL_LENGTH} characters"),
            ));
        }
        if !LABEL_REGEX.is_match(label) {
            return Err(invalid_domain(input, format!("invalid label '{label}'")));
        }
    }

    Ok(domain.to_string())
}

/// Parses a prefix length. Any non-negative integer is accepted, range
/// handling is left to the mappers.
pub fn parse_prefix(input: &str) -> Result<u32, ZoneError> {
    input
        .trim()
        .parse::<u32>()
        .map_err(|_| ZoneError::InvalidPrefix {
            input: input.trim().to_string(),
        })
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn valid_domains() {
        let valid_domains = [
            "example.com",
            "sub.example.com",
            "lan",
            "home.arpa",
            "a-b.example.co.uk",
            "_internal.example.com",
            "1a.example.com",
        ];
        for domain in valid_domains {
            assert_eq!(validate_domain(domain).unwrap(), domain);
        }
    }

    #[test]
    fn trailing_dot_and_whitespace_are_stripped() {
        assert_eq!(validate_domain(" example.com. \n").unwrap(), "example.com");
    }

    #[test]
    fn invalid_domains() {
        let invalid_domains = [
            "",
            ".",
            "example..com",
            "-example.com",
            "example-.com",
            "exa mple.com",
            "example.com..",
            ".example.com",
        ];
        for domain in invalid_domains {
            assert!(
                validate_domain(domain).is_err(),
                "expected '{domain}' to be rejected"
            );
        }
    }

    #[test]
    fn overlong_label_is_rejected() {
        let domain = format!("{}.com", "a".repeat(64));
        let err = validate_domain(&domain).unwrap_err();
        assert!(err.to_string().contains("exceeds maximum length of 63"));
    }

    #[test]
    fn overlong_domain_is_rejected() {
        let domain = vec!["abcdefghi"; 26].join(".");
        assert!(domain.len() > MAX_DOMAIN_LENGTH);
        assert!(validate_domain(&domain).is_err());
    }

    #[test]
    fn prefixes() {
        assert_eq!(parse_prefix("24").unwrap(), 24);
        assert_eq!(parse_prefix(" 64\n").unwrap(), 64);
        assert_eq!(parse_prefix("200").unwrap(), 200);
    }

    #[test]
    fn bad_prefixes() {
        for input in ["", "-8", "twenty", "24.5"] {
            assert_eq!(
                parse_prefix(input),
                Err(ZoneError::InvalidPrefix {
                    input: input.to_string()
                })
            );
        }
    }
}
