use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;

use super::{render::DEFAULT_BIND_DIR, validation};
use crate::log_question;

/// Command-line arguments for the program
#[derive(Parser, Debug)]
#[command(
    name = "ptrconv",
    author = "Alex Ogden",
    version = env!("CARGO_PKG_VERSION"),
    about = "Converts A and AAAA records into PTR records and BIND reverse zone stanzas",
)]
pub struct CommandArgs {
    /// Read records from this file instead of standard input
    #[arg(short, long, env = "PTRCONV_INPUT")]
    pub input: Option<PathBuf>,

    /// Domain name appended to every hostname. Prompted for when absent
    #[arg(short, long, value_parser = validation::validate_domain, env = "PTRCONV_DOMAIN")]
    pub domain: Option<String>,

    /// Prefix length of the IPv4 reverse zones, rounded down to an octet boundary. Prompted for when absent
    #[arg(short = '4', long, value_parser = validation::parse_prefix, env = "PTRCONV_IPV4_PREFIX")]
    pub ipv4_prefix: Option<u32>,

    /// Prefix length of the IPv6 reverse zones, rounded down to a nibble boundary. Prompted for when absent
    #[arg(short = '6', long, value_parser = validation::parse_prefix, env = "PTRCONV_IPV6_PREFIX")]
    pub ipv6_prefix: Option<u32>,

    /// Directory holding the zone files referenced in the BIND configuration
    #[arg(short, long, default_value = DEFAULT_BIND_DIR, env = "PTRCONV_BIND_DIR")]
    pub bind_dir: String,

    /// Path of output file to write JSON results to. Extension is optional.
    #[arg(long, env = "PTRCONV_JSON_OUTPUT")]
    pub json: Option<String>,

    /// Print extra information
    #[arg(short, long, default_value_t = false, env = "PTRCONV_VERBOSE")]
    pub verbose: bool,

    /// Don't show the welcome banner
    #[arg(long, env = "PTRCONV_NO_WELCOME")]
    pub no_welcome: bool,

    /// Don't colorize the output
    #[arg(long, env = "PTRCONV_NO_COLOR")]
    pub no_color: bool,
}

/// Retrieves the parsed command-line arguments
pub fn get_parsed_args() -> CommandArgs {
    CommandArgs::parse()
}

/// Prints the welcome banner
pub fn print_banner() {
    let width = 48;
    println!("\n{}", "=".repeat(width).cyan());
    println!(
        "{}  {}",
        "PTRCONV".cyan().bold(),
        env!("CARGO_PKG_VERSION").bold().italic()
    );
    println!("{}\n", "=".repeat(width).cyan());
}

pub fn print_input_hint(from_file: bool) {
    if !from_file {
        log_question!(format!(
            "Provide A and AAAA records to be converted, press {} on a new line to submit:\n\n",
            "'CTRL+D'".bright_black()
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = CommandArgs::try_parse_from(["ptrconv"]).unwrap();
        assert!(args.input.is_none());
        assert!(args.domain.is_none());
        assert!(args.ipv4_prefix.is_none());
        assert!(args.ipv6_prefix.is_none());
        assert_eq!(args.bind_dir, DEFAULT_BIND_DIR);
        assert!(!args.verbose);
    }

    #[test]
    fn all_flags() {
        let args = CommandArgs::try_parse_from([
            "ptrconv",
            "-i",
            "zone.txt",
            "-d",
            "example.com.",
            "-4",
            "16",
            "-6",
            "48",
            "-b",
            "/var/named",
            "--json",
            "out",
            "--no-welcome",
            "--no-color",
        ])
        .unwrap();
        assert_eq!(args.input, Some(PathBuf::from("zone.txt")));
        assert_eq!(args.domain.as_deref(), Some("example.com"));
        assert_eq!(args.ipv4_prefix, Some(16));
        assert_eq!(args.ipv6_prefix, Some(48));
        assert_eq!(args.bind_dir, "/var/named");
        assert_eq!(args.json.as_deref(), Some("out"));
        assert!(args.no_welcome && args.no_color);
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert!(CommandArgs::try_parse_from(["ptrconv", "-4", "abc"]).is_err());
        assert!(CommandArgs::try_parse_from(["ptrconv", "-d", "bad domain"]).is_err());
    }

    #[test]
    fn command_is_well_formed() {
        use clap::CommandFactory;
        CommandArgs::command().debug_assert();
    }
}
