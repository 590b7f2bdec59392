use std::io::{BufRead, Write};

use colored::Colorize;

use crate::{
    io::input::Prompter,
    log_info,
    zone::{
        classifier::classify,
        dedup::deduplicate,
        error::{InputError, ZoneError},
        record::parse_records,
        reverse::{DEFAULT_IPV4_PREFIX, DEFAULT_IPV6_PREFIX, map_ipv4, map_ipv6},
        zone_map::ZoneMap,
    },
};

/// Values supplied up front; anything left as `None` is prompted for.
#[derive(Debug, Clone, Default)]
pub struct Settings {
    pub domain: Option<String>,
    pub ipv4_prefix: Option<u32>,
    pub ipv6_prefix: Option<u32>,
    pub verbose: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub domain: String,
    pub ipv4_prefix: u32,
    pub ipv6_prefix: u32,
    pub ipv4: ZoneMap,
    pub ipv6: ZoneMap,
}

#[derive(Debug, PartialEq, Eq)]
pub enum RunOutcome {
    Completed(Conversion),
    /// Input ran out before every answer was given.
    EndOfInput,
}

/// Runs the conversion, turning a premature end of input into an outcome
/// rather than an error.
pub fn run<R: BufRead, W: Write>(
    records_text: &str,
    settings: &Settings,
    prompter: &mut Prompter<R, W>,
) -> Result<RunOutcome, ZoneError> {
    match convert(records_text, settings, prompter) {
        Ok(conversion) => Ok(RunOutcome::Completed(conversion)),
        Err(ZoneError::Input(InputError::EndOfInput)) => Ok(RunOutcome::EndOfInput),
        Err(error) => Err(error),
    }
}

/// Records text in, reverse zones out.
///
/// Duplicates are resolved before the domain and prefixes are asked for, A
/// records first.
pub fn convert<R: BufRead, W: Write>(
    records_text: &str,
    settings: &Settings,
    prompter: &mut Prompter<R, W>,
) -> Result<Conversion, ZoneError> {
    let classified = classify(parse_records(records_text))?;

    if settings.verbose {
        log_info!(format!(
            "Classified {} A and {} AAAA records, skipped {} of {} records",
            classified.a.len().to_string().bold(),
            classified.aaaa.len().to_string().bold(),
            classified.dropped,
            classified.total()
        ));
    }

    let a_pairs = deduplicate(&classified.a, prompter)?;
    let aaaa_pairs = deduplicate(&classified.aaaa, prompter)?;

    if settings.verbose {
        log_info!(format!(
            "{} unique IPv4 and {} unique IPv6 addresses",
            a_pairs.len(),
            aaaa_pairs.len()
        ));
    }

    let domain = match &settings.domain {
        Some(domain) => domain.clone(),
        None => prompter.ask_domain()?,
    };
    let ipv4_prefix = match settings.ipv4_prefix {
        Some(prefix) => prefix,
        None => prompter.ask_prefix("IPv4", DEFAULT_IPV4_PREFIX)?,
    };
    let ipv6_prefix = match settings.ipv6_prefix {
        Some(prefix) => prefix,
        None => prompter.ask_prefix("IPv6", DEFAULT_IPV6_PREFIX)?,
    };

    Ok(Conversion {
        ipv4: map_ipv4(&a_pairs, &domain, ipv4_prefix)?,
        ipv6: map_ipv6(&aaaa_pairs, &domain, ipv6_prefix)?,
        domain,
        ipv4_prefix,
        ipv6_prefix,
    })
}
