mod convert;
mod io;
mod zone;

use anyhow::Result;
use std::process::ExitCode;

use convert::{RunOutcome, Settings};
use io::{
    cli::{self, CommandArgs},
    input::{self, Prompter},
    interrupt,
    json::ConversionOutput,
    render,
};
use zone::error::{InputError, ZoneError};

const EXIT_SUCCESS: u8 = 0;
const EXIT_FAILURE: u8 = 1;
const EXIT_INTERRUPTED: u8 = 130;

fn main() -> ExitCode {
    let args = cli::get_parsed_args();

    if args.no_color {
        colored::control::set_override(false);
    }

    let result = execute(&args);
    let status = exit_status(&result);

    if let Err(err) = result {
        match status {
            EXIT_INTERRUPTED => log_warn!("Interrupted by user", true),
            EXIT_SUCCESS => log_warn!(err, true),
            _ => log_error!(format!("{err:#}"), true),
        }
    }

    ExitCode::from(status)
}

/// Interruption and running out of input are exits, not failures.
fn exit_status(result: &Result<()>) -> u8 {
    let Err(err) = result else {
        return EXIT_SUCCESS;
    };

    match err.downcast_ref::<ZoneError>() {
        Some(ZoneError::Input(InputError::Interrupted)) => EXIT_INTERRUPTED,
        Some(ZoneError::Input(InputError::EndOfInput)) => EXIT_SUCCESS,
        _ => EXIT_FAILURE,
    }
}

fn execute(args: &CommandArgs) -> Result<()> {
    interrupt::exit_on_interrupt(i32::from(EXIT_INTERRUPTED))?;

    if !args.no_welcome {
        cli::print_banner();
    }

    cli::print_input_hint(args.input.is_some());
    let records_text = match &args.input {
        Some(path) => input::read_records_from_file(path),
        None => input::read_records(&mut std::io::stdin().lock()),
    }
    .map_err(ZoneError::from)?;

    let settings = Settings {
        domain: args.domain.clone(),
        ipv4_prefix: args.ipv4_prefix,
        ipv6_prefix: args.ipv6_prefix,
        verbose: args.verbose,
    };

    let mut prompter = Prompter::new(std::io::stdin().lock(), std::io::stdout());
    match convert::run(&records_text, &settings, &mut prompter)? {
        RunOutcome::Completed(conversion) => {
            if conversion.ipv4.is_empty() && conversion.ipv6.is_empty() {
                log_warn!("No A or AAAA records found in the input");
            }
            log_success!(format!(
                "Built {} PTR records in {} reverse zones",
                conversion.ipv4.record_count() + conversion.ipv6.record_count(),
                conversion.ipv4.len() + conversion.ipv6.len()
            ));
            print!(
                "{}",
                render::render_report(&conversion.ipv4, &conversion.ipv6, &args.bind_dir)
            );
            if let Some(file) = &args.json {
                ConversionOutput::from(&conversion).write_to_file(file)?;
            }
        }
        RunOutcome::EndOfInput => {
            log_warn!("Input ended before all answers were given, exiting", true);
        }
    }

    Ok(())
}
