use anyhow::Result;

use crate::{io::logger, log_warn};

/// Ends the process with `exit_code` on Ctrl-C.
///
/// Reads from the terminal cannot be cancelled, so the handler exits directly
/// instead of raising a flag for the blocked reader to poll.
pub fn exit_on_interrupt(exit_code: i32) -> Result<()> {
    ctrlc::set_handler(move || {
        logger::clear_line();
        log_warn!("Interrupted by user", true);
        std::process::exit(exit_code);
    })?;
    Ok(())
}
