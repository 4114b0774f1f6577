use std::io::{BufRead, Write};

use jafr_core::JafrResult;
use jafr_core::console::Console;

use crate::session::Session;

/// Point the settings at a new master directory.
///
/// The stores already loaded stay in use until the next run.
pub fn run<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    session: &mut Session,
) -> JafrResult<()> {
    let directory = console.ask("Which directory would you like Jafr to use?\n")?;

    session.settings.master = directory.clone();
    session.settings.save(&session.settings_path)?;

    console.say(format!("Master directory changed to {directory}."))?;
    Ok(())
}
