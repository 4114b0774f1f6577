use std::io::{BufRead, Write};

use jafr_core::JafrResult;
use jafr_core::console::Console;
use jafr_core::{schedule, sharing};

use crate::session::Session;

/// Add a meeting, then offer to share it straight away.
pub fn run<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    session: &mut Session,
) -> JafrResult<()> {
    let index = schedule::run(console, &mut session.meetings)?;

    if schedule::confirm_share(console)? {
        sharing::share_meeting(
            console,
            &session.meetings,
            &session.registry,
            &session.user,
            Some(index),
        )?;
    }

    Ok(())
}
