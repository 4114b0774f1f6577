use std::io::{BufRead, Write};

use jafr_core::JafrResult;
use jafr_core::console::Console;
use jafr_core::sharing;

use crate::session::Session;

pub fn task<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    session: &mut Session,
) -> JafrResult<()> {
    sharing::share_task(console, &session.tasks, &session.registry, &session.user)?;
    Ok(())
}

pub fn meeting<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    session: &mut Session,
) -> JafrResult<()> {
    sharing::share_meeting(
        console,
        &session.meetings,
        &session.registry,
        &session.user,
        None,
    )?;
    Ok(())
}
