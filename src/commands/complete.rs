use std::io::{BufRead, Write};

use jafr_core::JafrResult;
use jafr_core::completion;
use jafr_core::console::Console;

use crate::session::Session;

pub fn run<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    session: &mut Session,
) -> JafrResult<()> {
    completion::run(console, &mut session.tasks)
}
