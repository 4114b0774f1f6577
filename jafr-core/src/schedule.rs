//! Adding a meeting to the user's own store.

use std::io::{BufRead, Write};
use std::sync::LazyLock;

use regex::Regex;

use crate::console::Console;
use crate::error::JafrResult;
use crate::record::{Meeting, OriginTag};
use crate::store::{Entry, Store};

static DATE_INPUT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(0[1-9]|[12][0-9]|3[01])/(0[1-9]|1[0-2])/\d{2}$").expect("valid date pattern")
});

static TIME_INPUT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{2}:\d{2}$").expect("valid time pattern"));

const INVALID_INPUT: &str = "Invalid input. Please try again.";

/// `DD/MM/YY` with a plausible day and month. Day/month combinations are not checked.
pub fn is_valid_date(input: &str) -> bool {
    DATE_INPUT.is_match(input)
}

/// Zero-padded `HH:MM`.
pub fn is_valid_time(input: &str) -> bool {
    TIME_INPUT.is_match(input)
}

/// Append `meeting` tagged "added by you" after a blank separator line.
/// Returns the store index of the new meeting.
pub fn add(store: &mut Store, meeting: &Meeting) -> usize {
    store.push(Entry::plain(""));
    store.push(Entry::tagged(OriginTag::AddedByYou, meeting.to_string()))
}

/// Interactive flow: prompt for description, date and time, then save.
/// Returns the new meeting's index so the caller can offer to share it.
pub fn run<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    store: &mut Store,
) -> JafrResult<usize> {
    let mut description = console.ask("Please enter a meeting description:\n")?;
    while description.trim().is_empty() {
        console.say("Meeting description cannot be empty.")?;
        description = console.read_line()?;
    }

    let date = console.ask("Please enter a date:\n")?;
    let date = if is_valid_date(&date) {
        date
    } else {
        console.say(INVALID_INPUT)?;
        console.retry_until(INVALID_INPUT, |s| is_valid_date(s).then(|| s.to_string()))?
    };

    let time = console.ask("Please enter a time:\n")?;
    let time = if is_valid_time(&time) {
        time
    } else {
        console.say(INVALID_INPUT)?;
        console.retry_until(INVALID_INPUT, |s| is_valid_time(s).then(|| s.to_string()))?
    };

    let meeting = Meeting::new(description.as_str(), time.as_str(), date.as_str());
    let index = add(store, &meeting);
    store.save()?;

    console.say(format!("Ok, I have added {description} on {date} at {time}."))?;
    Ok(index)
}

/// Ask whether to share what was just added. Only `y`/`Y` counts as yes.
pub fn confirm_share<R: BufRead, W: Write>(console: &mut Console<R, W>) -> JafrResult<bool> {
    let answer = console.ask("Would you like to share this meeting? [y/n]: ")?;
    Ok(answer.trim().eq_ignore_ascii_case("y"))
}
