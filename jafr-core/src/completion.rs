//! Marking tasks as complete.

use std::io::{BufRead, Write};

use crate::console::Console;
use crate::error::JafrResult;
use crate::record::{Task, TaskStatus};
use crate::store::Store;

/// A task that can be offered for completion, with its position in the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub index: usize,
    pub task: Task,
}

/// Incomplete tasks with a readable `Due:` field, in store order.
///
/// Incomplete lines without a due date are left out of the list entirely.
pub fn candidates(store: &Store) -> Vec<Candidate> {
    store
        .entries()
        .iter()
        .enumerate()
        .filter(|(_, entry)| entry.line.contains(TaskStatus::NotComplete.as_str()))
        .filter_map(|(index, entry)| entry.task().ok().map(|task| Candidate { index, task }))
        .collect()
}

/// Parse whitespace-separated 1-based choices out of `count` options.
///
/// Any non-number or out-of-range value rejects the whole selection.
pub fn parse_selection(input: &str, count: usize) -> Option<Vec<usize>> {
    input
        .split_whitespace()
        .map(|token| {
            token
                .parse::<usize>()
                .ok()
                .filter(|n| (1..=count).contains(n))
        })
        .collect()
}

/// Flip the first "not complete" in a line to "complete".
/// Lines that are already complete come back unchanged.
pub fn mark_complete(line: &str) -> String {
    line.replacen(
        TaskStatus::NotComplete.as_str(),
        TaskStatus::Complete.as_str(),
        1,
    )
}

/// Mark the chosen candidates (1-based) complete in memory.
pub fn apply(store: &mut Store, candidates: &[Candidate], choices: &[usize]) {
    for &choice in choices {
        let Some(candidate) = choice.checked_sub(1).and_then(|i| candidates.get(i)) else {
            continue;
        };
        if let Some(entry) = store.entry_mut(candidate.index) {
            entry.line = mark_complete(&entry.line);
            log::debug!("Completed task: {}", candidate.task.description);
        }
    }
}

/// Interactive flow: list open tasks, read a valid selection, rewrite the task store.
pub fn run<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    store: &mut Store,
) -> JafrResult<()> {
    let candidates = candidates(store);

    if candidates.is_empty() {
        console.say("No tasks to complete!")?;
        return Ok(());
    }

    console.say("Which task(s) would you like to mark as completed?")?;
    for (n, candidate) in candidates.iter().enumerate() {
        console.say(format!(
            "{}. {} by {}",
            n + 1,
            candidate.task.description,
            candidate.task.due_date
        ))?;
    }

    let choices = console.retry_until("Please enter valid task numbers.", |input| {
        parse_selection(input, candidates.len())
    })?;

    apply(store, &candidates, &choices);
    store.save()?;

    console.say("Marked as complete.")?;
    Ok(())
}
