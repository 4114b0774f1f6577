//! Sharing a task or meeting with other local users.
//!
//! The flow is the same for both record kinds: pick a record, pick target users
//! from the registry, then append a `##### shared by <name>` block to each
//! target's store. A target that can't be reached is reported and skipped; the
//! others still receive the record and nothing is rolled back.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use thiserror::Error;

use crate::console::Console;
use crate::error::JafrResult;
use crate::record::{OriginTag, SCHEDULED_SEPARATOR, TagLine};
use crate::registry::{User, UserRegistry};
use crate::settings::Settings;
use crate::store::{Entry, Store, StoreKind, append_block};

const INVALID_INPUT: &str = "Invalid input. Please try again.";

/// Why a share target was skipped. The message is shown to the sharer as-is.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    #[error("Warning: user-settings.json does not exist for User {0}. Skipping...")]
    NoSettings(String),

    #[error("Warning: User {0} does not have a valid 'master_dir' in their settings. Skipping...")]
    NoMasterDir(String),

    #[error("Warning: Could not deliver to User {user_id}: {reason}. Skipping...")]
    DeliveryFailed { user_id: String, reason: String },
}

/// Result of delivering to one target: the store written, or why it was skipped.
pub type Delivery = Result<PathBuf, SkipReason>;

/// The entry as it should travel: without its "added by you" tag, since that
/// only makes sense to its author. Other tags travel along.
pub fn outgoing(entry: &Entry) -> Entry {
    Entry {
        tags: entry
            .tags
            .iter()
            .filter(|line| line.tag != OriginTag::AddedByYou)
            .cloned()
            .collect(),
        line: entry.line.clone(),
    }
}

/// The block appended to a target's store.
pub fn shared_block(sharer: &str, entry: &Entry) -> String {
    let tag = TagLine::from(OriginTag::SharedBy(sharer.to_string()));
    format!("\n{}\n{}\n", tag, entry.to_block().trim())
}

/// Parse whitespace-separated user ids; every one must be in `valid`.
pub fn parse_targets(input: &str, valid: &[&str]) -> Option<Vec<String>> {
    input
        .split_whitespace()
        .map(|id| valid.contains(&id).then(|| id.to_string()))
        .collect()
}

/// Append `block` to the `kind` store of `user`, found through their settings file.
pub fn deliver(user: &User, kind: StoreKind, block: &str) -> Delivery {
    let settings_path = Settings::path_in(&user.home_dir);
    if !settings_path.is_file() {
        return Err(SkipReason::NoSettings(user.user_id.clone()));
    }

    let settings = Settings::load(&settings_path).map_err(|e| SkipReason::DeliveryFailed {
        user_id: user.user_id.clone(),
        reason: e.to_string(),
    })?;

    let master_dir = settings
        .master_dir()
        .ok_or_else(|| SkipReason::NoMasterDir(user.user_id.clone()))?;

    let path = kind.path_in(&master_dir);
    append_block(&path, block).map_err(|e| SkipReason::DeliveryFailed {
        user_id: user.user_id.clone(),
        reason: e.to_string(),
    })?;

    Ok(path)
}

/// Interactive flow for sharing a task. Tasks are numbered by their line in the store.
pub fn share_task<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    tasks: &Store,
    registry: &UserRegistry,
    sharer: &User,
) -> JafrResult<Vec<Delivery>> {
    console.say("Which task would you like to share?")?;
    for (i, entry) in tasks.entries().iter().enumerate() {
        if let Ok(task) = entry.task() {
            console.say(format!("{}. {} by {}", i + 1, task.description, task.due_date))?;
        }
    }

    let index = pick_index(console, tasks.len())?;
    let entry = outgoing(&tasks.entries()[index]);

    let deliveries = send(console, registry, sharer, StoreKind::Tasks, &entry)?;
    console.say("Task shared.")?;
    Ok(deliveries)
}

/// Interactive flow for sharing a meeting.
///
/// `preselected` is the store index of a meeting the caller just created; it
/// skips the selection prompt.
pub fn share_meeting<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    meetings: &Store,
    registry: &UserRegistry,
    sharer: &User,
    preselected: Option<usize>,
) -> JafrResult<Vec<Delivery>> {
    let index = match preselected.filter(|&i| i < meetings.len()) {
        Some(index) => index,
        None => {
            console.say("Which meeting would you like to share?")?;
            for (i, entry) in meetings.entries().iter().enumerate() {
                match entry.meeting() {
                    Ok(meeting) => console.say(format!(
                        "{}. {} on {} at {}",
                        i + 1,
                        meeting.description,
                        meeting.date,
                        meeting.time
                    ))?,
                    Err(_) if entry.line.contains(SCHEDULED_SEPARATOR) => console.say(format!(
                        "Unexpected format for meeting: {}. Skipping...",
                        entry.line.trim()
                    ))?,
                    Err(_) => {}
                }
            }
            pick_index(console, meetings.len())?
        }
    };
    let entry = outgoing(&meetings.entries()[index]);

    let deliveries = send(console, registry, sharer, StoreKind::Meetings, &entry)?;
    console.say("Meeting shared.")?;
    Ok(deliveries)
}

/// Read a 1-based position in a store of `len` entries; returns the 0-based index.
fn pick_index<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    len: usize,
) -> JafrResult<usize> {
    console.retry_until(INVALID_INPUT, |input| {
        input
            .trim()
            .parse::<usize>()
            .ok()
            .filter(|n| (1..=len).contains(n))
            .map(|n| n - 1)
    })
}

/// Ask for target users and deliver `entry` to each of them.
fn send<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    registry: &UserRegistry,
    sharer: &User,
    kind: StoreKind,
    entry: &Entry,
) -> JafrResult<Vec<Delivery>> {
    console.say("Who would you like to share with?")?;
    let mut valid = Vec::new();
    for user in registry.others(&sharer.user_id) {
        console.say(format!("{} {}", user.user_id, user.username))?;
        valid.push(user.user_id.as_str());
    }

    let targets = console.retry_until(INVALID_INPUT, |input| parse_targets(input, &valid))?;

    let block = shared_block(&sharer.username, entry);
    let mut deliveries = Vec::with_capacity(targets.len());

    for user_id in &targets {
        let Some(user) = registry.by_id(user_id) else {
            continue;
        };

        let delivery = deliver(user, kind, &block);
        match &delivery {
            Ok(path) => log::debug!("Shared with {} via {}", user.username, path.display()),
            Err(reason) => {
                log::warn!("Share target {} skipped: {}", user.user_id, reason);
                console.say(reason)?;
            }
        }
        deliveries.push(delivery);
    }

    Ok(deliveries)
}
