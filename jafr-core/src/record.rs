//! Task and meeting records and their one-line text form.
//!
//! Parsing is split based rather than a grammar: a task line needs exactly one
//! `Due:` followed by a due date and a status phrase, a meeting line needs
//! exactly one `Scheduled:` followed by exactly two fields (time and date).
//! Lines that don't fit are not records; callers decide whether to skip them
//! silently or report them.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::RecordError;

pub const DUE_SEPARATOR: &str = "Due:";
pub const SCHEDULED_SEPARATOR: &str = "Scheduled:";

/// Prefix of an origin tag line in a store.
pub const TAG_PREFIX: &str = "#####";

const NOT_COMPLETE: &str = "not complete";
const COMPLETE: &str = "complete";

/// `H:MM` or `HH:MM`, nothing else.
static STRICT_TIME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{1,2}:\d{2}$").expect("valid time pattern"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatus {
    NotComplete,
    Complete,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::NotComplete => NOT_COMPLETE,
            TaskStatus::Complete => COMPLETE,
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A to-do item: `- <description> Due: <DD/MM/YY> <status> [note]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub description: String,
    /// Due date exactly as written in the line (normally `DD/MM/YY`)
    pub due_date: String,
    pub status: TaskStatus,
    /// Whatever follows the status phrase, e.g. `(urgent)`. Usually empty.
    pub note: String,
}

impl Task {
    pub fn new(description: impl Into<String>, due_date: impl Into<String>) -> Self {
        Task {
            description: description.into(),
            due_date: due_date.into(),
            status: TaskStatus::NotComplete,
            note: String::new(),
        }
    }

    pub fn parse(line: &str) -> Result<Self, RecordError> {
        let (before, after) = split_on_single(line.trim_end(), DUE_SEPARATOR)?;

        let after = after.trim_start();
        let (due_date, rest) = after
            .split_once(char::is_whitespace)
            .unwrap_or((after, ""));

        // "not complete" contains "complete", so it has to be checked first
        let (status, phrase) = if rest.contains(NOT_COMPLETE) {
            (TaskStatus::NotComplete, NOT_COMPLETE)
        } else if rest.contains(COMPLETE) {
            (TaskStatus::Complete, COMPLETE)
        } else {
            return Err(RecordError::MissingStatus);
        };
        let note = rest.split_once(phrase).map_or("", |(_, note)| note.trim());

        Ok(Task {
            description: clean_description(before),
            due_date: due_date.to_string(),
            status,
            note: note.to_string(),
        })
    }

    pub fn is_complete(&self) -> bool {
        self.status == TaskStatus::Complete
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "- {} {} {} {}",
            self.description, DUE_SEPARATOR, self.due_date, self.status
        )?;
        if !self.note.is_empty() {
            write!(f, " {}", self.note)?;
        }
        Ok(())
    }
}

/// A meeting: `- <description> Scheduled: <HH:MM> <DD/MM/YY>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Meeting {
    pub description: String,
    pub time: String,
    pub date: String,
}

impl Meeting {
    pub fn new(
        description: impl Into<String>,
        time: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Meeting {
            description: description.into(),
            time: time.into(),
            date: date.into(),
        }
    }

    pub fn parse(line: &str) -> Result<Self, RecordError> {
        let (before, after) = split_on_single(line.trim_end(), SCHEDULED_SEPARATOR)?;

        let fields: Vec<&str> = after.split_whitespace().collect();
        let [time, date] = fields.as_slice() else {
            return Err(RecordError::FieldCount(fields.len()));
        };

        Ok(Meeting {
            description: clean_description(before),
            time: time.to_string(),
            date: date.to_string(),
        })
    }

    /// Whether the time field is a plain clock time like `9:30` or `14:00`.
    pub fn has_strict_time(&self) -> bool {
        STRICT_TIME.is_match(&self.time)
    }
}

impl fmt::Display for Meeting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "- {} {} {} {}",
            self.description, SCHEDULED_SEPARATOR, self.time, self.date
        )
    }
}

/// How a meeting ended up in a store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OriginTag {
    AddedByYou,
    SharedBy(String),
}

impl OriginTag {
    /// Recognise `##### added by you` or `##### shared by <name>`. Any other
    /// line, including other `#####` headings, is not a tag.
    pub fn parse(line: &str) -> Option<Self> {
        let text = line.strip_prefix(TAG_PREFIX)?.strip_prefix(' ')?.trim_end();

        if text == "added by you" {
            return Some(OriginTag::AddedByYou);
        }
        let name = text.strip_prefix("shared by ")?.trim();
        if name.is_empty() {
            return None;
        }
        Some(OriginTag::SharedBy(name.to_string()))
    }
}

impl fmt::Display for OriginTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OriginTag::AddedByYou => write!(f, "{TAG_PREFIX} added by you"),
            OriginTag::SharedBy(name) => write!(f, "{TAG_PREFIX} shared by {name}"),
        }
    }
}

/// An origin tag together with the line it was read from. The line is written
/// back untouched, so a rewrite never changes how a tag was spelled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagLine {
    pub tag: OriginTag,
    raw: String,
}

impl TagLine {
    pub fn parse(line: &str) -> Option<Self> {
        Some(TagLine {
            tag: OriginTag::parse(line)?,
            raw: line.to_string(),
        })
    }
}

impl From<OriginTag> for TagLine {
    fn from(tag: OriginTag) -> Self {
        let raw = tag.to_string();
        TagLine { tag, raw }
    }
}

impl fmt::Display for TagLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Split `line` around `separator`, which must occur exactly once.
fn split_on_single<'a>(
    line: &'a str,
    separator: &'static str,
) -> Result<(&'a str, &'a str), RecordError> {
    let (before, after) = line
        .split_once(separator)
        .ok_or(RecordError::MissingSeparator(separator))?;

    if after.contains(separator) {
        return Err(RecordError::RepeatedSeparator(separator));
    }
    Ok((before, after))
}

/// Drop the list marker and surrounding blanks from the text before a separator.
pub(crate) fn clean_description(text: &str) -> String {
    let text = text.trim_matches(|c| c == '-' || c == ' ');
    text.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_line_round_trips() {
        for line in [
            "- Pay rent Due: 15/03/24 not complete",
            "- Submit report Due: 01/01/25 complete",
            "- Call the bank about card Due: 31/12/24 not complete",
        ] {
            let task = Task::parse(line).unwrap();
            assert_eq!(task.to_string(), line);
        }
    }

    #[test]
    fn task_fields() {
        let task = Task::parse("- Pay rent Due: 15/03/24 not complete\n").unwrap();
        assert_eq!(task.description, "Pay rent");
        assert_eq!(task.due_date, "15/03/24");
        assert_eq!(task.status, TaskStatus::NotComplete);
        assert!(!task.is_complete());

        let done = Task::parse("- Pay rent Due: 15/03/24 complete").unwrap();
        assert!(done.is_complete());
    }

    #[test]
    fn task_without_due_is_not_a_task() {
        assert_eq!(
            Task::parse("- Pay rent not complete"),
            Err(RecordError::MissingSeparator(DUE_SEPARATOR))
        );
        assert_eq!(
            Task::parse("# Tasks"),
            Err(RecordError::MissingSeparator(DUE_SEPARATOR))
        );
    }

    #[test]
    fn task_with_two_due_fields_is_rejected() {
        assert_eq!(
            Task::parse("- a Due: 01/01/24 Due: 02/01/24 not complete"),
            Err(RecordError::RepeatedSeparator(DUE_SEPARATOR))
        );
    }

    #[test]
    fn task_status_must_follow_the_date() {
        assert_eq!(
            Task::parse("- not complete thing Due: 01/01/24"),
            Err(RecordError::MissingStatus)
        );
    }

    #[test]
    fn meeting_fields() {
        let meeting = Meeting::parse("- Standup Scheduled: 09:30 15/03/24").unwrap();
        assert_eq!(meeting, Meeting::new("Standup", "09:30", "15/03/24"));
        assert!(meeting.has_strict_time());
        assert_eq!(meeting.to_string(), "- Standup Scheduled: 09:30 15/03/24");
    }

    #[test]
    fn meeting_needs_exactly_two_fields() {
        assert_eq!(
            Meeting::parse("- Standup Scheduled: 09:30"),
            Err(RecordError::FieldCount(1))
        );
        assert_eq!(
            Meeting::parse("- Standup Scheduled: 09:30 15/03/24 room 4"),
            Err(RecordError::FieldCount(4))
        );
        assert_eq!(
            Meeting::parse("- Standup 09:30 15/03/24"),
            Err(RecordError::MissingSeparator(SCHEDULED_SEPARATOR))
        );
    }

    #[test]
    fn strict_time() {
        assert!(Meeting::new("a", "9:05", "15/03/24").has_strict_time());
        assert!(!Meeting::new("a", "9am", "15/03/24").has_strict_time());
        assert!(!Meeting::new("a", "123:00", "15/03/24").has_strict_time());
        assert!(!Meeting::new("a", "09:301", "15/03/24").has_strict_time());
    }

    #[test]
    fn text_after_the_status_is_kept() {
        let line = "- x Due: 15/03/24 not complete (urgent)";
        let task = Task::parse(line).unwrap();

        assert_eq!(task.status, TaskStatus::NotComplete);
        assert_eq!(task.note, "(urgent)");
        assert_eq!(task.to_string(), line);
    }

    #[test]
    fn origin_tags() {
        assert_eq!(
            OriginTag::parse("##### added by you"),
            Some(OriginTag::AddedByYou)
        );
        assert_eq!(
            OriginTag::parse("##### shared by Alice"),
            Some(OriginTag::SharedBy("Alice".into()))
        );
        assert_eq!(OriginTag::parse("- Standup Scheduled:"), None);

        let bob = OriginTag::SharedBy("Bob".into());
        assert_eq!(bob.to_string(), "##### shared by Bob");
        assert_eq!(OriginTag::AddedByYou.to_string(), "##### added by you");
    }

    #[test]
    fn headings_are_not_origin_tags() {
        for line in [
            "##### Week 12 agenda",
            "###### Week 12",
            "#####shared by Bob",
            "##### shared by ",
            "##### added by you later",
            " ##### added by you",
        ] {
            assert_eq!(OriginTag::parse(line), None, "{line:?}");
        }
    }

    #[test]
    fn tag_line_keeps_its_spelling() {
        let tag = TagLine::parse("##### shared by  Bob ").unwrap();
        assert_eq!(tag.tag, OriginTag::SharedBy("Bob".into()));
        assert_eq!(tag.to_string(), "##### shared by  Bob ");

        let added = TagLine::from(OriginTag::AddedByYou);
        assert_eq!(added.to_string(), "##### added by you");
        assert_eq!(TagLine::parse("##### added by you"), Some(added));
    }
}
