//! Session-start reminders: what is due or scheduled today and soon.

use chrono::NaiveDate;

use crate::date_window::DayWindow;
use crate::error::RecordError;
use crate::record::{Meeting, Task, TaskStatus};
use crate::store::Store;

/// Days after today covered by the "due soon" task section.
pub const TASK_LOOKAHEAD_DAYS: i64 = 3;

/// Days after today covered by the "this week" meeting section.
pub const MEETING_LOOKAHEAD_DAYS: i64 = 7;

/// A meeting line that carries a date of interest but could not be read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedMeeting {
    pub line: String,
    pub error: RecordError,
}

/// The four reminder sections, in display order.
///
/// "Today" and "soon" use disjoint day offsets ({0} versus 1..=N), so a record
/// lands in at most one section of each kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reminders {
    pub tasks_today: Vec<Task>,
    pub tasks_soon: Vec<Task>,
    pub meetings_today: Vec<Meeting>,
    pub meetings_this_week: Vec<Meeting>,
    /// Reported inside the "meetings today" section
    pub malformed_today: Vec<MalformedMeeting>,
    /// Reported inside the "meetings this week" section
    pub malformed_this_week: Vec<MalformedMeeting>,
}

impl Reminders {
    pub fn collect(today: NaiveDate, tasks: &Store, meetings: &Store) -> Self {
        let (meetings_today, malformed_today) =
            scheduled_meetings(meetings, &DayWindow::today(today), true);
        let (meetings_this_week, malformed_this_week) = scheduled_meetings(
            meetings,
            &DayWindow::ahead(today, MEETING_LOOKAHEAD_DAYS),
            false,
        );

        Reminders {
            tasks_today: open_tasks(tasks, &DayWindow::today(today)),
            tasks_soon: open_tasks(tasks, &DayWindow::ahead(today, TASK_LOOKAHEAD_DAYS)),
            meetings_today,
            meetings_this_week,
            malformed_today,
            malformed_this_week,
        }
    }
}

/// Incomplete tasks whose line mentions one of the window's dates.
fn open_tasks(store: &Store, window: &DayWindow) -> Vec<Task> {
    let not_complete = TaskStatus::NotComplete.as_str();
    store
        .entries()
        .iter()
        .filter(|entry| window.matches(&entry.line) && entry.line.contains(not_complete))
        .filter_map(|entry| entry.task().ok())
        .collect()
}

/// Meetings whose line mentions one of the window's dates, plus the lines
/// that mention such a date but aren't valid meetings.
fn scheduled_meetings(
    store: &Store,
    window: &DayWindow,
    require_strict_time: bool,
) -> (Vec<Meeting>, Vec<MalformedMeeting>) {
    let mut found = Vec::new();
    let mut malformed = Vec::new();

    for entry in store.entries() {
        if !window.matches(&entry.line) {
            continue;
        }

        match entry.meeting() {
            Ok(meeting) if require_strict_time && !meeting.has_strict_time() => {
                log::debug!("Ignoring meeting with unusual time: {}", entry.line);
            }
            Ok(meeting) => found.push(meeting),
            Err(error) => {
                let line = entry.line.trim();
                log::warn!("Skipping malformed meeting '{line}': {error}");
                malformed.push(MalformedMeeting {
                    line: line.to_string(),
                    error,
                });
            }
        }
    }

    (found, malformed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::StoreKind;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    fn tasks(text: &str) -> Store {
        Store::from_text(StoreKind::Tasks, "tasks.md", text)
    }

    fn meetings(text: &str) -> Store {
        Store::from_text(StoreKind::Meetings, "meetings.md", text)
    }

    #[test]
    fn tasks_due_today_and_soon() {
        let tasks = tasks(
            "# Tasks\n\
             - Pay rent Due: 15/03/24 not complete\n\
             - Water plants Due: 15/03/24 complete\n\
             - Book flights Due: 18/03/24 not complete\n\
             - Renew passport Due: 19/03/24 not complete\n",
        );
        let reminders = Reminders::collect(today(), &tasks, &meetings(""));

        assert_eq!(
            reminders.tasks_today,
            vec![Task::new("Pay rent", "15/03/24")]
        );
        assert_eq!(
            reminders.tasks_soon,
            vec![Task::new("Book flights", "18/03/24")]
        );
    }

    #[test]
    fn open_task_keeps_its_note() {
        let tasks = tasks(
            "- Call the bank Due: 16/03/24 not complete (urgent)\n\
             - Pay rent Due: 16/03/24 complete (paid early)\n",
        );
        let reminders = Reminders::collect(today(), &tasks, &meetings(""));

        let mut expected = Task::new("Call the bank", "16/03/24");
        expected.note = "(urgent)".into();
        assert_eq!(reminders.tasks_soon, vec![expected]);
    }

    #[test]
    fn meetings_today_need_a_clock_time() {
        let meetings = meetings(
            "- Standup Scheduled: 09:30 15/03/24\n\
             - Offsite Scheduled: morning 15/03/24\n\
             - Review Scheduled: 14:00 16/03/24\n\
             - Retro Scheduled: 16:00 22/03/24\n\
             - Planning Scheduled: 10:00 23/03/24\n",
        );
        let reminders = Reminders::collect(today(), &tasks(""), &meetings);

        assert_eq!(
            reminders.meetings_today,
            vec![Meeting::new("Standup", "09:30", "15/03/24")]
        );
        assert_eq!(
            reminders.meetings_this_week,
            vec![
                Meeting::new("Review", "14:00", "16/03/24"),
                Meeting::new("Retro", "16:00", "22/03/24"),
            ]
        );
    }

    #[test]
    fn malformed_meetings_are_reported_not_listed() {
        let meetings = meetings(
            "- Dentist at 15/03/24 10:00\n\
             - Dinner Scheduled: 19:00\n\
             - Gym 17/03/24\n",
        );
        let reminders = Reminders::collect(today(), &tasks(""), &meetings);

        assert!(reminders.meetings_today.is_empty());
        assert!(reminders.meetings_this_week.is_empty());
        assert_eq!(reminders.malformed_today.len(), 1);
        assert_eq!(
            reminders.malformed_today[0].line,
            "- Dentist at 15/03/24 10:00"
        );
        assert_eq!(reminders.malformed_this_week.len(), 1);
        assert_eq!(reminders.malformed_this_week[0].line, "- Gym 17/03/24");
    }

    #[test]
    fn a_line_mentioning_two_upcoming_dates_is_listed_once() {
        let tasks = tasks("- Move 16/03/24 meeting Due: 17/03/24 not complete\n");
        let reminders = Reminders::collect(today(), &tasks, &meetings(""));
        assert_eq!(reminders.tasks_soon.len(), 1);
    }
}
