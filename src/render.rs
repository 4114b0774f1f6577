//! Terminal rendering for jafr-core types.
//!
//! Colors are only applied when stdout is a terminal, so piped output stays plain.

use jafr_core::reminders::{MalformedMeeting, Reminders};
use owo_colors::{OwoColorize, Stream};

pub trait Render {
    fn render(&self) -> String;
}

impl Render for MalformedMeeting {
    fn render(&self) -> String {
        let text = format!(
            "Warning: The following meeting entry is not formatted correctly: {}",
            self.line
        );
        let styled = text.if_supports_color(Stream::Stdout, |t| t.yellow());
        styled.to_string()
    }
}

impl Render for Reminders {
    fn render(&self) -> String {
        let mut lines = Vec::new();

        lines.push(header("Just a friendly reminder! You have these tasks to finish today."));
        for task in &self.tasks_today {
            lines.push(format!("- {}", task.description));
        }

        lines.push(String::new());
        lines.push(header("These tasks need to be finished in the next three days!"));
        for task in &self.tasks_soon {
            lines.push(format!("- {} by {}", task.description, task.due_date));
        }

        lines.push(String::new());
        lines.push(header("You have the following meetings today!"));
        lines.extend(self.malformed_today.iter().map(Render::render));
        for meeting in &self.meetings_today {
            lines.push(format!("- {} at {}", meeting.description, meeting.time));
        }

        lines.push(String::new());
        lines.push(header("You have the following meetings scheduled over the next week!"));
        lines.extend(self.malformed_this_week.iter().map(Render::render));
        for meeting in &self.meetings_this_week {
            lines.push(format!(
                "- {} on {} at {}",
                meeting.description, meeting.date, meeting.time
            ));
        }

        // blank line before the menu
        lines.push(String::new());
        lines.join("\n")
    }
}

fn header(text: &str) -> String {
    let styled = text.if_supports_color(Stream::Stdout, |t| t.bold());
    styled.to_string()
}
