//! One run of jafr: startup checks, reminders, then the menu loop.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::NaiveDate;
use jafr_core::console::Console;
use jafr_core::registry::{User, UserRegistry};
use jafr_core::reminders::Reminders;
use jafr_core::settings::Settings;
use jafr_core::store::{Store, StoreKind};
use jafr_core::{JafrError, JafrResult};

use crate::commands;
use crate::render::Render;

const MENU: &str = "\
What would you like to do?
1. Complete tasks
2. Add a new meeting.
3. Share a task.
4. Share a meeting.
5. Change Jafr's master directory.
6. Exit";

/// Everything loaded once at startup and shared by the menu commands.
pub struct Session {
    pub settings: Settings,
    pub settings_path: PathBuf,
    pub tasks: Store,
    pub meetings: Store,
    pub registry: UserRegistry,
    pub user: User,
    pub today: NaiveDate,
}

impl Session {
    /// Load settings, stores and registry. Any failure here aborts the run.
    pub fn start(
        settings_path: PathBuf,
        registry_path: &Path,
        username: &str,
        today: NaiveDate,
    ) -> Result<Self> {
        let settings = Settings::load(&settings_path)?;

        let master_dir = PathBuf::from(&settings.master);
        if settings.master_dir().is_none() || !master_dir.is_dir() {
            return Err(JafrError::MasterDirMissing(master_dir).into());
        }

        let tasks_path = StoreKind::Tasks.path_in(&master_dir);
        let meetings_path = StoreKind::Meetings.path_in(&master_dir);
        if !tasks_path.is_file() || !meetings_path.is_file() {
            return Err(JafrError::StoreMissing(master_dir).into());
        }

        let tasks = Store::load(StoreKind::Tasks, tasks_path)?;
        let meetings = Store::load(StoreKind::Meetings, meetings_path)?;

        let registry = UserRegistry::load(registry_path)?;
        let user = registry
            .by_username(username)
            .cloned()
            .ok_or_else(|| JafrError::UnknownUser(username.to_string()))?;

        log::debug!("Session for {username} ({}) on {today}", user.user_id);

        Ok(Session {
            settings,
            settings_path,
            tasks,
            meetings,
            registry,
            user,
            today,
        })
    }

    /// Print reminders, then serve menu choices until exit, an unknown
    /// choice, or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>) -> Result<()> {
        let reminders = Reminders::collect(self.today, &self.tasks, &self.meetings);
        console.say(reminders.render())?;

        loop {
            console.say(MENU)?;

            let choice = match console.read_line() {
                Ok(choice) => choice,
                Err(JafrError::InputClosed) => return Ok(()),
                Err(e) => return Err(e.into()),
            };

            let outcome = match choice.trim() {
                "1" => commands::complete::run(console, self),
                "2" => commands::meeting::run(console, self),
                "3" => commands::share::task(console, self),
                "4" => commands::share::meeting(console, self),
                "5" => commands::master::run(console, self),
                "6" => return Ok(()),
                _ => {
                    console.say("Invalid choice. Please try again.")?;
                    return Ok(());
                }
            };

            if !keep_going(outcome)? {
                return Ok(());
            }
        }
    }
}

/// End of input inside a command ends the session quietly.
fn keep_going(outcome: JafrResult<()>) -> Result<bool> {
    match outcome {
        Ok(()) => Ok(true),
        Err(JafrError::InputClosed) => Ok(false),
        Err(e) => Err(e.into()),
    }
}
