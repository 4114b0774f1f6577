//! Local user registry in passwd layout.
//!
//! Each non-empty line has seven colon-separated fields; the first, third and
//! sixth are the username, user id and home directory.

use std::path::{Path, PathBuf};

use crate::error::{JafrError, JafrResult};

const FIELD_COUNT: usize = 7;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub username: String,
    pub user_id: String,
    pub home_dir: PathBuf,
}

#[derive(Debug, Clone, Default)]
pub struct UserRegistry {
    users: Vec<User>,
}

impl UserRegistry {
    pub fn load(path: &Path) -> JafrResult<Self> {
        let text = std::fs::read_to_string(path)?;
        let registry = Self::parse(&text)?;
        log::debug!(
            "Loaded {} users from {}",
            registry.users.len(),
            path.display()
        );
        Ok(registry)
    }

    /// Parse the whole registry. One bad line fails the lot.
    pub fn parse(text: &str) -> JafrResult<Self> {
        let mut users = Vec::new();

        for (n, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let fields: Vec<&str> = line.split(':').collect();
            if fields.len() != FIELD_COUNT {
                return Err(JafrError::RegistryMalformed {
                    line: n + 1,
                    fields: fields.len(),
                });
            }

            users.push(User {
                username: fields[0].to_string(),
                user_id: fields[2].to_string(),
                home_dir: PathBuf::from(fields[5]),
            });
        }

        Ok(UserRegistry { users })
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn by_id(&self, user_id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.user_id == user_id)
    }

    pub fn by_username(&self, username: &str) -> Option<&User> {
        self.users.iter().find(|u| u.username == username)
    }

    /// Everyone except the user with `user_id`, in registry order.
    pub fn others(&self, user_id: &str) -> impl Iterator<Item = &User> {
        self.users.iter().filter(move |u| u.user_id != user_id)
    }
}
