//! Task and meeting stores.
//!
//! A store is read in full, edited in memory and rewritten in full. Lines the
//! codec doesn't recognise (headers, blank separators, notes) are kept as-is
//! so a rewrite never loses them.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{JafrError, JafrResult, RecordError};
use crate::record::{Meeting, OriginTag, SCHEDULED_SEPARATOR, TagLine, Task};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    Tasks,
    Meetings,
}

impl StoreKind {
    pub fn file_name(&self) -> &'static str {
        match self {
            StoreKind::Tasks => "tasks.md",
            StoreKind::Meetings => "meetings.md",
        }
    }

    /// Location of this store inside a master directory.
    pub fn path_in(&self, master_dir: &Path) -> PathBuf {
        master_dir.join(self.file_name())
    }
}

/// One element of a store: a raw line, plus the origin tags written directly
/// above it when it is a meeting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub tags: Vec<TagLine>,
    pub line: String,
}

impl Entry {
    pub fn plain(line: impl Into<String>) -> Self {
        Entry {
            tags: Vec::new(),
            line: line.into(),
        }
    }

    pub fn tagged(tag: OriginTag, line: impl Into<String>) -> Self {
        Entry {
            tags: vec![tag.into()],
            line: line.into(),
        }
    }

    pub fn task(&self) -> Result<Task, RecordError> {
        Task::parse(&self.line)
    }

    pub fn meeting(&self) -> Result<Meeting, RecordError> {
        Meeting::parse(&self.line)
    }

    /// Tag lines followed by the record line, without a trailing newline.
    pub fn to_block(&self) -> String {
        self.tags
            .iter()
            .map(ToString::to_string)
            .chain(std::iter::once(self.line.clone()))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[derive(Debug, Clone)]
pub struct Store {
    kind: StoreKind,
    path: PathBuf,
    entries: Vec<Entry>,
}

impl Store {
    pub fn load(kind: StoreKind, path: impl Into<PathBuf>) -> JafrResult<Self> {
        let path = path.into();

        if !path.is_file() {
            return Err(JafrError::StoreMissing(path));
        }

        let text = std::fs::read_to_string(&path)?;
        log::debug!("Loaded {} from {}", kind.file_name(), path.display());

        Ok(Self::from_text(kind, path, &text))
    }

    pub fn from_text(kind: StoreKind, path: impl Into<PathBuf>, text: &str) -> Self {
        let mut entries = Vec::new();
        let mut pending_tags: Vec<TagLine> = Vec::new();
        let untag = |tag: TagLine| Entry::plain(tag.to_string());

        for line in text.lines() {
            if kind == StoreKind::Meetings {
                if let Some(tag) = TagLine::parse(line) {
                    pending_tags.push(tag);
                    continue;
                }
                if line.contains(SCHEDULED_SEPARATOR) {
                    entries.push(Entry {
                        tags: std::mem::take(&mut pending_tags),
                        line: line.to_string(),
                    });
                    continue;
                }
            }

            // Tags that don't sit directly above a meeting stay ordinary lines
            entries.extend(pending_tags.drain(..).map(untag));
            entries.push(Entry::plain(line));
        }
        entries.extend(pending_tags.drain(..).map(untag));

        Store {
            kind,
            path: path.into(),
            entries,
        }
    }

    pub fn kind(&self) -> StoreKind {
        self.kind
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn entry(&self, index: usize) -> Option<&Entry> {
        self.entries.get(index)
    }

    pub fn entry_mut(&mut self, index: usize) -> Option<&mut Entry> {
        self.entries.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append an entry in memory and return its index. Call [`Store::save`] to persist.
    pub fn push(&mut self, entry: Entry) -> usize {
        self.entries.push(entry);
        self.entries.len() - 1
    }

    pub fn to_text(&self) -> String {
        let mut text = String::new();
        for entry in &self.entries {
            text.push_str(&entry.to_block());
            text.push('\n');
        }
        text
    }

    /// Rewrite the whole store file.
    pub fn save(&self) -> JafrResult<()> {
        std::fs::write(&self.path, self.to_text())?;
        log::debug!(
            "Wrote {} entries to {}",
            self.entries.len(),
            self.path.display()
        );
        Ok(())
    }
}

/// Append a self-contained block to a store file owned by someone else,
/// creating the file if needed. The block goes out in a single write.
pub fn append_block(path: &Path, block: &str) -> JafrResult<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    file.write_all(block.as_bytes())?;
    log::debug!("Appended {} bytes to {}", block.len(), path.display());
    Ok(())
}
