//! Per-status message templates kept as plain text files.
//!
//! One file per status, named `<status>Template.txt` (e.g.
//! `contactedTemplate.txt`). A template never reads back blank: a missing
//! file yields the built-in default, and a blank file is overwritten with it.

use log::{debug, info};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::models::Status;

#[derive(Debug, Error)]
pub enum TemplateStorageError {
    #[error("I/O error while {action} template `{}`: {source}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type TemplateResult<T> = Result<T, TemplateStorageError>;

/// Built-in text for a status, e.g. `This is the default template for status Busy`.
pub fn default_template(status: Status) -> String {
    format!("This is the default template for status {}", status.display_name())
}

/// File name holding the template for `status`.
pub fn template_file_name(status: Status) -> String {
    format!("{}Template.txt", status.as_str().to_lowercase())
}

fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// Status-keyed template store.
///
/// Implementors supply raw load/store. Defaults for missing and blank
/// content are applied by the provided methods.
pub trait TemplateStorage {
    /// Raw content for `status`, or `None` if nothing is stored yet.
    fn load(&self, status: Status) -> TemplateResult<Option<String>>;

    fn store(&self, status: Status, content: &str) -> TemplateResult<()>;

    fn read_template(&self, status: Status) -> TemplateResult<String> {
        match self.load(status)? {
            None => Ok(default_template(status)),
            Some(content) if is_blank(&content) => {
                let default = default_template(status);
                info!("event=template_repair status={}", status.as_str());
                self.store(status, &default)?;
                Ok(default)
            }
            Some(content) => Ok(content),
        }
    }

    /// Blank or absent content stores the default instead.
    fn save_template(&self, status: Status, content: Option<&str>) -> TemplateResult<()> {
        match content {
            Some(c) if !is_blank(c) => self.store(status, c),
            _ => self.store(status, &default_template(status)),
        }
    }

    fn default_template(&self, status: Status) -> String {
        default_template(status)
    }
}

/// Templates stored as files under one directory.
#[derive(Debug, Clone)]
pub struct TemplateStorageManager {
    dir: PathBuf,
}

impl TemplateStorageManager {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn template_path(&self, status: Status) -> PathBuf {
        self.dir.join(template_file_name(status))
    }
}

impl TemplateStorage for TemplateStorageManager {
    fn load(&self, status: Status) -> TemplateResult<Option<String>> {
        let path = self.template_path(status);
        match fs::read_to_string(&path) {
            Ok(content) => {
                debug!("event=template_read status={} bytes={}", status.as_str(), content.len());
                Ok(Some(content))
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(TemplateStorageError::Io {
                action: "reading",
                path,
                source,
            }),
        }
    }

    fn store(&self, status: Status, content: &str) -> TemplateResult<()> {
        let path = self.template_path(status);
        fs::create_dir_all(&self.dir).map_err(|source| TemplateStorageError::Io {
            action: "creating directory for",
            path: path.clone(),
            source,
        })?;
        fs::write(&path, content).map_err(|source| TemplateStorageError::Io {
            action: "writing",
            path,
            source,
        })?;
        debug!("event=template_write status={} bytes={}", status.as_str(), content.len());
        Ok(())
    }
}

/// Templates held in memory. Used where no template directory exists.
#[derive(Debug, Default)]
pub struct MemoryTemplateStorage {
    templates: RefCell<HashMap<Status, String>>,
    writes: Cell<usize>,
}

impl MemoryTemplateStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw stored content, bypassing the default logic.
    pub fn saved(&self, status: Status) -> Option<String> {
        self.templates.borrow().get(&status).cloned()
    }

    /// Number of raw writes performed so far.
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }
}

impl TemplateStorage for MemoryTemplateStorage {
    fn load(&self, status: Status) -> TemplateResult<Option<String>> {
        Ok(self.templates.borrow().get(&status).cloned())
    }

    fn store(&self, status: Status, content: &str) -> TemplateResult<()> {
        self.templates.borrow_mut().insert(status, content.to_string());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_template_for_every_status() {
        for &status in Status::all() {
            let name = status.display_name();
            assert_eq!(
                default_template(status),
                format!("This is the default template for status {}", name)
            );
        }
        assert_eq!(
            default_template(Status::Unreachable),
            "This is the default template for status Unreachable"
        );
    }

    #[test]
    fn test_template_file_name() {
        assert_eq!(template_file_name(Status::Contacted), "contactedTemplate.txt");
        assert_eq!(template_file_name(Status::Uncontacted), "uncontactedTemplate.txt");
    }

    #[test]
    fn test_memory_missing_returns_default_without_write() {
        let store = MemoryTemplateStorage::new();
        assert_eq!(
            store.read_template(Status::Busy).unwrap(),
            "This is the default template for status Busy"
        );
        assert_eq!(store.write_count(), 0);
        assert_eq!(store.saved(Status::Busy), None);
    }

    #[test]
    fn test_memory_blank_is_repaired_once() {
        let store = MemoryTemplateStorage::new();
        store.store(Status::Rejected, " \t\n").unwrap();

        let first = store.read_template(Status::Rejected).unwrap();
        assert_eq!(first, default_template(Status::Rejected));
        assert_eq!(store.saved(Status::Rejected), Some(first.clone()));
        let writes = store.write_count();

        assert_eq!(store.read_template(Status::Rejected).unwrap(), first);
        assert_eq!(store.write_count(), writes);
    }

    #[test]
    fn test_memory_blank_save_stores_default() {
        let store = MemoryTemplateStorage::new();
        for content in [Some(""), Some("   "), None] {
            store.save_template(Status::Accepted, content).unwrap();
            assert_eq!(
                store.saved(Status::Accepted),
                Some(default_template(Status::Accepted))
            );
        }
    }
}
