//! Flat-file storage - line-oriented persistence for every collection
//!
//! Every file is read whole at startup and rewritten whole on save. A `.bak`
//! copy is made before each rewrite; backup failure is logged and does not
//! block the save.

use anyhow::{bail, Context, Result};
use fs2::FileExt;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::contact::ContactBook;
use crate::expense::{self, Expense};
use crate::note::{self, Note};
use crate::place::{self, Place};
use crate::task::{codec, Task};

pub const PASSWORDS_FILE: &str = "passwords.txt";
pub const TASKS_FILE: &str = "tasks.txt";
pub const CONTACTS_FILE: &str = "contacts.txt";
pub const EXPENSES_FILE: &str = "expenses.txt";
pub const PLACES_FILE: &str = "places.txt";
pub const NOTES_FILE: &str = "notes.txt";

const LOCK_FILE: &str = ".lock";

pub const DATA_FILES: [&str; 6] = [
    PASSWORDS_FILE,
    TASKS_FILE,
    CONTACTS_FILE,
    EXPENSES_FILE,
    PLACES_FILE,
    NOTES_FILE,
];

#[derive(Debug)]
pub struct Storage {
    data_dir: PathBuf,
    _lock: Option<File>,
}

impl Storage {
    /// Open the data directory for an interactive session, creating it if
    /// needed and taking an exclusive lock so a second session is rejected.
    pub fn open(override_dir: Option<PathBuf>) -> Result<Self> {
        let data_dir = resolve_data_dir(override_dir)?;
        fs::create_dir_all(&data_dir)
            .with_context(|| format!("Failed to create data directory {:?}", data_dir))?;

        let lock_path = data_dir.join(LOCK_FILE);
        let lock = File::create(&lock_path)
            .with_context(|| format!("Failed to create lock file {:?}", lock_path))?;
        if lock.try_lock_exclusive().is_err() {
            bail!(
                "Another daybook session is already using {}",
                data_dir.display()
            );
        }

        debug!("opened data directory {:?}", data_dir);
        Ok(Self {
            data_dir,
            _lock: Some(lock),
        })
    }

    /// Open without locking, for read-only commands (`paths`, `export`).
    /// Does not create the directory.
    pub fn open_unlocked(override_dir: Option<PathBuf>) -> Result<Self> {
        Ok(Self {
            data_dir: resolve_data_dir(override_dir)?,
            _lock: None,
        })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn file_path(&self, name: &str) -> PathBuf {
        self.data_dir.join(name)
    }

    /// Read one file into lines. A missing file loads as empty.
    fn load_lines(&self, name: &str) -> Result<Vec<String>> {
        let path = self.file_path(name);
        if !path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {:?}", path))?;
        Ok(content.lines().map(str::to_string).collect())
    }

    /// Rewrite one file from lines, backing up the previous contents first
    fn save_lines(&self, name: &str, lines: &[String]) -> Result<()> {
        let path = self.file_path(name);

        // Create backup
        if path.exists() {
            let backup_path = path.with_extension("txt.bak");
            if let Err(e) = fs::copy(&path, &backup_path) {
                warn!("Failed to create backup for {}: {}", name, e);
            }
        }

        let mut content = lines.join("\n");
        if !content.is_empty() {
            content.push('\n');
        }
        fs::write(&path, content).with_context(|| format!("Failed to write {:?}", path))?;
        debug!("saved {} records to {}", lines.len(), name);
        Ok(())
    }

    pub fn load_passwords(&self) -> Result<Vec<String>> {
        let lines = self.load_lines(PASSWORDS_FILE)?;
        Ok(lines
            .into_iter()
            .filter(|line| !line.trim().is_empty())
            .collect())
    }

    pub fn save_passwords(&self, passwords: &[String]) -> Result<()> {
        self.save_lines(PASSWORDS_FILE, passwords)
    }

    pub fn load_tasks(&self) -> Result<Vec<Task>> {
        let lines = self.load_lines(TASKS_FILE)?;
        let tasks = codec::parse_lines(&lines)
            .with_context(|| format!("Failed to parse {}", TASKS_FILE))?;
        Ok(tasks)
    }

    pub fn save_tasks(&self, tasks: &[Task]) -> Result<()> {
        self.save_lines(TASKS_FILE, &codec::to_lines(tasks))
    }

    pub fn load_contacts(&self) -> Result<ContactBook> {
        let lines = self.load_lines(CONTACTS_FILE)?;
        let book = ContactBook::from_lines(&lines)
            .with_context(|| format!("Failed to parse {}", CONTACTS_FILE))?;
        Ok(book)
    }

    pub fn save_contacts(&self, contacts: &ContactBook) -> Result<()> {
        self.save_lines(CONTACTS_FILE, &contacts.to_lines())
    }

    pub fn load_expenses(&self) -> Result<Vec<Expense>> {
        let lines = self.load_lines(EXPENSES_FILE)?;
        let expenses = expense::from_lines(&lines)
            .with_context(|| format!("Failed to parse {}", EXPENSES_FILE))?;
        Ok(expenses)
    }

    pub fn save_expenses(&self, expenses: &[Expense]) -> Result<()> {
        self.save_lines(EXPENSES_FILE, &expense::to_lines(expenses))
    }

    pub fn load_places(&self) -> Result<Vec<Place>> {
        Ok(place::from_lines(&self.load_lines(PLACES_FILE)?))
    }

    pub fn save_places(&self, places: &[Place]) -> Result<()> {
        self.save_lines(PLACES_FILE, &place::to_lines(places))
    }

    pub fn load_notes(&self) -> Result<Vec<Note>> {
        Ok(note::from_lines(&self.load_lines(NOTES_FILE)?))
    }

    pub fn save_notes(&self, notes: &[Note]) -> Result<()> {
        self.save_lines(NOTES_FILE, &note::to_lines(notes))
    }
}

fn resolve_data_dir(override_dir: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = override_dir {
        return Ok(dir);
    }
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".daybook"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::parse_deadline_date;
    use serial_test::serial;
    use tempfile::tempdir;

    fn open_temp() -> (tempfile::TempDir, Storage) {
        let temp = tempdir().unwrap();
        let storage = Storage::open(Some(temp.path().to_path_buf())).unwrap();
        (temp, storage)
    }

    #[test]
    fn test_tasks_roundtrip() -> Result<()> {
        let (_temp, storage) = open_temp();

        let by = parse_deadline_date("2019-10-21 23:59:59").unwrap();
        let tasks = vec![Task::todo("read book"), Task::deadline("return book", by)];

        storage.save_tasks(&tasks)?;
        let loaded = storage.load_tasks()?;

        assert_eq!(loaded, tasks);
        Ok(())
    }

    #[test]
    fn test_contacts_roundtrip() -> Result<()> {
        let (_temp, storage) = open_temp();

        let mut contacts = ContactBook::new();
        contacts.insert("janel", "9625 1722");
        contacts.insert("jason", "9825 1822");

        storage.save_contacts(&contacts)?;
        let loaded = storage.load_contacts()?;

        assert_eq!(loaded, contacts);
        Ok(())
    }

    #[test]
    fn test_passwords_roundtrip_filters_blank_lines() -> Result<()> {
        let (_temp, storage) = open_temp();

        storage.save_passwords(&["abc".to_string(), String::new(), "old".to_string()])?;
        let loaded = storage.load_passwords()?;

        assert_eq!(loaded, ["abc", "old"]);
        Ok(())
    }

    #[test]
    fn test_load_missing_files_is_empty() -> Result<()> {
        let (_temp, storage) = open_temp();

        assert!(storage.load_tasks()?.is_empty());
        assert!(storage.load_contacts()?.is_empty());
        assert!(storage.load_expenses()?.is_empty());
        assert!(storage.load_places()?.is_empty());
        assert!(storage.load_notes()?.is_empty());
        assert!(storage.load_passwords()?.is_empty());
        Ok(())
    }

    #[test]
    fn test_load_whitespace_only_file_is_empty() -> Result<()> {
        let (temp, storage) = open_temp();

        fs::write(temp.path().join(TASKS_FILE), "   \n  \n")?;
        assert!(storage.load_tasks()?.is_empty());
        Ok(())
    }

    #[test]
    fn test_save_creates_backup() -> Result<()> {
        let (temp, storage) = open_temp();

        storage.save_notes(&[Note::new("first")])?;
        storage.save_notes(&[Note::new("second")])?;

        let backup_path = temp.path().join("notes.txt.bak");
        assert!(backup_path.exists());

        let backup_content = fs::read_to_string(&backup_path)?;
        assert!(backup_content.contains("first"));
        Ok(())
    }

    #[test]
    fn test_save_empty_list_writes_empty_file() -> Result<()> {
        let (temp, storage) = open_temp();

        storage.save_notes(&[])?;
        let content = fs::read_to_string(temp.path().join(NOTES_FILE))?;
        assert!(content.is_empty());
        Ok(())
    }

    #[test]
    fn test_load_malformed_task_line_names_the_line() {
        let (temp, storage) = open_temp();

        fs::write(temp.path().join(TASKS_FILE), "D|0|return book|not a date\n").unwrap();

        let err = storage.load_tasks().unwrap_err();
        assert!(format!("{:#}", err).contains("return book"));
    }

    #[test]
    fn test_second_session_is_rejected_by_lock() {
        let temp = tempdir().unwrap();
        let _first = Storage::open(Some(temp.path().to_path_buf())).unwrap();

        let second = Storage::open(Some(temp.path().to_path_buf()));
        assert!(second.is_err());
        assert!(second
            .unwrap_err()
            .to_string()
            .contains("already using"));
    }

    #[test]
    fn test_open_unlocked_does_not_conflict() -> Result<()> {
        let temp = tempdir().unwrap();
        let locked = Storage::open(Some(temp.path().to_path_buf()))?;
        let unlocked = Storage::open_unlocked(Some(temp.path().to_path_buf()))?;

        locked.save_notes(&[Note::new("shared")])?;
        assert_eq!(unlocked.load_notes()?.len(), 1);
        Ok(())
    }

    #[test]
    #[serial]
    fn test_default_data_dir_is_under_home() -> Result<()> {
        let temp = tempdir()?;
        std::env::set_var("HOME", temp.path());

        let storage = Storage::open(None)?;
        assert_eq!(storage.data_dir(), temp.path().join(".daybook"));
        assert!(storage.data_dir().exists());
        Ok(())
    }
}
