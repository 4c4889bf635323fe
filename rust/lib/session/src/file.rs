use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use tracing::debug;

use crate::error::SessionError;
use crate::traits::SessionStore;

/// FileStore keeps the session in a TOML file, one top-level key per entry:
///
/// ```toml
/// admin_token = "eyJ..."
/// admin_user = '{"id":1,"name":"..."}'
/// ```
///
/// The file is read once on open and rewritten after every mutation.
/// A mutation only takes effect in memory once the file write succeeded.
/// A missing file is an empty session. On unix the file is kept at mode
/// `0600`, since it holds bearer tokens.
pub struct FileStore {
    path: PathBuf,
    entries: RwLock<BTreeMap<String, String>>,
}

impl FileStore {
    /// Open (or lazily create) a session file.
    pub fn open(path: &Path) -> Result<Self, SessionError> {
        let entries = if path.exists() {
            let content =
                fs::read_to_string(path).map_err(|e| SessionError::Storage(e.to_string()))?;
            toml::from_str(&content).map_err(|e| SessionError::Serialization(e.to_string()))?
        } else {
            debug!("FileStore: {:?} does not exist, starting empty", path);
            BTreeMap::new()
        };

        Ok(Self {
            path: path.to_path_buf(),
            entries: RwLock::new(entries),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, entries: &BTreeMap<String, String>) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| SessionError::Storage(e.to_string()))?;
        }
        let content =
            toml::to_string(entries).map_err(|e| SessionError::Serialization(e.to_string()))?;
        write_private(&self.path, &content).map_err(|e| SessionError::Storage(e.to_string()))
    }
}

#[cfg(unix)]
fn write_private(path: &Path, content: &str) -> std::io::Result<()> {
    use std::io::Write;
    use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

    let mut file = fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(0o600)
        .open(path)?;
    // mode() only applies when the file is created.
    fs::set_permissions(path, fs::Permissions::from_mode(0o600))?;
    file.write_all(content.as_bytes())
}

#[cfg(not(unix))]
fn write_private(path: &Path, content: &str) -> std::io::Result<()> {
    fs::write(path, content)
}

impl SessionStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, SessionError> {
        let entries = self.entries.read().map_err(|_| SessionError::Poisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SessionError> {
        let mut entries = self.entries.write().map_err(|_| SessionError::Poisoned)?;
        let mut next = entries.clone();
        next.insert(key.to_string(), value.to_string());
        self.persist(&next)?;
        *entries = next;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), SessionError> {
        let mut entries = self.entries.write().map_err(|_| SessionError::Poisoned)?;
        if !entries.contains_key(key) {
            return Ok(());
        }
        let mut next = entries.clone();
        next.remove(key);
        self.persist(&next)?;
        *entries = next;
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>, SessionError> {
        let entries = self.entries.read().map_err(|_| SessionError::Poisoned)?;
        Ok(entries.keys().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(&dir.path().join("nope.toml")).unwrap();
        assert!(store.keys().unwrap().is_empty());
        assert!(!store.path().exists());
    }

    #[test]
    fn test_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sessions").join("clinic.toml");

        {
            let store = FileStore::open(&path).unwrap();
            store.set("staff_token", "tok-1").unwrap();
            store
                .set("staff_user", r#"{"id":7,"name":"سارة"}"#)
                .unwrap();
        }

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.get("staff_token").unwrap().as_deref(), Some("tok-1"));
        assert_eq!(
            reopened.get("staff_user").unwrap().as_deref(),
            Some(r#"{"id":7,"name":"سارة"}"#)
        );
    }

    #[test]
    fn test_remove_is_persisted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("s.toml");

        let store = FileStore::open(&path).unwrap();
        store.set("admin_token", "a").unwrap();
        store.set("admin_user", "{}").unwrap();
        store.remove("admin_token").unwrap();

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.get("admin_token").unwrap(), None);
        assert_eq!(reopened.get("admin_user").unwrap().as_deref(), Some("{}"));
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(&path, "this is = = not toml").unwrap();
        assert!(matches!(
            FileStore::open(&path),
            Err(SessionError::Serialization(_))
        ));
    }

    #[test]
    fn test_failed_write_leaves_memory_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let sessions = dir.path().join("sessions");
        let path = sessions.join("clinic.toml");

        let store = FileStore::open(&path).unwrap();
        store.set("staff_token", "tok-1").unwrap();

        // Replace the directory with a plain file so every write fails.
        fs::remove_dir_all(&sessions).unwrap();
        fs::write(&sessions, "not a directory").unwrap();

        assert!(matches!(
            store.set("staff_token", "tok-2"),
            Err(SessionError::Storage(_))
        ));
        assert_eq!(store.get("staff_token").unwrap().as_deref(), Some("tok-1"));

        assert!(store.remove("staff_token").is_err());
        assert_eq!(store.get("staff_token").unwrap().as_deref(), Some("tok-1"));

        // Removing a missing key never touches the file.
        store.remove("admin_token").unwrap();
    }

    #[cfg(unix)]
    #[test]
    fn test_file_is_private() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("s.toml");
        fs::write(&path, "").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o644)).unwrap();

        let store = FileStore::open(&path).unwrap();
        store.set("admin_token", "secret").unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
