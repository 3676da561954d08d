use crate::errors::{KarirError, KarirResult};
use crate::models::Chat;
use std::fs;
use std::path::PathBuf;
use uuid::Uuid;

/// File-backed chat collection. The whole collection is rewritten on every
/// save; there is no incremental diffing.
#[derive(Debug, Clone)]
pub struct ChatStore {
    path: PathBuf,
}

impl ChatStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        ChatStore { path: path.into() }
    }

    /// Loads the full chat collection. A missing file is an empty collection,
    /// not an error.
    pub fn load(&self) -> KarirResult<Vec<Chat>> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(serde_json::from_str(&contents)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(KarirError::storage_error(format!(
                "failed to read {}: {}",
                self.path.display(),
                e
            ))),
        }
    }

    /// Overwrites the stored collection in full.
    pub fn save(&self, chats: &[Chat]) -> KarirResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| {
                    KarirError::storage_error(format!(
                        "failed to create {}: {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
        }

        let serialized = serde_json::to_string_pretty(chats)?;
        fs::write(&self.path, serialized).map_err(|e| {
            KarirError::storage_error(format!("failed to write {}: {}", self.path.display(), e))
        })
    }
}

pub fn new_chat_id() -> String {
    Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Chat, Message};
    use chrono::Utc;
    use tempfile::tempdir;

    fn sample_chat(id: &str) -> Chat {
        let messages = vec![
            Message::user("Bagaimana membuat CV yang baik?"),
            Message::assistant("Mulailah dengan ringkasan singkat."),
        ];
        Chat {
            id: id.to_string(),
            title: Chat::derive_title(&messages),
            messages,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_load_missing_file_returns_empty() {
        let dir = tempdir().unwrap();
        let store = ChatStore::new(dir.path().join("chats.json"));
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let dir = tempdir().unwrap();
        let store = ChatStore::new(dir.path().join("chats.json"));

        let chats = vec![sample_chat(&new_chat_id()), sample_chat(&new_chat_id())];
        store.save(&chats).unwrap();

        assert_eq!(store.load().unwrap(), chats);
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let dir = tempdir().unwrap();
        let store = ChatStore::new(dir.path().join("nested").join("deep").join("chats.json"));

        store.save(&[sample_chat("abc")]).unwrap();
        assert_eq!(store.load().unwrap().len(), 1);
    }

    #[test]
    fn test_save_overwrites_previous_collection() {
        let dir = tempdir().unwrap();
        let store = ChatStore::new(dir.path().join("chats.json"));

        store.save(&[sample_chat("a"), sample_chat("b")]).unwrap();
        store.save(&[sample_chat("c")]).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id, "c");
    }

    #[test]
    fn test_new_chat_ids_are_unique() {
        assert_ne!(new_chat_id(), new_chat_id());
    }
}
