//! On-disk session store

use super::store::SessionStore;
use crate::utils::error::{ClientError, Result};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::Mutex;
use tracing::debug;

/// Keeps the credentials as one JSON object in a file
///
/// The parent directory is created on the first write. A missing file reads
/// as an empty store. On unix the file is kept at mode `0600`.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    // serializes read-modify-write cycles
    lock: Mutex<()>,
}

impl FileStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_entries(&self) -> Result<BTreeMap<String, String>> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => {
                return Err(ClientError::storage(format!(
                    "Failed to read session file {}: {}",
                    self.path.display(),
                    e
                )));
            }
        };

        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        serde_json::from_str(&content).map_err(|e| {
            ClientError::storage(format!(
                "Session file {} is corrupt: {}",
                self.path.display(),
                e
            ))
        })
    }

    async fn write_entries(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await.map_err(|e| {
                    ClientError::storage(format!("Failed to create session directory: {}", e))
                })?;
            }
        }

        let content = serde_json::to_string_pretty(entries)?;
        write_private(&self.path, content.as_bytes())
            .await
            .map_err(|e| ClientError::storage(format!("Failed to write session file: {}", e)))?;

        debug!("Session file written: {}", self.path.display());
        Ok(())
    }
}

/// Write a file only its owner can read
#[cfg(unix)]
async fn write_private(path: &Path, content: &[u8]) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    use tokio::io::AsyncWriteExt;

    let mut file = fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(0o600)
        .open(path)
        .await?;
    // mode only applies on creation
    file.set_permissions(std::fs::Permissions::from_mode(0o600))
        .await?;
    file.write_all(content).await?;
    file.flush().await
}

#[cfg(not(unix))]
async fn write_private(path: &Path, content: &[u8]) -> std::io::Result<()> {
    fs::write(path, content).await
}

#[async_trait]
impl SessionStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let _guard = self.lock.lock().await;
        Ok(self.read_entries().await?.remove(key))
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let _guard = self.lock.lock().await;
        let mut entries = self.read_entries().await?;
        entries.insert(key.to_string(), value.to_string());
        self.write_entries(&entries).await
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let _guard = self.lock.lock().await;
        let mut entries = self.read_entries().await?;
        if entries.remove(key).is_none() && !self.path.exists() {
            return Ok(());
        }
        self.write_entries(&entries).await
    }
}
