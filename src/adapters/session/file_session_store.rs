//! File-based Session Store Adapter
//!
//! Stores each survey session as a YAML file named after its id.
//! Survives restarts and can be shared by instances on one host.
//!
//! Writes go to a uniquely named `.tmp` file that is then renamed over
//! `{id}.yaml`, so readers never observe a partial file. Every save also
//! sweeps the directory for expired sessions.

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::fs;

use super::StoredSession;
use uuid::Uuid;

use crate::domain::foundation::{DomainError, ErrorCode, SurveySessionId, Timestamp};
use crate::domain::survey::Responses;
use crate::ports::SessionStore;

/// File-based storage for survey sessions
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    base_path: PathBuf,
    ttl: Duration,
}

impl FileSessionStore {
    /// Create a new file store rooted at `base_path`
    ///
    /// The directory is created on first write.
    pub fn new<P: AsRef<Path>>(base_path: P, ttl: Duration) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
            ttl,
        }
    }

    /// Get the file path for a session
    fn session_file_path(&self, id: &SurveySessionId) -> PathBuf {
        self.base_path.join(format!("{}.yaml", id))
    }

    /// Remove every session file whose expiry has passed, returning how many
    /// were removed
    ///
    /// Temp files and files that fail to parse are left alone.
    pub async fn purge_expired(&self) -> Result<usize, DomainError> {
        let mut entries = match fs::read_dir(&self.base_path).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(0),
            Err(e) => return Err(Self::io_error("Failed to list session directory", e)),
        };

        let now = Timestamp::now();
        let mut removed = 0;
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| Self::io_error("Failed to read session directory entry", e))?
        {
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("yaml") {
                continue;
            }

            let stored = match fs::read_to_string(&path).await {
                Ok(yaml) => serde_yaml::from_str::<StoredSession>(&yaml),
                // Removed by a concurrent delete or purge.
                Err(e) if e.kind() == ErrorKind::NotFound => continue,
                Err(e) => return Err(Self::io_error("Failed to read session file", e)),
            };
            match stored {
                Ok(stored) if !stored.is_live(&now) => match fs::remove_file(&path).await {
                    Ok(()) => removed += 1,
                    Err(e) if e.kind() == ErrorKind::NotFound => {}
                    Err(e) => return Err(Self::io_error("Failed to delete session file", e)),
                },
                Ok(_) => {}
                Err(e) => {
                    tracing::warn!(path = %path.display(), "Skipping unreadable session file: {}", e);
                }
            }
        }

        Ok(removed)
    }

    fn io_error(context: &str, err: std::io::Error) -> DomainError {
        DomainError::new(ErrorCode::SessionStoreError, format!("{}: {}", context, err))
    }
}

#[async_trait]
impl SessionStore for FileSessionStore {
    async fn load(&self, id: &SurveySessionId) -> Result<Option<Responses>, DomainError> {
        let file_path = self.session_file_path(id);

        let yaml = match fs::read_to_string(&file_path).await {
            Ok(yaml) => yaml,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(Self::io_error("Failed to read session file", e)),
        };

        let stored: StoredSession = serde_yaml::from_str(&yaml).map_err(|e| {
            DomainError::new(
                ErrorCode::SessionStoreError,
                format!("Failed to parse session file: {}", e),
            )
            .with_detail("session_id", id.to_string())
        })?;

        if !stored.is_live(&Timestamp::now()) {
            tracing::debug!(session_id = %id, "Discarding expired survey session file");
            self.delete(id).await?;
            return Ok(None);
        }

        Ok(Some(stored.responses))
    }

    async fn save(&self, id: &SurveySessionId, responses: &Responses) -> Result<(), DomainError> {
        fs::create_dir_all(&self.base_path)
            .await
            .map_err(|e| Self::io_error("Failed to create session directory", e))?;

        let stored = StoredSession::new(responses.clone(), self.ttl);
        let yaml = serde_yaml::to_string(&stored).map_err(|e| {
            DomainError::new(
                ErrorCode::SessionStoreError,
                format!("Failed to serialize session: {}", e),
            )
        })?;

        match self.purge_expired().await {
            Ok(0) => {}
            Ok(purged) => tracing::debug!(purged, "Purged expired survey session files"),
            Err(e) => tracing::warn!("Failed to purge expired session files: {}", e),
        }

        let final_path = self.session_file_path(id);
        let temp_path = self
            .base_path
            .join(format!("{}.{}.tmp", id, Uuid::new_v4()));

        if let Err(e) = fs::write(&temp_path, yaml).await {
            let _ = fs::remove_file(&temp_path).await;
            return Err(Self::io_error("Failed to write session file", e));
        }

        if let Err(e) = fs::rename(&temp_path, &final_path).await {
            let _ = fs::remove_file(&temp_path).await;
            return Err(Self::io_error("Failed to replace session file", e));
        }

        Ok(())
    }

    async fn delete(&self, id: &SurveySessionId) -> Result<(), DomainError> {
        match fs::remove_file(self.session_file_path(id)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(Self::io_error("Failed to delete session file", e)),
        }
    }
}
