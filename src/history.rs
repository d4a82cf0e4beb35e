use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};
use tokio::sync::Mutex;

use crate::{excerpt, AnalysisResult};

pub const DEFAULT_HISTORY_LIMIT: usize = 10;
pub const SNIPPET_CHARS: usize = 30;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: String,
    /// Milliseconds since the Unix epoch.
    pub timestamp: u64,
    pub text_snippet: String,
    pub result: AnalysisResult,
    pub full_text: String,
}

/// Most-recent-first list of past analyses, persisted as a JSON array.
pub struct HistoryStore {
    path: PathBuf,
    limit: usize,
    entries: Mutex<Vec<HistoryEntry>>,
}

impl HistoryStore {
    pub async fn load(path: PathBuf, limit: usize) -> Result<Self, String> {
        let mut entries: Vec<HistoryEntry> = if path.exists() {
            let data = tokio::fs::read_to_string(&path)
                .await
                .map_err(|err| format!("failed to read history: {}", err))?;
            if data.trim().is_empty() {
                Vec::new()
            } else {
                serde_json::from_str(&data)
                    .map_err(|err| format!("failed to parse history: {}", err))?
            }
        } else {
            Vec::new()
        };
        entries.truncate(limit);

        Ok(Self {
            path,
            limit,
            entries: Mutex::new(entries),
        })
    }

    pub async fn list(&self) -> Vec<HistoryEntry> {
        let guard = self.entries.lock().await;
        guard.clone()
    }

    pub async fn get(&self, entry_id: &str) -> Option<HistoryEntry> {
        let guard = self.entries.lock().await;
        guard.iter().find(|entry| entry.id == entry_id).cloned()
    }

    /// Stores a finished analysis at the front and drops the oldest entries
    /// past the limit. Returns `None`, storing nothing, when the newest entry
    /// already has the same snippet. The in-memory list only changes once the
    /// file write succeeds.
    pub async fn record(
        &self,
        text: &str,
        result: &AnalysisResult,
    ) -> Result<Option<HistoryEntry>, String> {
        let snippet = excerpt(text, SNIPPET_CHARS).to_string();
        let mut guard = self.entries.lock().await;
        if guard
            .first()
            .map(|newest| newest.text_snippet == snippet)
            .unwrap_or(false)
        {
            return Ok(None);
        }

        let timestamp = now_ms();
        let entry = HistoryEntry {
            id: entry_id(timestamp, text),
            timestamp,
            text_snippet: snippet,
            result: result.clone(),
            full_text: text.to_string(),
        };
        let mut updated = Vec::with_capacity(self.limit);
        updated.push(entry.clone());
        updated.extend(guard.iter().cloned());
        updated.truncate(self.limit);
        self.persist(&updated).await?;
        *guard = updated;
        Ok(Some(entry))
    }

    pub async fn clear(&self) -> Result<(), String> {
        let mut guard = self.entries.lock().await;
        guard.clear();
        if self.path.exists() {
            tokio::fs::remove_file(&self.path)
                .await
                .map_err(|err| format!("failed to remove history: {}", err))?;
        }
        Ok(())
    }

    async fn persist(&self, entries: &[HistoryEntry]) -> Result<(), String> {
        if let Some(parent) = self.path.parent() {
            ensure_dir(parent).await?;
        }
        let payload = serde_json::to_string_pretty(entries)
            .map_err(|err| format!("failed to serialize history: {}", err))?;
        let tmp_path = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp_path, payload)
            .await
            .map_err(|err| format!("failed to write history: {}", err))?;
        tokio::fs::rename(&tmp_path, &self.path)
            .await
            .map_err(|err| format!("failed to finalize history: {}", err))?;
        Ok(())
    }
}

fn entry_id(timestamp: u64, text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(timestamp.to_be_bytes());
    hasher.update(text.as_bytes());
    let digest = hasher.finalize();
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&digest[..8]);
    format!("entry_{:016x}", u64::from_be_bytes(bytes))
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|duration| duration.as_millis() as u64)
        .unwrap_or(0)
}

async fn ensure_dir(path: &Path) -> Result<(), String> {
    if path.as_os_str().is_empty() || path.exists() {
        return Ok(());
    }
    tokio::fs::create_dir_all(path)
        .await
        .map_err(|err| format!("failed to create history dir: {}", err))
}
