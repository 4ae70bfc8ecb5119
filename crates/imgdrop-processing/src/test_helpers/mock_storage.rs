//! Mock Storage implementation for testing

use async_trait::async_trait;
use bytes::Bytes;
use imgdrop_storage::{Storage, StorageBackend, StorageError, StorageKey, StorageResult};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// One recorded put
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedPut {
    pub key: String,
    pub size_bytes: usize,
    pub content_type: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Succeed,
    Fail,
    Hang,
}

/// Mock storage implementation that keeps files in memory and records every put
pub struct MockStorage {
    files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    puts: Arc<Mutex<Vec<RecordedPut>>>,
    mode: Mode,
}

impl MockStorage {
    pub fn new() -> Self {
        Self::with_mode(Mode::Succeed)
    }

    /// A storage whose every put is rejected
    pub fn failing() -> Self {
        Self::with_mode(Mode::Fail)
    }

    /// A storage whose puts never complete
    pub fn hanging() -> Self {
        Self::with_mode(Mode::Hang)
    }

    fn with_mode(mode: Mode) -> Self {
        Self {
            files: Arc::new(Mutex::new(HashMap::new())),
            puts: Arc::new(Mutex::new(Vec::new())),
            mode,
        }
    }

    /// Number of put attempts, including failed ones
    pub fn put_count(&self) -> usize {
        self.puts.lock().unwrap().len()
    }

    /// All put attempts in order
    pub fn puts(&self) -> Vec<RecordedPut> {
        self.puts.lock().unwrap().clone()
    }

    /// Get file data (for test assertions)
    pub fn get_file(&self, key: &str) -> Option<Vec<u8>> {
        self.files.lock().unwrap().get(key).cloned()
    }

    /// Location returned for a stored key
    pub fn location_for(key: &str) -> String {
        format!("https://example.com/{}", key)
    }
}

impl Default for MockStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Storage for MockStorage {
    async fn put(&self, key: &StorageKey, data: Bytes, content_type: &str) -> StorageResult<String> {
        self.puts.lock().unwrap().push(RecordedPut {
            key: key.to_string(),
            size_bytes: data.len(),
            content_type: content_type.to_string(),
        });

        match self.mode {
            Mode::Succeed => {
                self.files
                    .lock()
                    .unwrap()
                    .insert(key.to_string(), data.to_vec());
                Ok(Self::location_for(key.as_str()))
            }
            Mode::Fail => Err(StorageError::UploadFailed(
                "simulated storage outage".to_string(),
            )),
            Mode::Hang => {
                tokio::time::sleep(Duration::from_secs(3600)).await;
                Err(StorageError::UploadFailed("unreachable".to_string()))
            }
        }
    }

    fn backend_type(&self) -> StorageBackend {
        StorageBackend::Local
    }
}
