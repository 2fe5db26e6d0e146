use crate::core::Storage;
use crate::utils::error::{LauncherError, Result};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

const STORAGE_FILE: &str = "local_storage.json";

/// File-backed key/value store. All keys live in one JSON object under `base_path`.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }

    pub fn file_path(&self) -> PathBuf {
        Path::new(&self.base_path).join(STORAGE_FILE)
    }

    async fn load(&self) -> Result<Map<String, Value>> {
        let path = self.file_path();
        match tokio::fs::read(&path).await {
            Ok(data) => serde_json::from_slice(&data).map_err(|e| LauncherError::StorageCorrupt {
                path: path.display().to_string(),
                message: e.to_string(),
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Map::new()),
            Err(e) => Err(e.into()),
        }
    }
}

impl Storage for LocalStorage {
    async fn get_item(&self, key: &str) -> Result<Option<String>> {
        let items = self.load().await?;
        Ok(items.get(key).and_then(|v| v.as_str()).map(str::to_string))
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let mut items = match self.load().await {
            Ok(items) => items,
            // 損壞的檔案直接覆寫
            Err(LauncherError::StorageCorrupt { path, message }) => {
                tracing::warn!("Replacing unreadable storage file {}: {}", path, message);
                Map::new()
            }
            Err(e) => return Err(e),
        };
        items.insert(key.to_string(), Value::String(value.to_string()));

        let full_path = self.file_path();
        if let Some(parent) = full_path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        // 先寫暫存檔再 rename，中斷的寫入不會留下半個檔案
        let tmp_path = full_path.with_extension("json.tmp");
        tokio::fs::write(&tmp_path, serde_json::to_vec_pretty(&items)?).await?;
        tokio::fs::rename(&tmp_path, &full_path).await?;
        Ok(())
    }
}
