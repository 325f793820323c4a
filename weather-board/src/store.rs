//! JSON 键值文件
//!
//! 整个文件是一个 JSON 对象，每次写入都会完整重写。
//! 文件缺失或损坏时视为空存储，读取失败的键由调用方回退到默认值。

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::error::{Result, WeatherError};

#[derive(Debug)]
pub struct JsonStore {
    path: PathBuf,
    values: Map<String, Value>,
}

impl JsonStore {
    pub fn open(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let values = match std::fs::read_to_string(&path) {
            Ok(text) => match serde_json::from_str::<Map<String, Value>>(&text) {
                Ok(values) => values,
                Err(e) => {
                    warn!("Ignoring corrupt store {}: {}", path.display(), e);
                    Map::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Map::new(),
            Err(e) => {
                warn!("Failed to read store {}: {}", path.display(), e);
                Map::new()
            }
        };

        Self { path, values }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 键不存在或类型不符时返回 None
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let value = self.values.get(key)?;
        match serde_json::from_value(value.clone()) {
            Ok(v) => Some(v),
            Err(e) => {
                warn!("Ignoring invalid value for key '{}': {}", key, e);
                None
            }
        }
    }

    pub fn set<T: Serialize>(&mut self, key: &str, value: &T) -> Result<()> {
        let value = serde_json::to_value(value)?;
        self.values.insert(key.to_string(), value);
        self.flush()
    }

    pub fn remove(&mut self, key: &str) -> Result<()> {
        if self.values.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        let text = serde_json::to_string_pretty(&self.values)
            .map_err(|e| WeatherError::Store(e.to_string()))?;
        std::fs::write(&self.path, text)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::open(dir.path().join("prefs.json"));
        assert_eq!(store.get::<String>("theme"), None);
    }

    #[test]
    fn test_values_persist() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/prefs.json");

        let mut store = JsonStore::open(&path);
        store.set("tempUnit", &"imperial").unwrap();
        store.set("count", &3).unwrap();

        let reopened = JsonStore::open(&path);
        assert_eq!(reopened.get::<String>("tempUnit").as_deref(), Some("imperial"));
        assert_eq!(reopened.get::<i32>("count"), Some(3));
    }

    #[test]
    fn test_corrupt_file_and_wrong_type() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        std::fs::write(&path, "{not json").unwrap();
        assert_eq!(JsonStore::open(&path).get::<String>("theme"), None);

        std::fs::write(&path, r#"{"count":"three"}"#).unwrap();
        assert_eq!(JsonStore::open(&path).get::<i32>("count"), None);
    }

    #[test]
    fn test_remove() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        let mut store = JsonStore::open(&path);
        store.set("a", &1).unwrap();
        store.remove("a").unwrap();
        assert_eq!(JsonStore::open(&path).get::<i32>("a"), None);
    }
}
