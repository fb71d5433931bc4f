use crate::Result;
use anyhow::Context;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;

/// Reads the JSON file at `path` into a `T`.
pub(crate) async fn read_json<T>(path: &Path) -> Result<T>
where
    T: DeserializeOwned,
{
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("Unable to read {}", path.display()))?;
    serde_json::from_slice(&bytes).with_context(|| format!("{} is not valid JSON", path.display()))
}

/// Writes `value` to `path` as pretty JSON, creating missing parent directories first.
pub(crate) async fn write_json<T>(path: &Path, value: &T) -> Result<()>
where
    T: Serialize + ?Sized,
{
    let json = serde_json::to_vec_pretty(value)
        .with_context(|| format!("Unable to serialize the contents of {}", path.display()))?;
    if let Some(dir) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(dir)
            .await
            .with_context(|| format!("Unable to create directory {}", dir.display()))?;
    }
    tokio::fs::write(path, json)
        .await
        .with_context(|| format!("Unable to write {}", path.display()))
}
