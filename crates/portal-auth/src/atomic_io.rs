use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::TokenStoreError;

fn unix_timestamp_ms() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis())
        .unwrap_or_default()
}

/// Writes text through a temp file + rename so readers never see a partial
/// token file.
pub(crate) fn write_text_atomic(path: &Path, content: &str) -> Result<(), TokenStoreError> {
    if path.as_os_str().is_empty() {
        return Err(TokenStoreError::InvalidPath(
            "token store path cannot be empty".to_string(),
        ));
    }
    if path.is_dir() {
        return Err(TokenStoreError::InvalidPath(format!(
            "token store path '{}' is a directory",
            path.display()
        )));
    }

    let parent_dir = path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(parent_dir).map_err(|source| TokenStoreError::Io {
        path: parent_dir.to_path_buf(),
        source,
    })?;

    let temp_name = format!(
        ".{}.tmp-{}-{}",
        path.file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("tokens"),
        std::process::id(),
        unix_timestamp_ms()
    );
    let temp_path = parent_dir.join(temp_name);
    std::fs::write(&temp_path, content).map_err(|source| TokenStoreError::Io {
        path: temp_path.clone(),
        source,
    })?;
    std::fs::rename(&temp_path, path).map_err(|source| TokenStoreError::Io {
        path: path.to_path_buf(),
        source,
    })
}
