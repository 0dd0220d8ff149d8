//! Client-local credential storage keyed the way the portal's browser
//! storage was: `accessToken`, `refreshToken`, `studentId`.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use portal_core::StoredCredentials;
use thiserror::Error;

use crate::atomic_io::write_text_atomic;

pub const ACCESS_TOKEN_KEY: &str = "accessToken";
pub const REFRESH_TOKEN_KEY: &str = "refreshToken";
pub const IDENTITY_KEY: &str = "studentId";

const STORE_KEYS: [&str; 3] = [ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY, IDENTITY_KEY];

#[derive(Debug, Error)]
pub enum TokenStoreError {
    #[error("invalid token store path: {0}")]
    InvalidPath(String),
    #[error("token store io failed for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("token store file {path} is not a JSON object: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to encode token store: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Key/value storage for issued credentials.
///
/// `persist` merges: a token absent from the credentials leaves any stored
/// value for that key untouched, while the identity is always written.
pub trait TokenStore: Send {
    fn load(&self) -> Result<BTreeMap<String, String>, TokenStoreError>;

    fn persist(&mut self, credentials: &StoredCredentials) -> Result<(), TokenStoreError>;

    /// Removes every portal key.
    fn clear(&mut self) -> Result<(), TokenStoreError>;

    fn get(&self, key: &str) -> Result<Option<String>, TokenStoreError> {
        Ok(self.load()?.remove(key))
    }
}

impl<T> TokenStore for Box<T>
where
    T: TokenStore + ?Sized,
{
    fn load(&self) -> Result<BTreeMap<String, String>, TokenStoreError> {
        self.as_ref().load()
    }

    fn persist(&mut self, credentials: &StoredCredentials) -> Result<(), TokenStoreError> {
        self.as_mut().persist(credentials)
    }

    fn clear(&mut self) -> Result<(), TokenStoreError> {
        self.as_mut().clear()
    }
}

fn merge_credentials(entries: &mut BTreeMap<String, String>, credentials: &StoredCredentials) {
    if let Some(token) = &credentials.access_token {
        entries.insert(ACCESS_TOKEN_KEY.to_string(), token.clone());
    }
    if let Some(token) = &credentials.refresh_token {
        entries.insert(REFRESH_TOKEN_KEY.to_string(), token.clone());
    }
    entries.insert(IDENTITY_KEY.to_string(), credentials.identity.clone());
}

fn remove_portal_keys(entries: &mut BTreeMap<String, String>) {
    for key in STORE_KEYS {
        entries.remove(key);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryTokenStore {
    entries: BTreeMap<String, String>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Result<BTreeMap<String, String>, TokenStoreError> {
        Ok(self.entries.clone())
    }

    fn persist(&mut self, credentials: &StoredCredentials) -> Result<(), TokenStoreError> {
        merge_credentials(&mut self.entries, credentials);
        Ok(())
    }

    fn clear(&mut self) -> Result<(), TokenStoreError> {
        remove_portal_keys(&mut self.entries);
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// JSON object on disk, rewritten atomically on every change.
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write(&self, entries: &BTreeMap<String, String>) -> Result<(), TokenStoreError> {
        let mut encoded = serde_json::to_string_pretty(entries)?;
        encoded.push('\n');
        write_text_atomic(&self.path, &encoded)
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Result<BTreeMap<String, String>, TokenStoreError> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
                return Ok(BTreeMap::new());
            }
            Err(source) => {
                return Err(TokenStoreError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };
        if raw.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_json::from_str(&raw).map_err(|source| TokenStoreError::Malformed {
            path: self.path.clone(),
            source,
        })
    }

    fn persist(&mut self, credentials: &StoredCredentials) -> Result<(), TokenStoreError> {
        let mut entries = self.load()?;
        merge_credentials(&mut entries, credentials);
        self.write(&entries)?;
        tracing::debug!(path = %self.path.display(), "tokens persisted");
        Ok(())
    }

    fn clear(&mut self) -> Result<(), TokenStoreError> {
        let mut entries = self.load()?;
        if entries.is_empty() {
            return Ok(());
        }
        remove_portal_keys(&mut entries);
        self.write(&entries)
    }
}
