//! src/store/snapshot.rs
//!
//! File persistence for the store: the whole state as one JSON document,
//! replaced atomically on every write.

use crate::{error::Result, store::Collections};
use std::{
    io,
    path::{Path, PathBuf},
};
use tokio::fs;

#[derive(Debug, Clone)]
pub struct Snapshot {
    path: PathBuf,
}

impl Snapshot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the snapshot. A missing file is an empty store, not an error.
    pub async fn load(&self) -> Result<Option<Collections>> {
        match fs::read(&self.path).await {
            Ok(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Writes to a sibling temp file and renames it over the snapshot.
    pub async fn save(&self, collections: &Collections) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }
        let bytes = serde_json::to_vec_pretty(collections)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, bytes).await?;
        fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}
