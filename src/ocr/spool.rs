use crate::Result;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, warn};
use uuid::Uuid;

/// Directory that holds uploads while they are forwarded to the OCR
/// provider.
pub struct UploadSpool {
    dir: PathBuf,
}

impl UploadSpool {
    pub async fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).await?;
        Ok(Self { dir })
    }

    /// Writes the uploaded bytes under a per-upload generated name,
    /// keeping the original extension.
    pub async fn store(&self, original_name: &str, data: &[u8]) -> Result<SpooledFile> {
        let extension = Path::new(original_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("bin");

        let path = self.dir.join(format!("{}.{}", Uuid::new_v4(), extension));
        fs::write(&path, data).await?;

        debug!(path = %path.display(), bytes = data.len(), "Spooled upload to disk");

        Ok(SpooledFile {
            path,
            original_name: original_name.to_string(),
            removed: false,
        })
    }
}

/// A spooled upload. The file is deleted when the handle is dropped,
/// unless `remove` already consumed it.
pub struct SpooledFile {
    path: PathBuf,
    original_name: String,
    removed: bool,
}

impl SpooledFile {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn original_name(&self) -> &str {
        &self.original_name
    }

    /// The upload contract accepts PDF only, decided by the
    /// client-supplied file name extension.
    pub fn is_pdf(&self) -> bool {
        Path::new(&self.original_name)
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("pdf"))
            .unwrap_or(false)
    }

    pub async fn read(&self) -> Result<Vec<u8>> {
        Ok(fs::read(&self.path).await?)
    }

    /// Deletes the spooled file once the provider call has succeeded.
    pub async fn remove(mut self) -> Result<()> {
        fs::remove_file(&self.path).await?;
        self.removed = true;
        Ok(())
    }
}

impl Drop for SpooledFile {
    fn drop(&mut self) {
        if self.removed {
            return;
        }
        if let Err(e) = std::fs::remove_file(&self.path) {
            warn!(path = %self.path.display(), "Failed to remove spooled upload: {}", e);
        }
    }
}
