//! Filesystem store for the generated `.env` and `docker-compose.yml`.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use log::info;
use tempfile::NamedTempFile;

use crate::domain::{AppError, ComposedStack};
use crate::ports::StackStore;

/// File name of the environment document.
pub const ENV_FILE: &str = ".env";
/// File name of the compose manifest.
pub const MANIFEST_FILE: &str = "docker-compose.yml";

/// Stack store rooted at an output directory.
#[derive(Debug, Clone)]
pub struct FilesystemStackStore {
    root: PathBuf,
}

impl FilesystemStackStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn env_path(&self) -> PathBuf {
        self.root.join(ENV_FILE)
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.root.join(MANIFEST_FILE)
    }

    /// Write content to a temp file next to its destination.
    ///
    /// The temp file is removed on drop unless it is persisted.
    fn stage(&self, content: &str) -> Result<NamedTempFile, AppError> {
        let mut file = tempfile::Builder::new().prefix(".n8n-setup-").tempfile_in(&self.root)?;
        file.write_all(content.as_bytes())?;
        file.as_file().sync_all()?;
        Ok(file)
    }
}

impl StackStore for FilesystemStackStore {
    fn read_previous_env(&self) -> Result<Option<String>, AppError> {
        match fs::read_to_string(self.env_path()) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn write_artifacts(&self, stack: &ComposedStack) -> Result<Vec<PathBuf>, AppError> {
        fs::create_dir_all(&self.root)?;

        // Stage both before replacing either. Unpersisted temp files are
        // removed when dropped.
        let env = self.stage(&stack.env)?;
        let manifest = self.stage(&stack.manifest)?;

        // Manifest first: a failed second rename must not leave a new `.env`
        // beside an old manifest.
        let (env_path, manifest_path) = (self.env_path(), self.manifest_path());
        for (staged, path) in [(manifest, &manifest_path), (env, &env_path)] {
            staged.persist(path).map_err(|e| AppError::Io(e.error))?;
            info!("Wrote {}", path.display());
        }

        Ok(vec![env_path, manifest_path])
    }
}
