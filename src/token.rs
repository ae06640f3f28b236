//! Bearer token storage.
//!
//! The credential attached to outgoing requests lives in a [`TokenStore`]
//! that is handed to the client explicitly. The client reads the store on
//! every request and only writes to it through `set_token`/`clear_token`.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::RwLock;

/// Persistent holder of a single bearer token.
pub trait TokenStore: Send + Sync {
    /// Current token, or `None` when nothing is stored.
    fn load(&self) -> io::Result<Option<String>>;

    /// Replace the stored token.
    fn save(&self, token: &str) -> io::Result<()>;

    /// Remove the stored token. Clearing an empty store succeeds.
    fn clear(&self) -> io::Result<()>;
}

/// Process-local token store.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: RwLock<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: RwLock::new(Some(token.into())),
        }
    }
}

fn poisoned() -> io::Error {
    io::Error::other("token store lock poisoned")
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> io::Result<Option<String>> {
        Ok(self.token.read().map_err(|_| poisoned())?.clone())
    }

    fn save(&self, token: &str) -> io::Result<()> {
        *self.token.write().map_err(|_| poisoned())? = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> io::Result<()> {
        *self.token.write().map_err(|_| poisoned())? = None;
        Ok(())
    }
}

/// Token store backed by a single file.
///
/// # Format
///
/// The file holds the raw token. Surrounding whitespace is ignored, and a
/// missing or blank file means no token is stored.
///
/// Saves go through a temporary file in the same directory that is renamed
/// over the target, so readers never see a partial token. On Unix the file
/// is readable by its owner only (`0600`).
#[derive(Debug, Clone)]
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
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> io::Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => {
                let token = contents.trim();
                Ok((!token.is_empty()).then(|| token.to_string()))
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn save(&self, token: &str) -> io::Result<()> {
        let dir = match self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            Some(parent) => {
                fs::create_dir_all(parent)?;
                parent
            }
            None => Path::new("."),
        };

        let mut file = tempfile::NamedTempFile::new_in(dir)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            file.as_file().set_permissions(fs::Permissions::from_mode(0o600))?;
        }

        file.write_all(token.as_bytes())?;
        file.as_file().sync_all()?;
        file.persist(&self.path).map_err(|e| e.error)?;
        Ok(())
    }

    fn clear(&self) -> io::Result<()> {
        match fs::remove_file(&self.path) {
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            other => other,
        }
    }
}
