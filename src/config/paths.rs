//! Path management
//!
//! ## Path Resolution Order
//!
//! 1. `SHOEBOX_DATA_DIR` environment variable (if set)
//! 2. The platform data directory: `$XDG_DATA_HOME/shoebox` on Linux,
//!    `~/Library/Application Support/shoebox` on macOS, `%APPDATA%\shoebox`
//!    on Windows

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::{ShoeboxError, ShoeboxResult};

/// Where the stores and the audit log live
#[derive(Debug, Clone)]
pub struct ShoeboxPaths {
    base_dir: PathBuf,
}

impl ShoeboxPaths {
    /// Resolve paths for the current user
    ///
    /// # Errors
    ///
    /// Fails when no home directory can be determined and
    /// `SHOEBOX_DATA_DIR` is not set.
    pub fn new() -> ShoeboxResult<Self> {
        let base_dir = if let Ok(custom) = std::env::var("SHOEBOX_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            let dirs = ProjectDirs::from("", "", "shoebox").ok_or_else(|| {
                ShoeboxError::Config("could not determine a home directory".to_string())
            })?;
            dirs.data_dir().to_path_buf()
        };

        Ok(Self { base_dir })
    }

    /// Paths rooted at a custom directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// The directory everything lives under
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// The contact store
    pub fn contacts_db(&self) -> PathBuf {
        self.base_dir.join("contacts.db")
    }

    /// The expense store
    pub fn expenses_db(&self) -> PathBuf {
        self.base_dir.join("expenses.db")
    }

    /// The audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Create the base directory if it does not exist yet
    pub fn ensure_directories(&self) -> ShoeboxResult<()> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| ShoeboxError::io(&self.base_dir, e))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ShoeboxPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.contacts_db(), temp_dir.path().join("contacts.db"));
        assert_eq!(paths.expenses_db(), temp_dir.path().join("expenses.db"));
        assert_eq!(paths.audit_log(), temp_dir.path().join("audit.log"));
    }

    #[test]
    fn test_env_var_override() {
        let temp_dir = TempDir::new().unwrap();
        let custom_path = temp_dir.path().to_str().unwrap();

        env::set_var("SHOEBOX_DATA_DIR", custom_path);
        let paths = ShoeboxPaths::new().unwrap();
        env::remove_var("SHOEBOX_DATA_DIR");

        assert_eq!(paths.base_dir(), temp_dir.path());
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path().join("nested").join("shoebox");
        let paths = ShoeboxPaths::with_base_dir(base.clone());

        paths.ensure_directories().unwrap();
        assert!(base.exists());
    }
}
