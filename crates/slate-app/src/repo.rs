// Rust guideline compliant 2026-08-28

//! Repository discovery and path management utilities.

use crate::error::{AppError, Result};
use slate_core::{Config, Storage, TaskData};
use std::path::{Path, PathBuf};

/// Repository path metadata for a Slate workspace.
#[derive(Debug, Clone)]
pub struct RepoContext {
    root: PathBuf,
    slate_dir: PathBuf,
    tasks_path: PathBuf,
    config_path: PathBuf,
}

impl RepoContext {
    /// Discovers a Slate repository starting from an optional root.
    ///
    /// # Arguments
    ///
    /// * `repo_root` - Optional repository root to pin discovery
    ///
    /// # Returns
    ///
    /// A `RepoContext` with resolved paths for the repository.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The repository root cannot be resolved
    /// - The `.slate` directory is missing
    pub fn discover(repo_root: Option<&Path>) -> Result<Self> {
        let root = match repo_root {
            Some(root) => root.to_path_buf(),
            None => std::env::current_dir()?,
        };
        let slate_dir = root.join(".slate");
        if !slate_dir.exists() {
            return Err(AppError::RepoNotInitialized {
                path: slate_dir.clone(),
            });
        }

        Ok(Self {
            root,
            tasks_path: slate_dir.join("tasks.json"),
            config_path: slate_dir.join("config.toml"),
            slate_dir,
        })
    }

    /// Initializes a Slate repository at the given root.
    ///
    /// Creates the `.slate` directory, an empty tasks document, and a
    /// default configuration file. Existing files are left untouched.
    ///
    /// # Arguments
    ///
    /// * `repo_root` - Optional repository root; defaults to the
    ///   current directory
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or files cannot be created.
    pub fn init(repo_root: Option<&Path>) -> Result<Self> {
        let root = match repo_root {
            Some(root) => root.to_path_buf(),
            None => std::env::current_dir()?,
        };
        let slate_dir = root.join(".slate");
        std::fs::create_dir_all(&slate_dir)?;

        let ctx = Self {
            root,
            tasks_path: slate_dir.join("tasks.json"),
            config_path: slate_dir.join("config.toml"),
            slate_dir,
        };

        if !ctx.tasks_path.exists() {
            ctx.open_storage()?.save(&TaskData::default())?;
        }
        if !ctx.config_path.exists() {
            Config::default().save(ctx.slate_dir())?;
        }

        Ok(ctx)
    }

    /// Returns the repository root path.
    #[must_use]
    pub fn root(&self) -> &Path {
        self.root.as_path()
    }

    /// Returns the `.slate` directory path.
    #[must_use]
    pub fn slate_dir(&self) -> &Path {
        self.slate_dir.as_path()
    }

    /// Returns the tasks JSON path.
    #[must_use]
    pub fn tasks_path(&self) -> &Path {
        self.tasks_path.as_path()
    }

    /// Returns the config TOML path.
    #[must_use]
    pub fn config_path(&self) -> &Path {
        self.config_path.as_path()
    }

    /// Opens storage for the tasks document.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage cannot be initialized.
    pub fn open_storage(&self) -> Result<Storage> {
        Ok(Storage::new(self.tasks_path.clone())?)
    }

    /// Loads repository configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded.
    pub fn load_config(&self) -> Result<Config> {
        Ok(Config::load(self.slate_dir())?)
    }
}
