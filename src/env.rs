//! ConfigEnv trait for testable I/O.
//!
//! This module provides the `ConfigEnv` trait that abstracts file system and
//! environment variable access, enabling dependency injection for testing.
//! The snapshot loader performs all of its I/O through this trait, so the
//! rest of the pipeline stays pure and testable without touching the real
//! process environment.

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

/// Environment trait for configuration I/O operations.
///
/// # Example
///
/// ```ignore
/// // Production
/// let snapshot = Snapshot::from_env(&RealEnv::new());
///
/// // Testing
/// let env = MockEnv::new()
///     .with_env("PROJECT_NAME", "my-app")
///     .with_file(".env", "GITHUB_TOKEN=ghp_abc123\n");
/// let snapshot = Snapshot::from_env(&env);
/// ```
pub trait ConfigEnv: Send + Sync {
    /// Read a file's contents as a UTF-8 string.
    ///
    /// # Errors
    ///
    /// Returns `io::Error` if:
    /// - File does not exist (`ErrorKind::NotFound`)
    /// - File is not valid UTF-8
    /// - Permission denied
    /// - Other I/O errors
    fn read_file(&self, path: &Path) -> io::Result<String>;

    /// Get an environment variable by name.
    ///
    /// Returns `None` if the variable is not set.
    fn get_env(&self, name: &str) -> Option<String>;

    /// Get all environment variables.
    fn all_env_vars(&self) -> Vec<(String, String)>;
}

/// Production environment using standard library I/O.
///
/// This is a zero-cost abstraction - all methods are simple wrappers
/// around std functions.
#[derive(Debug, Clone, Copy, Default)]
pub struct RealEnv;

impl RealEnv {
    /// Create a new real environment.
    pub fn new() -> Self {
        Self
    }
}

impl ConfigEnv for RealEnv {
    fn read_file(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn get_env(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }

    fn all_env_vars(&self) -> Vec<(String, String)> {
        std::env::vars().collect()
    }
}

/// Mock file state for testing.
#[derive(Debug, Clone)]
enum MockFile {
    Content(String),
    PermissionDenied,
}

/// Mock environment for testing snapshot loading.
///
/// # Example
///
/// ```
/// use preflight::env::MockEnv;
///
/// let env = MockEnv::new()
///     .with_env("PROJECT_NAME", "my-app")
///     .with_file(".env", "GITHUB_TOKEN=ghp_abc123\n");
/// ```
#[derive(Debug, Default)]
pub struct MockEnv {
    files: HashMap<PathBuf, MockFile>,
    env_vars: HashMap<String, String>,
}

impl MockEnv {
    /// Create a new empty mock environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file with content.
    ///
    /// The path can be relative or absolute. Paths not added at all behave
    /// as missing files.
    pub fn with_file(mut self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        self.files
            .insert(path.into(), MockFile::Content(content.into()));
        self
    }

    /// Add a file that will return "permission denied" error.
    pub fn with_unreadable_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.files.insert(path.into(), MockFile::PermissionDenied);
        self
    }

    /// Set an environment variable.
    pub fn with_env(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(name.into(), value.into());
        self
    }

    /// Set multiple environment variables from an iterator.
    pub fn with_envs<I, K, V>(mut self, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (k, v) in vars {
            self.env_vars.insert(k.into(), v.into());
        }
        self
    }
}

impl ConfigEnv for MockEnv {
    fn read_file(&self, path: &Path) -> io::Result<String> {
        match self.files.get(path) {
            Some(MockFile::Content(content)) => Ok(content.clone()),
            Some(MockFile::PermissionDenied) => Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("mock permission denied: {}", path.display()),
            )),
            None => Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("mock file not found: {}", path.display()),
            )),
        }
    }

    fn get_env(&self, name: &str) -> Option<String> {
        self.env_vars.get(name).cloned()
    }

    fn all_env_vars(&self) -> Vec<(String, String)> {
        self.env_vars
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }
}
