//! Error types for the preflight validation engine.
//!
//! Per-key failures are modeled as `Violation` values that are collected
//! into the final report rather than propagated. Defects in the rule
//! registry itself are accumulated in a `RegistryErrors` collection built on
//! stillwater's `NonEmptyVec` and `Semigroup`, so a broken registry reports
//! every bad rule at once.

use std::fmt;

use stillwater::{NonEmptyVec, Semigroup, Validation};

/// A single per-key validation failure.
///
/// `Display` produces the diagnostic line that appears in the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// A required key has no resolved value.
    Missing { key: String },

    /// A resolved value is an unfilled template marker, either the rule's
    /// own marker or one of the generic markers.
    Placeholder { key: String, value: String },

    /// A resolved value fails its declared format check.
    PatternMismatch { key: String, message: String },
}

impl Violation {
    /// The configuration key this violation relates to.
    pub fn key(&self) -> &str {
        match self {
            Violation::Missing { key } => key,
            Violation::Placeholder { key, .. } => key,
            Violation::PatternMismatch { key, .. } => key,
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::Missing { key } => write!(f, "{} is not set", key),
            Violation::Placeholder { key, value } => {
                write!(f, "{} is still a placeholder, current value: {}", key, value)
            }
            Violation::PatternMismatch { key, message } => {
                write!(f, "{}: {}", key, message)
            }
        }
    }
}

impl std::error::Error for Violation {}

/// Failure to read an existing settings file.
///
/// A missing file is not an error (`Snapshot::load_file` returns
/// `Ok(false)`); this type covers files that exist but cannot be read,
/// such as permission problems or non-UTF-8 content.
#[derive(Debug, Clone)]
pub struct SnapshotError {
    /// Path of the settings file.
    pub path: String,
    /// Underlying I/O error message.
    pub message: String,
}

impl fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to read {}: {}", self.path, self.message)
    }
}

impl std::error::Error for SnapshotError {}

/// Defects in the rule registry itself, caught at startup before any value
/// is evaluated.
#[derive(Debug, Clone)]
pub enum RegistryError {
    /// A declared pattern failed to compile.
    InvalidPattern {
        key: String,
        pattern: String,
        message: String,
    },

    /// Two rules were declared for the same key.
    DuplicateKey { key: String },
}

impl RegistryError {
    /// The configuration key of the offending rule.
    pub fn key(&self) -> &str {
        match self {
            RegistryError::InvalidPattern { key, .. } => key,
            RegistryError::DuplicateKey { key } => key,
        }
    }
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::InvalidPattern {
                key,
                pattern,
                message,
            } => {
                write!(f, "rule for '{}': invalid pattern {:?}: {}", key, pattern, message)
            }
            RegistryError::DuplicateKey { key } => {
                write!(f, "duplicate rule for key '{}'", key)
            }
        }
    }
}

impl std::error::Error for RegistryError {}

/// A non-empty collection of registry errors.
///
/// Uses `NonEmptyVec` from stillwater to guarantee at least one error
/// exists, which prevents the "empty error list" anti-pattern and enables
/// a safe `first()`.
#[derive(Debug, Clone)]
pub struct RegistryErrors(pub NonEmptyVec<RegistryError>);

impl RegistryErrors {
    /// Create from a single error.
    pub fn single(error: RegistryError) -> Self {
        Self(NonEmptyVec::singleton(error))
    }

    /// Try to create from a vec, returning None if empty.
    pub fn from_vec(errors: Vec<RegistryError>) -> Option<Self> {
        NonEmptyVec::from_vec(errors).map(Self)
    }

    /// Get the first error (always exists).
    pub fn first(&self) -> &RegistryError {
        self.0.head()
    }

    /// Number of errors.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if empty (always false, but required for API consistency).
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Iterate over errors.
    pub fn iter(&self) -> impl Iterator<Item = &RegistryError> {
        self.0.iter()
    }
}

impl Semigroup for RegistryErrors {
    fn combine(self, other: Self) -> Self {
        Self(self.0.combine(other.0))
    }
}

impl From<RegistryError> for RegistryErrors {
    fn from(error: RegistryError) -> Self {
        Self::single(error)
    }
}

impl IntoIterator for RegistryErrors {
    type Item = RegistryError;
    type IntoIter = std::vec::IntoIter<RegistryError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_vec().into_iter()
    }
}

impl fmt::Display for RegistryErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Rule registry errors ({}):", self.len())?;
        for error in self.iter() {
            writeln!(f, "  {}", error)?;
        }
        Ok(())
    }
}

/// The standard validation result type for registry construction.
pub type RuleValidation<T> = Validation<T, RegistryErrors>;
