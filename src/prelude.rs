//! Convenient re-exports for common preflight usage.
//!
//! ```ignore
//! use preflight::prelude::*;
//!
//! let rules = RuleSet::builder()
//!     .required(Rule::new("PROJECT_NAME").pattern("^[a-z][a-z0-9_-]+$"))
//!     .build()?;
//!
//! let snapshot = Snapshot::from_env(&RealEnv::new());
//! let report = Reporter::new(ColorOption::Auto, &mut std::io::stdout())
//!     .run(&rules, &snapshot, false);
//! ```

// ============================================================================
// Environment abstractions
// ============================================================================

/// Trait for abstracting I/O operations. Enables testable snapshot loading.
pub use crate::env::ConfigEnv;

/// Real environment implementation for production use.
pub use crate::env::RealEnv;

/// Mock environment for testing.
pub use crate::env::MockEnv;

// ============================================================================
// Error types
// ============================================================================

/// Per-key validation failure with a `Display` diagnostic line.
pub use crate::error::Violation;

/// Failure to read an existing settings file.
pub use crate::error::SnapshotError;

/// A single rule-registry defect.
pub use crate::error::RegistryError;

/// Non-empty collection of registry defects. Implements `Semigroup`.
pub use crate::error::RegistryErrors;

/// Type alias: `Validation<T, RegistryErrors>`.
pub use crate::error::RuleValidation;

// ============================================================================
// Core types
// ============================================================================

/// Pure placeholder detection over the generic marker table.
pub use crate::placeholder::is_placeholder;

/// Immutable snapshot of resolved configuration values.
pub use crate::snapshot::Snapshot;

/// Where a resolved value came from.
pub use crate::snapshot::Origin;

/// Declarative rule builder.
pub use crate::rules::Rule;

/// A rule with its pattern compiled and validated.
pub use crate::rules::CompiledRule;

/// Ordered, compiled rule registry.
pub use crate::rules::RuleSet;

/// Builder collecting rules in declaration order.
pub use crate::rules::RuleSetBuilder;

/// The outcome of evaluating one rule.
pub use crate::validate::Verdict;

/// Evaluate one rule against the snapshot.
pub use crate::validate::evaluate;

// ============================================================================
// Reporting
// ============================================================================

/// The outcome of one full validation pass.
pub use crate::report::Report;

/// Streams per-key status lines and the summary to a writer.
pub use crate::report::Reporter;

/// Color output option.
pub use crate::report::ColorOption;

/// Truncate a validated value for safe display.
pub use crate::report::mask;

// ============================================================================
// Stillwater re-exports (core functional programming types)
// ============================================================================

/// Result type with error accumulation, used for registry compilation.
pub use stillwater::Validation;

/// Trait for combining values. `RegistryErrors` implements this.
pub use stillwater::Semigroup;

/// Guaranteed non-empty collection. Underlying type for `RegistryErrors`.
pub use stillwater::NonEmptyVec;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prelude_types_available() {
        let _: RuleValidation<()> = Validation::Success(());
        let errors = RegistryErrors::single(RegistryError::DuplicateKey {
            key: "A".to_string(),
        });
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_prelude_core_flow() {
        let env = MockEnv::new().with_env("PROJECT_NAME", "my-app");
        let rules = RuleSet::builder()
            .required(Rule::new("PROJECT_NAME").pattern("^[a-z][a-z0-9_-]+$"))
            .build()
            .unwrap();
        let snapshot = Snapshot::from_env(&env);

        assert!(evaluate(&rules.required_rules()[0], &snapshot).is_valid());
    }
}
