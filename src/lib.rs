//! Preflight: validate environment configuration before your application
//! starts.
//!
//! Preflight checks a set of configuration values, resolved from the
//! process environment and an optional `.env`-style settings file, against
//! a declarative rule set. It catches missing values, leftover placeholder
//! values (like `CHANGE_ME`), and malformed values in one pass, reporting
//! every problem at once instead of failing on the first.
//!
//! # Core Concepts
//!
//! - **Error Accumulation**: find ALL configuration problems, not just the
//!   first one; registry defects are likewise accumulated before startup
//! - **Immutable Snapshot**: values are resolved once into a [`Snapshot`],
//!   so the evaluator is a pure function and runs are idempotent
//! - **Required vs Optional**: a missing required key fails the run; an
//!   optional key is validated only when a value is present
//! - **Testable I/O**: dependency injection via the [`ConfigEnv`] trait
//!
//! # Quick Start
//!
//! ```ignore
//! use preflight::prelude::*;
//!
//! fn main() -> std::process::ExitCode {
//!     let rules = RuleSet::builder()
//!         .required(
//!             Rule::new("PROJECT_NAME")
//!                 .pattern("^[a-z][a-z0-9_-]+$")
//!                 .placeholder("CHANGE_ME"),
//!         )
//!         .optional(Rule::new("GITHUB_TOKEN").pattern("^(ghp_|gho_|github_pat_)"))
//!         .build()
//!         .expect("valid registry");
//!
//!     let env = RealEnv::new();
//!     let mut snapshot = Snapshot::from_env(&env);
//!     snapshot.load_file(".env".as_ref(), &env).ok();
//!
//!     let mut stdout = std::io::stdout();
//!     let report = Reporter::new(ColorOption::Auto, &mut stdout)
//!         .run(&rules, &snapshot, false);
//!
//!     if report.passed {
//!         std::process::ExitCode::SUCCESS
//!     } else {
//!         std::process::ExitCode::FAILURE
//!     }
//! }
//! ```
//!
//! # Architecture
//!
//! Preflight follows the "pure core, imperative shell" pattern:
//!
//! - **Pure Core**: placeholder detection, rule evaluation, and report
//!   aggregation are pure functions of the rule set and the snapshot
//! - **Imperative Shell**: environment capture and settings-file reads go
//!   through the [`ConfigEnv`] trait, mockable in tests
//!
//! # Module Structure
//!
//! - [`prelude`]: convenient re-exports for common usage
//! - [`mod@env`]: `ConfigEnv` trait, `RealEnv`, and `MockEnv` for testing
//! - [`error`]: `Violation`, `SnapshotError`, and accumulated
//!   `RegistryErrors`
//! - [`placeholder`]: generic placeholder detection
//! - [`snapshot`]: the immutable value source, merged from environment and
//!   settings file (file values win)
//! - [`rules`]: the declarative rule registry and its compiling builder
//! - [`validate`]: the per-rule evaluator producing a [`Verdict`]
//! - [`report`]: streaming colorized reporter and the final [`Report`]

pub mod env;
pub mod error;
pub mod placeholder;
pub mod prelude;
pub mod report;
pub mod rules;
pub mod snapshot;
pub mod validate;

// Re-exports for convenience
pub use env::{ConfigEnv, MockEnv, RealEnv};
pub use error::{RegistryError, RegistryErrors, RuleValidation, SnapshotError, Violation};
pub use placeholder::is_placeholder;
pub use report::{mask, ColorOption, Report, Reporter};
pub use rules::{CompiledRule, Rule, RuleSet, RuleSetBuilder};
pub use snapshot::{Origin, Snapshot};
pub use validate::{evaluate, Verdict};

// Re-export stillwater types that are commonly used
pub use stillwater::{NonEmptyVec, Semigroup, Validation};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reexports() {
        // Ensure all re-exports are accessible
        let _: RuleValidation<()> = Validation::Success(());
    }
}
