//! The rule registry: declarative per-key validation rules.
//!
//! Rules are declared with a builder and compiled into a [`RuleSet`] before
//! any value is evaluated. Compilation validates every declared pattern and
//! rejects duplicate keys, accumulating ALL registry defects with
//! stillwater's `Validation` so a broken registry reports every bad rule in
//! one pass.
//!
//! Patterns are anchored at the start of the value: a rule pattern `p` is
//! compiled as `^(?:p)`, so `^sk-` and `sk-` behave identically and neither
//! matches `xsk-...`.

use regex::Regex;
use stillwater::Validation;

use crate::error::{RegistryError, RegistryErrors, RuleValidation};

/// A declarative validation rule for one configuration key.
///
/// # Example
///
/// ```
/// use preflight::rules::{Rule, RuleSet};
///
/// let rules = RuleSet::builder()
///     .required(
///         Rule::new("PROJECT_NAME")
///             .pattern("^[a-z][a-z0-9_-]+$")
///             .message("must be a lowercase identifier")
///             .placeholder("CHANGE_ME"),
///     )
///     .optional(Rule::new("GITHUB_TOKEN").pattern("^(ghp_|gho_|github_pat_)"))
///     .build()
///     .expect("valid registry");
///
/// assert_eq!(rules.required_rules()[0].key(), "PROJECT_NAME");
/// ```
#[derive(Debug, Clone)]
pub struct Rule {
    key: String,
    pattern: Option<String>,
    message: Option<String>,
    placeholder: Option<String>,
}

impl Rule {
    /// Start a rule for the given key.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            pattern: None,
            message: None,
            placeholder: None,
        }
    }

    /// Require the value to match this pattern, anchored at the start.
    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    /// Human-readable message reported when the pattern does not match.
    ///
    /// Defaults to a generic format message when not set.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// A rule-specific placeholder marker, matched case-sensitively as a
    /// substring, in addition to the generic placeholder detector.
    pub fn placeholder(mut self, marker: impl Into<String>) -> Self {
        self.placeholder = Some(marker.into());
        self
    }
}

/// A rule whose pattern has been compiled and validated.
#[derive(Debug, Clone)]
pub struct CompiledRule {
    pub(crate) key: String,
    pub(crate) pattern: Option<Regex>,
    pub(crate) raw_pattern: Option<String>,
    pub(crate) message: String,
    pub(crate) placeholder: Option<String>,
    pub(crate) required: bool,
}

impl CompiledRule {
    /// The configuration key this rule checks.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Whether absence of this key fails the run.
    pub fn required(&self) -> bool {
        self.required
    }

    /// The message reported on a pattern mismatch.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The declared pattern text, before anchoring.
    pub fn pattern_text(&self) -> Option<&str> {
        self.raw_pattern.as_deref()
    }
}

/// An immutable registry of compiled rules, split into required and
/// optional collections that iterate in declaration order.
///
/// Report ordering follows these collections, so output is stable across
/// runs.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    required: Vec<CompiledRule>,
    optional: Vec<CompiledRule>,
}

impl RuleSet {
    /// Start building a rule set.
    pub fn builder() -> RuleSetBuilder {
        RuleSetBuilder::default()
    }

    /// Required rules, in declaration order.
    pub fn required_rules(&self) -> &[CompiledRule] {
        &self.required
    }

    /// Optional rules, in declaration order.
    pub fn optional_rules(&self) -> &[CompiledRule] {
        &self.optional
    }

    /// Total number of rules.
    pub fn len(&self) -> usize {
        self.required.len() + self.optional.len()
    }

    /// Check if the registry has no rules.
    pub fn is_empty(&self) -> bool {
        self.required.is_empty() && self.optional.is_empty()
    }
}

/// Builder collecting rules in declaration order.
#[derive(Debug, Clone, Default)]
pub struct RuleSetBuilder {
    entries: Vec<(Rule, bool)>,
}

impl RuleSetBuilder {
    /// Register a required rule: absence or invalidity fails the run.
    pub fn required(mut self, rule: Rule) -> Self {
        self.entries.push((rule, true));
        self
    }

    /// Register an optional rule: validated only when a value is present.
    pub fn optional(mut self, rule: Rule) -> Self {
        self.entries.push((rule, false));
        self
    }

    /// Compile every rule, accumulating all registry defects.
    ///
    /// Invalid patterns and duplicate keys are all reported together; a
    /// registry that fails here must be fixed before any value can be
    /// evaluated.
    pub fn build(self) -> Result<RuleSet, RegistryErrors> {
        let mut seen = std::collections::BTreeSet::new();
        let mut validations: Vec<RuleValidation<CompiledRule>> =
            Vec::with_capacity(self.entries.len());

        for (rule, required) in self.entries {
            if !seen.insert(rule.key.clone()) {
                validations.push(Validation::Failure(RegistryErrors::single(
                    RegistryError::DuplicateKey { key: rule.key },
                )));
                continue;
            }
            validations.push(compile(rule, required));
        }

        match Validation::all_vec(validations) {
            Validation::Success(rules) => {
                let (required, optional) = rules.into_iter().partition(|r| r.required);
                Ok(RuleSet { required, optional })
            }
            Validation::Failure(errors) => Err(errors),
        }
    }
}

/// Compile a single rule, anchoring its pattern at the start.
fn compile(rule: Rule, required: bool) -> RuleValidation<CompiledRule> {
    let Rule {
        key,
        pattern,
        message,
        placeholder,
    } = rule;

    let (compiled, raw_pattern) = match pattern {
        None => (None, None),
        Some(raw) => match Regex::new(&format!("^(?:{})", raw)) {
            Ok(regex) => (Some(regex), Some(raw)),
            Err(e) => {
                return Validation::Failure(RegistryErrors::single(
                    RegistryError::InvalidPattern {
                        key,
                        pattern: raw,
                        message: e.to_string(),
                    },
                ))
            }
        },
    };

    Validation::Success(CompiledRule {
        message: message.unwrap_or_else(|| "value does not match the expected format".to_string()),
        key,
        pattern: compiled,
        raw_pattern,
        placeholder,
        required,
    })
}
