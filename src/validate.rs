//! The rule evaluator: one (rule, snapshot) pair in, one verdict out.
//!
//! `evaluate` is a pure function of the rule and the immutable snapshot.
//! Checks run in a strict order and short-circuit at the first applicable
//! outcome: unset, rule-specific placeholder marker, generic placeholder,
//! pattern mismatch, valid.

use crate::error::Violation;
use crate::placeholder::is_placeholder;
use crate::rules::CompiledRule;
use crate::snapshot::Snapshot;

/// The outcome of evaluating one rule against the snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// The value is present and passes every check.
    Valid,
    /// The value is present but fails a check.
    Invalid(Violation),
    /// No value is resolved for the key. An unset required key is an
    /// error; an unset optional key is informational.
    Unset { required: bool },
}

impl Verdict {
    /// Whether this verdict is `Valid`.
    pub fn is_valid(&self) -> bool {
        matches!(self, Verdict::Valid)
    }
}

/// Evaluate one rule against the snapshot.
///
/// The rule-specific placeholder marker is matched case-sensitively; the
/// generic markers are matched case-insensitively. Both run before the
/// pattern check, so a placeholder is reported as a placeholder even when
/// it would also fail (or pass) the pattern.
pub fn evaluate(rule: &CompiledRule, snapshot: &Snapshot) -> Verdict {
    let value = snapshot.get(rule.key());

    if value.is_empty() {
        return Verdict::Unset {
            required: rule.required(),
        };
    }

    let rule_marker_hit = rule
        .placeholder
        .as_deref()
        .is_some_and(|marker| value.contains(marker));
    if rule_marker_hit || is_placeholder(value) {
        return Verdict::Invalid(Violation::Placeholder {
            key: rule.key().to_string(),
            value: value.to_string(),
        });
    }

    if let Some(regex) = rule.pattern.as_ref() {
        if !regex.is_match(value) {
            return Verdict::Invalid(Violation::PatternMismatch {
                key: rule.key().to_string(),
                message: rule.message().to_string(),
            });
        }
    }

    Verdict::Valid
}
