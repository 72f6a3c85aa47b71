//! Property-based tests using proptest.
//!
//! These tests verify the laws that must hold for all inputs, not just
//! hand-picked examples: the masking law, the strict-mode law, report
//! idempotence, placeholder case-insensitivity, and registry-order
//! stability.

use proptest::prelude::*;

use preflight::prelude::*;

/// The generic markers, as documented for the placeholder detector.
const MARKERS: &[&str] = &[
    "change_me",
    "your_",
    "<your-",
    "xxx",
    "placeholder",
    "example",
];

/// Randomly flip the case of each character.
fn randomize_case(value: &str, flips: &[bool]) -> String {
    value
        .chars()
        .enumerate()
        .map(|(i, ch)| {
            if flips.get(i).copied().unwrap_or(false) {
                ch.to_uppercase().next().unwrap_or(ch)
            } else {
                ch
            }
        })
        .collect()
}

fn single_required_rule(key: &str) -> RuleSet {
    RuleSet::builder()
        .required(Rule::new(key).pattern("^[a-z][a-z0-9_-]+$"))
        .build()
        .unwrap()
}

proptest! {
    /// Masking law: values longer than 10 chars echo as the first 10 chars
    /// plus `...`; shorter values echo unmasked.
    #[test]
    fn mask_law(value in "\\PC{0,40}") {
        let masked = mask(&value);
        let count = value.chars().count();

        if count > 10 {
            let visible: String = value.chars().take(10).collect();
            prop_assert_eq!(masked, format!("{}...", visible));
        } else {
            prop_assert_eq!(masked, value);
        }
    }

    /// Every generic marker is detected regardless of casing and
    /// surrounding text.
    #[test]
    fn placeholder_detection_is_case_insensitive(
        index in 0..MARKERS.len(),
        flips in prop::collection::vec(any::<bool>(), 0..16),
        prefix in "[a-z0-9-]{0,8}",
        suffix in "[a-z0-9-]{0,8}",
    ) {
        let marker = randomize_case(MARKERS[index], &flips);
        let value = format!("{}{}{}", prefix, marker, suffix);
        prop_assert!(is_placeholder(&value));
    }

    /// Digit-only values contain no marker (every marker has a letter), so
    /// the detector never fires on them.
    #[test]
    fn digits_are_never_placeholders(value in "[0-9]{1,32}") {
        prop_assert!(!is_placeholder(&value));
    }

    /// Strict-mode law: passed is true iff there are no errors and, in
    /// strict mode, no warnings.
    #[test]
    fn strict_mode_law(
        project in prop_oneof![
            Just(None),
            "[a-z][a-z0-9_-]{1,12}".prop_map(Some),
            Just(Some("CHANGE_ME".to_string())),
        ],
        token in prop_oneof![
            Just(None),
            Just(Some("ghp_1234567890".to_string())),
            Just(Some("not-a-token".to_string())),
        ],
        strict in any::<bool>(),
    ) {
        let rules = RuleSet::builder()
            .required(
                Rule::new("PROJECT_NAME")
                    .pattern("^[a-z][a-z0-9_-]+$")
                    .placeholder("CHANGE_ME"),
            )
            .optional(Rule::new("GITHUB_TOKEN").pattern("^(ghp_|gho_|github_pat_)"))
            .build()
            .unwrap();

        let mut env = MockEnv::new();
        if let Some(value) = project {
            env = env.with_env("PROJECT_NAME", value);
        }
        if let Some(value) = token {
            env = env.with_env("GITHUB_TOKEN", value);
        }
        let snapshot = Snapshot::from_env(&env);

        let mut buf = Vec::new();
        let report = Reporter::new(ColorOption::Never, &mut buf).run(&rules, &snapshot, strict);

        prop_assert_eq!(
            report.passed,
            report.errors.is_empty() && (!strict || report.warnings.is_empty())
        );
    }

    /// A required key whose value matches the pattern and is not a
    /// placeholder contributes zero errors and zero warnings.
    #[test]
    fn conforming_required_value_is_clean(value in "[a-df-w][a-df-w0-9_-]{1,16}") {
        // Alphabet avoids 'e' and 'x' so no generic marker can assemble.
        let rules = single_required_rule("PROJECT_NAME");
        let env = MockEnv::new().with_env("PROJECT_NAME", value);
        let snapshot = Snapshot::from_env(&env);

        let mut buf = Vec::new();
        let report = Reporter::new(ColorOption::Never, &mut buf).run(&rules, &snapshot, true);

        prop_assert!(report.passed);
        prop_assert!(report.errors.is_empty());
        prop_assert!(report.warnings.is_empty());
    }

    /// Running validation twice against the same snapshot yields identical
    /// reports and identical rendered output.
    #[test]
    fn validation_is_idempotent(
        value in prop_oneof![
            Just(String::new()),
            "[a-z][a-z0-9_-]{1,12}",
            Just("CHANGE_ME".to_string()),
            Just("Not Valid!".to_string()),
        ],
        strict in any::<bool>(),
    ) {
        let rules = single_required_rule("PROJECT_NAME");
        let env = MockEnv::new().with_env("PROJECT_NAME", value);
        let snapshot = Snapshot::from_env(&env);

        let mut first_buf = Vec::new();
        let first = Reporter::new(ColorOption::Never, &mut first_buf)
            .run(&rules, &snapshot, strict);
        let mut second_buf = Vec::new();
        let second = Reporter::new(ColorOption::Never, &mut second_buf)
            .run(&rules, &snapshot, strict);

        prop_assert_eq!(first, second);
        prop_assert_eq!(first_buf, second_buf);
    }

    /// Report ordering follows registry declaration order for any set of
    /// keys.
    #[test]
    fn report_order_matches_registry_order(
        keys in prop::collection::btree_set("[A-Z]{2,8}", 1..6),
    ) {
        let keys: Vec<String> = keys.into_iter().collect();

        let mut builder = RuleSet::builder();
        for key in &keys {
            builder = builder.required(Rule::new(key));
        }
        let rules = builder.build().unwrap();

        let declared: Vec<&str> = rules.required_rules().iter().map(|r| r.key()).collect();
        prop_assert_eq!(&declared, &keys.iter().map(String::as_str).collect::<Vec<_>>());

        // Every key is unset, so the error list mirrors registry order.
        let mut buf = Vec::new();
        let report = Reporter::new(ColorOption::Never, &mut buf)
            .run(&rules, &Snapshot::new(), false);
        let expected: Vec<String> = keys.iter().map(|k| format!("{} is not set", k)).collect();
        prop_assert_eq!(report.errors, expected);
    }
}
