use std::fmt;

use crate::config::Config;
use crate::error::Result;
use crate::matcher::Matcher;

/// A single `(pattern, text, expected)` assertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Case {
    pub pattern: &'static str,
    pub text: &'static str,
    pub expected: bool,
}

const fn case(pattern: &'static str, text: &'static str, expected: bool) -> Case {
    Case {
        pattern,
        text,
        expected,
    }
}

/// Scenarios covering literals, anchors and both quantifiers.
pub const SEED_CASES: &[Case] = &[
    case("a", "a", true),
    case("a", "b", false),
    case("ab", "ab", true),
    case("ab", "abc", true),
    case("ab$", "abc", false),
    case("^dab", "dabb", true),
    case("a*b", "b", true),
    case("a*b", "ab", true),
    case("a*b", "aaaaab", true),
    case("a*b", "a", false),
    case("a+", "a", true),
    case("a+", "ab", true),
    case("a+", "b", false),
    case("a+", "", false),
    case(".*ab", "asdfadsab", true),
    case(".*ab", "ab", true),
    case(".*ab", "absdfadsfa", true),
    case(".+ab", "asdfadsab", true),
    case(".+ab", "ab", false),
    case(".+ab", "absdfadsfa", false),
    case(".+ab", "aab", true),
    case("d+a+bb", "dabb", true),
    case("d+a+abb", "dabb", false),
    case("d+a+a*bb", "dabb", true),
    case("d+a+a*bb", "daaaaaabb", true),
];

/// An assertion that did not hold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    pub pattern: String,
    pub text: String,
    pub expected: bool,
    pub actual: Result<bool>,
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "pattern {:?} on text {:?}: expected {}, ",
            self.pattern, self.text, self.expected
        )?;
        match &self.actual {
            Ok(actual) => write!(f, "got {actual}"),
            Err(err) => write!(f, "got error: {err}"),
        }
    }
}

/// Runs assertions against the matcher and tallies the outcome.
#[derive(Debug, Default)]
pub struct Tester {
    config: Config,
    assertions: usize,
    failures: Vec<Failure>,
}

impl Tester {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Record one assertion; returns whether it held.
    pub fn run_test(&mut self, pattern: &str, text: &str, expected: bool) -> bool {
        self.assertions += 1;
        let actual = Matcher::with_config(pattern, self.config.clone()).try_is_match(text);
        if actual == Ok(expected) {
            return true;
        }
        self.failures.push(Failure {
            pattern: pattern.to_string(),
            text: text.to_string(),
            expected,
            actual,
        });
        false
    }

    pub fn run_all(&mut self, cases: &[Case]) {
        for c in cases {
            self.run_test(c.pattern, c.text, c.expected);
        }
    }

    pub fn assertions(&self) -> usize {
        self.assertions
    }

    pub fn successful(&self) -> usize {
        self.assertions - self.failures.len()
    }

    pub fn failures(&self) -> &[Failure] {
        &self.failures
    }

    pub fn all_passed(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn summary(&self) -> String {
        format!(
            "Tests complete: {}/{} assertions successful",
            self.successful(),
            self.assertions
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn seed_cases_all_pass() {
        let mut tester = Tester::default();
        tester.run_all(SEED_CASES);
        assert!(tester.all_passed(), "{:?}", tester.failures());
        assert_eq!(tester.assertions(), SEED_CASES.len());
        assert_eq!(tester.summary(), "Tests complete: 25/25 assertions successful");
    }

    #[test]
    fn wrong_expectation_is_recorded() {
        let mut tester = Tester::default();
        assert!(tester.run_test("a", "a", true));
        assert!(!tester.run_test("a", "b", true));
        assert_eq!(tester.successful(), 1);
        assert_eq!(tester.summary(), "Tests complete: 1/2 assertions successful");

        let failure = &tester.failures()[0];
        assert_eq!(failure.actual, Ok(false));
        assert_eq!(
            failure.to_string(),
            "pattern \"a\" on text \"b\": expected true, got false"
        );
    }

    #[test]
    fn exhausted_budget_is_a_failure() {
        let mut tester = Tester::new(Config::new().with_step_budget(Some(1)));
        assert!(!tester.run_test("ab", "ab", true));
        assert_eq!(
            tester.failures()[0].actual,
            Err(Error::BudgetExhausted { limit: 1 })
        );
        assert_eq!(
            tester.failures()[0].to_string(),
            "pattern \"ab\" on text \"ab\": expected true, got error: step budget of 1 exhausted before the search finished"
        );
    }
}
