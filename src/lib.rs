pub mod config;
pub mod error;
pub mod harness;
pub mod matcher;
pub mod token;

pub use config::{Config, PlusStrategy};
pub use error::{Error, Result};
pub use matcher::Matcher;

/// Checks if `pattern` matches anywhere in `text`, or from its start when the
/// pattern begins with `^`.
///
/// Runs without a step budget, so pathological patterns can take
/// exponential time. Use [`Matcher::with_config`] to bound a search.
pub fn matches(pattern: &str, text: &str) -> bool {
    Matcher::new(pattern).is_match(text)
}
