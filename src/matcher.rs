use log::{debug, trace, warn};

use crate::config::{Config, PlusStrategy};
use crate::error::{Error, Result};
use crate::token::{run_len, token_matches, Quantifier, END_ANCHOR, START_ANCHOR};

/// A pattern ready to be checked against any number of texts.
///
/// The pattern is kept as plain characters and interpreted positionally on
/// every search:
///
/// | token | meaning                                                  |
/// |-------|----------------------------------------------------------|
/// | `c`   | the literal character `c`                                |
/// | `.`   | any single character                                     |
/// | `^`   | start of text, only at position 0                        |
/// | `$`   | end of text, only at the last position                   |
/// | `x*`  | zero or more `x`, shortest first                         |
/// | `x+`  | one or more `x`, longest first unless configured lazy    |
///
/// Anything out of the positions above is a literal.
#[derive(Debug, Clone)]
pub struct Matcher {
    pattern: Vec<char>,
    config: Config,
}

impl Matcher {
    pub fn new(pattern: &str) -> Self {
        Self::with_config(pattern, Config::default())
    }

    pub fn with_config(pattern: &str, config: Config) -> Self {
        Self {
            pattern: pattern.chars().collect(),
            config,
        }
    }

    pub fn pattern(&self) -> &[char] {
        &self.pattern
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Decide whether the pattern matches somewhere in `text`.
    ///
    /// Fails only when a step budget is configured and the search outgrows it.
    pub fn try_is_match(&self, text: &str) -> Result<bool> {
        let text: Vec<char> = text.chars().collect();
        let mut search = Search::new(&self.pattern, &text, &self.config);
        let matched = search.run()?;
        debug!(
            "pattern {:?} {} after {} steps",
            self.pattern_string(),
            if matched { "matched" } else { "did not match" },
            search.steps()
        );
        Ok(matched)
    }

    /// Like [`Matcher::try_is_match`], but an exhausted budget counts as no match.
    pub fn is_match(&self, text: &str) -> bool {
        match self.try_is_match(text) {
            Ok(matched) => matched,
            Err(err) => {
                warn!(
                    "pattern {:?}: {err}, treating as no match",
                    self.pattern_string()
                );
                false
            }
        }
    }

    fn pattern_string(&self) -> String {
        self.pattern.iter().collect()
    }
}

/// State of one search: the borrowed pattern and text plus a step counter.
///
/// Cursors are passed by value between the stepper and the quantifier
/// handlers and always stay within `0..=len`.
pub(crate) struct Search<'a> {
    pattern: &'a [char],
    text: &'a [char],
    plus: PlusStrategy,
    budget: Option<u64>,
    steps: u64,
}

impl<'a> Search<'a> {
    pub(crate) fn new(pattern: &'a [char], text: &'a [char], config: &Config) -> Self {
        Self {
            pattern,
            text,
            plus: config.plus_strategy(),
            budget: config.step_budget(),
            steps: 0,
        }
    }

    pub(crate) fn steps(&self) -> u64 {
        self.steps
    }

    /// Driver: anchored at 0 for `^`, otherwise leftmost start offset wins.
    pub(crate) fn run(&mut self) -> Result<bool> {
        if self.pattern.first() == Some(&START_ANCHOR) {
            return self.match_here(1, 0);
        }
        // `..=` so an empty-matching pattern can still match at the very end.
        for start in 0..=self.text.len() {
            trace!("trying start offset {start}");
            if self.match_here(0, start)? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    fn tick(&mut self) -> Result<()> {
        self.steps += 1;
        match self.budget {
            Some(limit) if self.steps > limit => Err(Error::BudgetExhausted { limit }),
            _ => Ok(()),
        }
    }

    /// Stepper: match the pattern from `pat` against the text from `at`.
    fn match_here(&mut self, pat: usize, at: usize) -> Result<bool> {
        self.tick()?;

        // Base case: pattern is exhausted, so we have a match.
        let Some(&token) = self.pattern.get(pat) else {
            return Ok(true);
        };

        match self
            .pattern
            .get(pat + 1)
            .and_then(|&next| Quantifier::from_suffix(next))
        {
            Some(Quantifier::ZeroOrMore) => return self.match_star(token, pat + 2, at),
            Some(Quantifier::OneOrMore) => return self.match_plus(token, pat + 2, at),
            None => {}
        }

        if token == END_ANCHOR && pat + 1 == self.pattern.len() {
            return Ok(at == self.text.len());
        }

        match self.text.get(at) {
            Some(&c) if token_matches(token, c) => self.match_here(pat + 1, at + 1),
            _ => Ok(false),
        }
    }

    /// Star handler: zero occurrences first, then one more at a time.
    fn match_star(&mut self, token: char, pat: usize, mut at: usize) -> Result<bool> {
        loop {
            if self.match_here(pat, at)? {
                return Ok(true);
            }
            match self.text.get(at) {
                Some(&c) if token_matches(token, c) => at += 1,
                _ => return Ok(false),
            }
        }
    }

    fn match_plus(&mut self, token: char, pat: usize, at: usize) -> Result<bool> {
        match self.plus {
            PlusStrategy::Greedy => self.match_plus_greedy(token, pat, at),
            PlusStrategy::Lazy => self.match_plus_lazy(token, pat, at),
        }
    }

    /// Plus handler: take the whole run, then hand characters back one by one.
    fn match_plus_greedy(&mut self, token: char, pat: usize, at: usize) -> Result<bool> {
        // At least one occurrence is required right here.
        match self.text.get(at) {
            Some(&c) if token_matches(token, c) => {}
            _ => return Ok(false),
        }

        let mut found = run_len(token, self.text, at);
        if self.match_here(pat, at + found)? {
            return Ok(true);
        }

        // Every released character was part of the run, so it matches
        // `token`; stop before dropping the last occurrence.
        while found > 1 {
            found -= 1;
            if self.match_here(pat, at + found)? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    fn match_plus_lazy(&mut self, token: char, pat: usize, at: usize) -> Result<bool> {
        let run = run_len(token, self.text, at);
        for found in 1..=run {
            if self.match_here(pat, at + found)? {
                return Ok(true);
            }
        }
        Ok(false)
    }
}
