/// Matches any single character.
pub const WILDCARD: char = '.';
/// Start anchor, meaningful only at pattern position 0.
pub const START_ANCHOR: char = '^';
/// End anchor, meaningful only at the last pattern position.
pub const END_ANCHOR: char = '$';
/// Zero-or-more suffix.
pub const STAR: char = '*';
/// One-or-more suffix.
pub const PLUS: char = '+';

/// Quantifier suffix that can follow a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantifier {
    ZeroOrMore,
    OneOrMore,
}

impl Quantifier {
    /// Classify the character that follows a token.
    ///
    /// Example:
    /// - `*` → Some(ZeroOrMore)
    /// - `+` → Some(OneOrMore)
    /// - `a` → None
    pub fn from_suffix(c: char) -> Option<Quantifier> {
        match c {
            STAR => Some(Quantifier::ZeroOrMore),
            PLUS => Some(Quantifier::OneOrMore),
            _ => None,
        }
    }
}

/// Checks if a single text character is matched by a single pattern token.
///
/// Only `.` is special here. Anchors and quantifier characters reaching this
/// point are out of position and compare as literals.
pub fn token_matches(token: char, c: char) -> bool {
    token == WILDCARD || token == c
}

/// Length of the run of characters matched by `token`, starting at `pos`.
pub fn run_len(token: char, text: &[char], pos: usize) -> usize {
    text.get(pos..)
        .map(|rest| rest.iter().take_while(|&&c| token_matches(token, c)).count())
        .unwrap_or(0)
}
