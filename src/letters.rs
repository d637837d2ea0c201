//! Letters input
//!
//! Turns the line the user types into a center letter and an allowed-letter set.

use ahash::RandomState;
use hashbrown::HashSet;
use std::io::{BufRead, Write};

use crate::error::{FilterError, Result};

/// Prompt shown before reading letters interactively
pub const PROMPT: &str = "Enter letters (first letter should be central letter): ";

/// Set of characters a matching word may use
pub type LetterSet = HashSet<char, RandomState>;

/// Center letter plus the allowed-letter set derived from one input line
#[derive(Debug, Clone)]
pub struct Letters {
    center: char,
    allowed: LetterSet,
}

impl Letters {
    /// Parse a letters line. Only the trailing line terminator is removed;
    /// every other character, whitespace included, is taken literally.
    pub fn parse(input: &str) -> Result<Self> {
        let input = input
            .strip_suffix('\n')
            .map(|s| s.strip_suffix('\r').unwrap_or(s))
            .unwrap_or(input);

        let mut chars = input.chars();
        let center = chars.next().ok_or_else(|| {
            FilterError::InvalidInput("no letters entered, a center letter is required".to_string())
        })?;

        let mut allowed = LetterSet::with_hasher(RandomState::new());
        allowed.insert(center);
        allowed.extend(chars);

        Ok(Self { center, allowed })
    }

    /// The letter every accepted word must contain
    pub fn center(&self) -> char {
        self.center
    }

    /// Distinct letters an accepted word may be built from
    pub fn allowed(&self) -> &LetterSet {
        &self.allowed
    }

    /// Allowed letters in a stable order, for display
    pub fn sorted_allowed(&self) -> Vec<char> {
        let mut v: Vec<_> = self.allowed.iter().copied().collect();
        v.sort_unstable();
        v
    }
}

/// Write the prompt to `prompt_sink` and read one line from `reader`.
///
/// End of input yields an empty string, which [`Letters::parse`] rejects.
pub fn read_letters<R: BufRead, W: Write>(reader: &mut R, prompt_sink: &mut W) -> Result<String> {
    write!(prompt_sink, "{}", PROMPT).map_err(|e| FilterError::from_io("<prompt>", e))?;
    prompt_sink
        .flush()
        .map_err(|e| FilterError::from_io("<prompt>", e))?;

    let mut line = String::new();
    reader
        .read_line(&mut line)
        .map_err(|e| FilterError::from_io("<stdin>", e))?;

    Ok(line)
}
