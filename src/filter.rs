//! Word filtering module
//!
//! Accepts a word when it contains the center letter and uses only allowed letters.

use crate::error::Result;
use crate::letters::{LetterSet, Letters};

/// Outcome of checking a single trimmed, non-empty word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Word contains the center letter and only allowed letters
    Accepted,
    /// Center letter does not occur in the word
    MissingCenter,
    /// First character found outside the allowed set
    Disallowed(char),
}

/// One word-list line after trimming
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScannedLine {
    /// Empty once surrounding whitespace is removed
    Blank,
    /// Trimmed word and how the filter judged it
    Word { word: String, verdict: Verdict },
}

/// Filter built from a [`Letters`] input
#[derive(Debug, Clone)]
pub struct LetterFilter {
    center: char,
    /// Set when the center letter is ASCII, enabling a byte search
    center_byte: Option<u8>,
    allowed: LetterSet,
}

impl LetterFilter {
    pub fn new(letters: &Letters) -> Self {
        let center = letters.center();
        let center_byte = center.is_ascii().then_some(center as u8);

        Self {
            center,
            center_byte,
            allowed: letters.allowed().clone(),
        }
    }

    /// Classify a word. Matching is case-sensitive and literal.
    #[inline]
    pub fn check(&self, word: &str) -> Verdict {
        // Cheap pre-filter before the per-character scan
        let has_center = match self.center_byte {
            Some(b) => memchr::memchr(b, word.as_bytes()).is_some(),
            None => word.contains(self.center),
        };
        if !has_center {
            return Verdict::MissingCenter;
        }

        match word.chars().find(|c| !self.allowed.contains(c)) {
            Some(c) => Verdict::Disallowed(c),
            None => Verdict::Accepted,
        }
    }

    /// Lazily classify raw lines: trims each one, marks blanks, and tags
    /// every word with its verdict. Read errors pass through untouched.
    pub fn classify_lines<'a, I>(&'a self, lines: I) -> impl Iterator<Item = Result<ScannedLine>> + 'a
    where
        I: IntoIterator<Item = Result<String>>,
        I::IntoIter: 'a,
    {
        lines.into_iter().map(move |line| -> Result<ScannedLine> {
            let line = line?;
            let word = line.trim();
            if word.is_empty() {
                return Ok(ScannedLine::Blank);
            }

            let verdict = self.check(word);
            Ok(ScannedLine::Word {
                word: word.to_string(),
                verdict,
            })
        })
    }

    /// Lazily filter raw lines down to accepted words, in input order
    pub fn filter_lines<'a, I>(&'a self, lines: I) -> impl Iterator<Item = Result<String>> + 'a
    where
        I: IntoIterator<Item = Result<String>>,
        I::IntoIter: 'a,
    {
        self.classify_lines(lines).filter_map(|line| match line {
            Ok(ScannedLine::Word {
                word,
                verdict: Verdict::Accepted,
            }) => Some(Ok(word)),
            Ok(_) => None,
            Err(e) => Some(Err(e)),
        })
    }
}
