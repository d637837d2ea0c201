//! Core processing engine
//!
//! Runs one timed scan of the word list against a set of letters.

use encoding_rs::Encoding;
use std::path::PathBuf;
use std::time::Instant;

use crate::cli::Args;
use crate::console::ScanStats;
use crate::dedup::create_deduplicator;
use crate::encoding::{encoding_for_label, WordSource};
use crate::error::Result;
use crate::filter::{LetterFilter, ScannedLine, Verdict};
use crate::letters::Letters;

/// Word list used when none is given
pub const DEFAULT_WORDLIST: &str = "wordlist_15k.txt";

/// Processor configuration
#[derive(Debug, Clone)]
pub struct ProcessorConfig {
    pub wordlist: PathBuf,
    pub unique: bool,
    /// Skip detection and decode with this encoding
    pub encoding: Option<&'static Encoding>,
}

impl ProcessorConfig {
    pub fn from_args(args: &Args) -> Result<Self> {
        let encoding = args
            .encoding
            .as_deref()
            .map(encoding_for_label)
            .transpose()?;

        Ok(Self {
            wordlist: args.wordlist.clone(),
            unique: args.unique,
            encoding,
        })
    }
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self {
            wordlist: PathBuf::from(DEFAULT_WORDLIST),
            unique: false,
            encoding: None,
        }
    }
}

/// Matched words in word-list order plus the numbers behind them
#[derive(Debug, Clone)]
pub struct ScanReport {
    pub words: Vec<String>,
    pub stats: ScanStats,
}

/// Main processor
pub struct Processor {
    config: ProcessorConfig,
}

impl Processor {
    pub fn new(config: ProcessorConfig) -> Self {
        Self { config }
    }

    /// Scan the word list once. The clock covers opening, decoding and
    /// filtering but not printing; nothing is returned but the error if any
    /// step fails.
    pub fn scan(&self, letters: &Letters) -> Result<ScanReport> {
        let start = Instant::now();

        // Open the word list and build the filter
        let source = WordSource::open(&self.config.wordlist, self.config.encoding)?;
        let filter = LetterFilter::new(letters);
        let mut dedup = create_deduplicator(self.config.unique);

        let mut stats = ScanStats {
            file_bytes: source.size(),
            encoding: source.encoding().name,
            ..ScanStats::new()
        };
        let mut words = Vec::new();

        // Single pass, word-list order preserved
        for line in filter.classify_lines(source) {
            stats.total_lines += 1;

            let (word, verdict) = match line? {
                ScannedLine::Blank => {
                    stats.blank_lines += 1;
                    continue;
                }
                ScannedLine::Word { word, verdict } => (word, verdict),
            };

            match verdict {
                Verdict::Accepted => {
                    if dedup.insert(&word) {
                        stats.matched += 1;
                        words.push(word);
                    } else {
                        stats.duplicates += 1;
                    }
                }
                Verdict::MissingCenter => stats.missing_center += 1,
                Verdict::Disallowed(c) => {
                    log::trace!("Rejected {:?}: {:?} not allowed", word, c);
                    stats.disallowed += 1;
                }
            }
        }

        stats.elapsed = start.elapsed();

        log::debug!(
            "Scanned {} lines from {:?}: {} matches (dedup size {}), {} rejected",
            stats.total_lines,
            self.config.wordlist,
            stats.matched,
            dedup.len(),
            stats.rejected()
        );

        Ok(ScanReport { words, stats })
    }
}
