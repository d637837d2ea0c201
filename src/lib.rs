//! # Spelling Filter
//!
//! Spelling-bee word finder: given a letter set whose first letter is the
//! center letter, list every word of a word list that contains the center
//! letter and uses only letters from the set.
//!
//! ## Features
//!
//! - **Two-stage filter**: center-letter pre-filter, then a short-circuiting
//!   per-character check against the allowed set
//! - **Stable output**: matches keep word-list order
//! - **Encoding detection**: BOM sniffing and `chardetng` guessing, or a forced label
//! - **Optional deduplication**: keep only the first occurrence of a word
//!
//! ## Usage
//!
//! ```bash
//! # Prompt for letters and scan ./wordlist_15k.txt
//! spelling-filter
//!
//! # Letters on the command line
//! spelling-filter -l alcnpty --stats
//! ```
//!
//! ## Example
//!
//! ```rust,no_run
//! use spelling_filter::letters::Letters;
//! use spelling_filter::processor::{Processor, ProcessorConfig};
//!
//! let letters = Letters::parse("act").unwrap();
//! let processor = Processor::new(ProcessorConfig::default());
//! // let report = processor.scan(&letters).unwrap();
//! ```

pub mod cli;
pub mod console;
pub mod dedup;
pub mod encoding;
pub mod error;
pub mod filter;
pub mod letters;
pub mod output;
pub mod processor;

pub use cli::Args;
pub use error::FilterError;
pub use filter::{LetterFilter, ScannedLine, Verdict};
pub use letters::Letters;
pub use processor::{Processor, ProcessorConfig, ScanReport};
