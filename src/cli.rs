//! Command-line interface definition for spelling-filter
//!
//! Every flag is optional; with none given the tool prompts for letters and
//! scans `wordlist_15k.txt` in the working directory.

use clap::Parser;
use std::path::PathBuf;

use crate::processor::DEFAULT_WORDLIST;

/// Spelling-bee word finder
///
/// Lists every word of a word list that contains the center letter and is
/// built only from the given letters.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "spelling-filter",
    author = "m0h1nd4",
    version,
    about = "Find every word spelled from a letter set that uses the center letter",
    long_about = r#"
Reads a letter set, takes its first letter as the center letter, and prints
every word of the word list that contains the center letter and uses no
letter outside the set. Matching is case-sensitive. Results keep word-list
order and are followed by the scan's execution time.

EXAMPLES:
    # Prompt for letters, scan ./wordlist_15k.txt
    spelling-filter

    # Letters on the command line, center letter 'a'
    spelling-filter -l alcnpty

    # Custom word list, drop repeated words, show statistics
    spelling-filter -w words.txt -l rgaimno --unique --stats

    # Write matches to a file
    spelling-filter -l alcnpty -o matches.txt
"#
)]
pub struct Args {
    /// Word list, one word per line
    #[arg(short, long, value_name = "PATH", default_value = DEFAULT_WORDLIST)]
    pub wordlist: PathBuf,

    /// Letters to use, center letter first (prompted for when omitted)
    #[arg(short, long, value_name = "LETTERS")]
    pub letters: Option<String>,

    /// Print each matched word only once
    #[arg(short, long, default_value_t = false)]
    pub unique: bool,

    /// Write matched words to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Word-list encoding label (default: auto-detect)
    #[arg(long, value_name = "LABEL")]
    pub encoding: Option<String>,

    /// Show scan statistics on stderr
    #[arg(long, default_value_t = false)]
    pub stats: bool,

    /// Quiet mode - minimal output
    #[arg(short, long, default_value_t = false, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose mode - detailed logging
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["spelling-filter"]).unwrap();

        assert_eq!(args.wordlist, PathBuf::from("wordlist_15k.txt"));
        assert!(args.letters.is_none());
        assert!(!args.unique);
        assert!(args.output.is_none());
    }

    #[test]
    fn test_all_flags() {
        let args = Args::try_parse_from([
            "spelling-filter",
            "-w", "words.txt",
            "-l", "act",
            "--unique",
            "-o", "out.txt",
            "--encoding", "latin1",
            "--stats",
        ])
        .unwrap();

        assert_eq!(args.wordlist, PathBuf::from("words.txt"));
        assert_eq!(args.letters.as_deref(), Some("act"));
        assert!(args.unique);
        assert_eq!(args.output, Some(PathBuf::from("out.txt")));
        assert_eq!(args.encoding.as_deref(), Some("latin1"));
        assert!(args.stats);
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Args::try_parse_from(["spelling-filter", "-q", "-v"]).is_err());
    }
}
