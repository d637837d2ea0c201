//! Spelling Filter - spelling-bee word finder
//!
//! Main entry point for the command-line application.

use anyhow::Context;
use clap::Parser;
use std::io::{self, Write};
use std::process;

use spelling_filter::cli::Args;
use spelling_filter::console::{print_error, print_header, print_info, print_success, print_warning};
use spelling_filter::letters::{read_letters, Letters};
use spelling_filter::output::{execution_time_line, write_report, ResultWriter};
use spelling_filter::processor::{Processor, ProcessorConfig};

fn main() {
    // Parse command-line arguments
    let args = Args::parse();

    // Set up logging
    if args.verbose {
        std::env::set_var("RUST_LOG", "debug");
    } else if !args.quiet {
        std::env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    // Run the application
    if let Err(e) = run(args) {
        print_error(&format!("{}", e));

        // Print chain of errors
        for cause in e.chain().skip(1) {
            print_error(&format!("  Caused by: {}", cause));
        }

        process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    // Create processor configuration
    let config = ProcessorConfig::from_args(&args)?;

    // Letters from the flag, or prompt for them
    let input = match args.letters {
        Some(ref letters) => letters.clone(),
        None => read_letters(&mut io::stdin().lock(), &mut io::stderr())?,
    };
    let letters = Letters::parse(&input)?;

    // Show configuration
    if args.verbose {
        print_config(&args, &config, &letters);
    }

    // Create and run processor
    let processor = Processor::new(config);
    let report = processor
        .scan(&letters)
        .with_context(|| format!("Failed to scan word list {:?}", args.wordlist))?;

    // Results to the output file or stdout; the timing line always to stdout
    match args.output {
        Some(ref path) => {
            let mut writer = ResultWriter::file(path)?;
            writer.write_words(&report.words)?;
            writer.flush()?;

            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{}", execution_time_line(report.stats.elapsed))?;

            if !args.quiet {
                print_success(&format!(
                    "{} words written to {:?}",
                    writer.lines_written(),
                    writer.target()
                ));
            }
        }
        None => {
            write_report(&report, &mut io::stdout().lock())
                .context("Failed to write results to stdout")?;
        }
    }

    if report.words.is_empty() && !args.quiet {
        print_warning("No words matched these letters");
    }

    // Print statistics
    if args.stats && !args.quiet {
        report.stats.print_summary();
    }

    Ok(())
}

/// Print configuration summary
fn print_config(args: &Args, config: &ProcessorConfig, letters: &Letters) {
    print_header("Configuration");

    print_info(&format!("Word list:    {:?}", config.wordlist));
    print_info(&format!("Center:       {:?}", letters.center()));
    print_info(&format!(
        "Allowed:      {}",
        letters.sorted_allowed().into_iter().collect::<String>()
    ));
    print_info(&format!(
        "Encoding:     {}",
        config.encoding.map_or("auto-detect", |e| e.name())
    ));
    print_info(&format!("Unique:       {}", config.unique));

    if let Some(ref output) = args.output {
        print_info(&format!("Output:       {:?}", output));
    }
}
