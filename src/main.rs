//! CLI entry point: parse the invocation, run the evaluation, map exit codes.

use clap::error::ErrorKind;
use clap::Parser;

#[derive(Parser)]
#[command(name = "rxcheck")]
#[command(author, version, about = "Test a regex for full matches against candidate strings", long_about = None)]
struct Args {
    /// Regular expression to evaluate
    pattern: String,

    /// Strings to match against the pattern
    #[arg(required = true)]
    tests: Vec<String>,
}

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            // --help and --version land here too; only a malformed
            // invocation exits non-zero.
            let usage_error = !matches!(
                err.kind(),
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion
            );
            let _ = err.print();
            if !usage_error {
                std::process::exit(0);
            }
            eprintln!("Example: rxcheck '^\\d{{3}}-\\d{{2}}-\\d{{4}}$' '123-45-6789' 'abc-def-ghij'");
            std::process::exit(1);
        }
    };

    let report = rxcheck::evaluate(&args.pattern, &args.tests);

    // Per-test mismatches are normal output; a pattern that failed to
    // compile is a usage-level failure the caller can detect.
    if report.error.is_some() {
        std::process::exit(2);
    }
}
