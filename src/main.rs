mod convert;
mod frontmatter;
mod template;
mod web_assets;

use std::path::Path;
use std::process;

use clap::Parser;

/// Command-line surface: one or more markdown files, no other options.
#[derive(Parser)]
#[command(
    name = "mdwrap",
    version,
    about = "Convert markdown files into standalone, self-rendering HTML documents",
    after_help = "Each FILE is converted independently: a missing file is reported on\nstderr and does not stop the rest of the batch."
)]
struct Cli {
    /// Markdown files to convert
    #[arg(value_name = "FILE", required = true)]
    files: Vec<String>,
}

fn parse_cli() -> Cli {
    match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // Pass --help and --version through to clap's normal handling.
            use clap::error::ErrorKind;
            if matches!(
                err.kind(),
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion
            ) {
                err.exit();
            }
            eprintln!("Usage: mdwrap <file.md> [file2.md ...]");
            process::exit(1);
        }
    }
}

fn main() {
    let cli = parse_cli();

    // Files are processed one at a time in input order. Per-file failures are
    // reported and skipped; the process exit code stays zero.
    for file in &cli.files {
        match convert::convert(Path::new(file)) {
            Ok(output) => println!("Created: {}", output.display()),
            Err(err) => eprintln!("{err}"),
        }
    }
}
