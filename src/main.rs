// ParsoTangue: source → JSON syntax tree

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{ArgAction, Parser};
use tracing_subscriber::EnvFilter;

use parsotangue::driver;

#[derive(Debug, Parser)]
#[command(
    name = "parsotangue",
    version,
    about = "Parse a ParsoTangue source file and write its syntax tree as JSON"
)]
struct Cli {
    /// Source file to parse
    #[arg(short, long, value_name = "FILE")]
    source: PathBuf,

    /// Where to write the JSON syntax tree (created or truncated)
    #[arg(short, long, value_name = "FILE")]
    output: PathBuf,

    /// Increase logging verbosity (-v: debug, -vv+: trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(directive_for_verbosity(cli.verbose))),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    driver::compile_file(&cli.source, &cli.output)
        .with_context(|| format!("could not compile {}", cli.source.display()))?;
    Ok(())
}

fn directive_for_verbosity(v: u8) -> &'static str {
    // Target is the library's module path, not the binary name.
    match v {
        0 => "parsotangue=warn",
        1 => "parsotangue=debug",
        _ => "parsotangue=trace",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn directive_defaults() {
        assert_eq!(directive_for_verbosity(0), "parsotangue=warn");
        assert_eq!(directive_for_verbosity(1), "parsotangue=debug");
        assert_eq!(directive_for_verbosity(5), "parsotangue=trace");
    }

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn cli_requires_source_and_output() {
        assert!(Cli::try_parse_from(["parsotangue", "-s", "a.pt"]).is_err());
        assert!(Cli::try_parse_from(["parsotangue", "-o", "a.json"]).is_err());

        let cli = Cli::try_parse_from(["parsotangue", "-s", "a.pt", "-o", "a.json", "-vv"]).unwrap();
        assert_eq!(cli.source, PathBuf::from("a.pt"));
        assert_eq!(cli.output, PathBuf::from("a.json"));
        assert_eq!(cli.verbose, 2);
    }
}
