//! Command-line argument parsing.
//!
//! The workflow itself is interactive; flags only tune diagnostics and
//! the rendering of the summary blocks.

use clap::Parser;

/// Environment variable holding the default output format.
pub const FORMAT_ENV: &str = "FILE_PROCESSOR_FORMAT";

/// File Processor: read a text file, normalize spacing, write the result.
#[derive(Parser, Debug)]
#[command(name = "file-processor")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable debug diagnostics on stderr.
    #[arg(short, long)]
    pub verbose: bool,

    /// Format of the report and file information blocks (text, json).
    #[arg(long, default_value = "text", env = FORMAT_ENV)]
    pub format: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parse() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_verbose_flag() {
        let cli = Cli::try_parse_from(["file-processor", "-v"]).unwrap();
        assert!(cli.verbose);
    }

    #[test]
    fn test_format_flag() {
        let cli = Cli::try_parse_from(["file-processor", "--format", "json"]).unwrap();
        assert_eq!(cli.format, "json");
    }

    #[test]
    fn test_rejects_positional_arguments() {
        assert!(Cli::try_parse_from(["file-processor", "input.txt"]).is_err());
    }
}
