use clap::Parser;
use std::io::IsTerminal;

/// Print lines containing a pattern, ignoring case.
///
/// Patterns are always literal text: `.`, `*`, `(` and the other regex
/// metacharacters match only themselves.
#[derive(Parser, Debug, Default)]
#[command(version, long_version = crate::version::long_version())]
pub struct Cli {
    /// Pattern a line must contain to be printed
    pub pattern: Option<String>,

    /// Input file path (if not provided, reads from stdin)
    pub file: Option<String>,

    /// Additional pattern a line may contain instead (repeatable)
    #[arg(short, long = "include", value_name = "PATTERN")]
    pub include: Vec<String>,

    /// Drop lines containing this pattern (repeatable)
    #[arg(short, long = "exclude", value_name = "PATTERN")]
    pub exclude: Vec<String>,

    /// Print the lines that do not pass the filters
    #[arg(short = 'v', long)]
    pub invert: bool,

    /// Print only the number of selected lines
    #[arg(short, long)]
    pub count: bool,

    /// Prefix each line with its line number
    #[arg(short = 'n', long)]
    pub line_number: bool,

    /// Path to config file
    #[arg(long)]
    pub config: Option<String>,

    /// Write debug logs to this file (filtered with RUST_LOG)
    #[arg(long, value_name = "PATH")]
    pub debug_log: Option<String>,
}

impl Cli {
    pub fn should_use_stdin(&self) -> bool {
        self.file.is_none() && !std::io::stdin().is_terminal()
    }
}
