use crate::cli::Cli;
use crate::config::Config;
use crate::filter::{Filter, FilterMode};
use crate::processing::filter_lines;
use color_eyre::{Result, eyre::WrapErr};
use num_format::{Locale, ToFormattedString};
use std::io::{self, BufWriter, Read, Write};
use tracing::{debug, info};

/// How selected lines are written out.
#[derive(Debug, Default, Clone, Copy)]
pub struct OutputOptions {
    pub count: bool,
    pub line_number: bool,
}

impl From<&Cli> for OutputOptions {
    fn from(args: &Cli) -> Self {
        Self {
            count: args.count,
            line_number: args.line_number,
        }
    }
}

/// Exit status when at least one line was selected.
pub const EXIT_SELECTED: u8 = 0;
/// Exit status when no line was selected.
pub const EXIT_NONE_SELECTED: u8 = 1;
/// Exit status for any error, including failed setup.
pub const EXIT_ERROR: u8 = 2;

/// Maps the outcome of a run to the process exit status, grep style.
pub fn exit_status(outcome: &Result<bool>) -> u8 {
    match outcome {
        Ok(true) => EXIT_SELECTED,
        Ok(false) => EXIT_NONE_SELECTED,
        Err(_) => EXIT_ERROR,
    }
}

/// Runs the line filter.
///
/// Returns whether at least one line was selected.
pub fn run(args: &Cli) -> Result<bool> {
    let config = Config::load(args.config.as_deref())?;
    if let Some(path) = config.get_path() {
        debug!("Using config file {}", path.display());
    }

    let filter = build_filter(args, &config)?;
    if filter.is_empty() {
        info!("No enabled filters, passing all lines");
    }
    let content = read_input(args)?;
    let lines: Vec<&str> = content.lines().collect();

    let selected = filter_lines(&lines, filter.get_filter_patterns(), args.invert);
    info!(
        "Selected {} of {} lines with {} filters",
        selected.len(),
        lines.len(),
        filter.get_filter_patterns().len()
    );

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let written = write_selected(&mut out, &lines, &selected, OutputOptions::from(args))
        .and_then(|_| out.flush());
    match written {
        Ok(()) => {}
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
            debug!("Output closed early");
        }
        Err(e) => return Err(color_eyre::Report::new(e).wrap_err("failed to write output")),
    }

    Ok(!selected.is_empty())
}

/// Collects config filters followed by the command line filters.
pub fn build_filter(args: &Cli, config: &Config) -> Result<Filter> {
    let mut filter = Filter::default();
    config.apply_to(&mut filter)?;

    let includes = args.pattern.iter().chain(args.include.iter());
    for pattern in includes {
        filter
            .add_filter(pattern, FilterMode::Include, true)
            .wrap_err_with(|| format!("invalid include pattern {:?}", pattern))?;
    }
    for pattern in &args.exclude {
        filter
            .add_filter(pattern, FilterMode::Exclude, true)
            .wrap_err_with(|| format!("invalid exclude pattern {:?}", pattern))?;
    }

    Ok(filter)
}

fn read_input(args: &Cli) -> Result<String> {
    let mut bytes = Vec::new();
    if let Some(path) = &args.file {
        std::fs::File::open(path)
            .and_then(|mut file| file.read_to_end(&mut bytes))
            .wrap_err_with(|| format!("failed to read {}", path))?;
    } else if args.should_use_stdin() {
        io::stdin()
            .lock()
            .read_to_end(&mut bytes)
            .wrap_err("failed to read stdin")?;
    } else {
        color_eyre::eyre::bail!("no input: pass a FILE or pipe data on stdin");
    }

    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Writes the selected lines, or their count.
pub fn write_selected<W: Write>(
    out: &mut W,
    lines: &[&str],
    selected: &[usize],
    options: OutputOptions,
) -> io::Result<()> {
    if options.count {
        return writeln!(out, "{}", selected.len().to_formatted_string(&Locale::en));
    }

    for &index in selected {
        if options.line_number {
            writeln!(out, "{}:{}", index + 1, lines[index])?;
        } else {
            writeln!(out, "{}", lines[index])?;
        }
    }
    Ok(())
}
