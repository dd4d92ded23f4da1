use clap::Parser;
use fuzzymatch::{app, cli::Cli, logging};
use std::process::ExitCode;

fn main() -> ExitCode {
    let outcome = try_main();
    if let Err(report) = &outcome {
        eprintln!("Error: {report:?}");
    }
    ExitCode::from(app::exit_status(&outcome))
}

fn try_main() -> color_eyre::Result<bool> {
    color_eyre::install()?;

    let args = Cli::parse();
    match &args.debug_log {
        Some(path) => logging::init(path)?,
        None => logging::init_error_layer()?,
    }

    app::run(&args)
}
