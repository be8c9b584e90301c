use clap::Parser;
use srcsweep_cli::args::Args;
use srcsweep_cli::config::Config;
use srcsweep_cli::error::Result;
use srcsweep_cli::presentation::Presenter;
use srcsweep_cli::{VERSION, logging};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();

    let behavior = &args.behavior;
    let ansi = behavior.color.enabled_for_stderr();
    if let Err(e) = logging::init(behavior.verbose, behavior.quiet, ansi) {
        eprintln!("{e}");
    }
    tracing::debug!("srcsweep {VERSION}");

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Application Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let config = Config::try_from(args)?;
    tracing::debug!(?config, "resolved configuration");

    let presenter = Presenter::new(args.behavior.color.enabled(), config.dry_run);
    let quiet = args.behavior.quiet;

    // Tool exit codes never decide ours; only a propagated error does.
    let result = srcsweep_engine::run(&config, |inv| {
        if !quiet {
            presenter.print_status(inv);
        }
    })?;

    if !quiet {
        presenter.print_summary(&result);
    }
    Ok(())
}
