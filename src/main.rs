use std::{io, process::ExitCode};

use clap::Parser;
use library_desk::{Args, Catalog, EventLogger, Shell};
use tracing::{debug, error};

fn main() -> ExitCode {
    let args = Args::parse();
    args.init_diagnostics();

    let mut catalog = Catalog::new();
    catalog.register_observer(Box::new(EventLogger));

    let mut shell = Shell::new(io::stdin().lock(), io::stdout().lock()).with_color(args.color_enabled());
    match shell.run(&mut catalog) {
        Ok(end) => {
            debug!(?end, books = catalog.len(), "session finished");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "session aborted");
            ExitCode::FAILURE
        }
    }
}
