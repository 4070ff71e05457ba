//! Command-line flags and diagnostics setup.
//!
//! The session itself takes no arguments; the flags only tune what goes to
//! stderr and whether the banner is colored.

use clap::{ArgAction, Parser};
use tracing_subscriber::{EnvFilter, fmt};

/// Command-line arguments for the library desk
#[derive(Parser, Debug, Clone, Default)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Increase diagnostic output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Print the banner without colors
    #[arg(long)]
    pub no_color: bool,
}

impl Args {
    /// Log filter used when `RUST_LOG` is not set
    #[must_use]
    pub fn default_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    /// Whether the shell should render colored output
    #[must_use]
    pub fn color_enabled(&self) -> bool {
        !self.no_color
    }

    /// Install the stderr `tracing` subscriber and apply the color override.
    ///
    /// A subscriber that is already installed is left in place.
    pub fn init_diagnostics(&self) {
        if self.no_color {
            colored::control::set_override(false);
        }

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(self.default_filter()));
        if let Err(e) = fmt().with_env_filter(filter).with_writer(std::io::stderr).try_init() {
            tracing::warn!(error = %e, "tracing init failed");
        }
    }
}
