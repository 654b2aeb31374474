//! CLI routing and command dispatch.

use crate::constants;
use crate::util::privilege;
use crate::util::trace::{LogTracer, NoopTracer, Tracer};
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod check;
pub mod validate;

static LOG_TRACER: LogTracer = LogTracer;
static NOOP_TRACER: NoopTracer = NoopTracer;

/// Shared context passed to all command handlers.
pub struct CliContext {
    pub config: Option<PathBuf>,
    pub tracer: &'static dyn Tracer,
}

#[derive(Parser, Debug)]
#[command(name = "dircheck", version, about = "Verify directories are usable for reading and writing")]
pub struct Cli {
    /// Settings file (default: ./dircheck.toml)
    #[arg(long, global = true, value_name = "PATH", env = constants::CONFIG_ENV)]
    pub config: Option<PathBuf>,

    /// Emit check diagnostics at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        init_logging(self.verbose);

        if privilege::is_root() {
            log::warn!("running as root: read/write permission checks always pass");
        }

        // Skip building trace strings when nobody will read them.
        let tracer: &'static dyn Tracer =
            if log::log_enabled!(target: constants::TRACE_TARGET, log::Level::Debug) {
                &LOG_TRACER
            } else {
                &NOOP_TRACER
            };

        let ctx = CliContext {
            config: self.config,
            tracer,
        };

        match self.command {
            Commands::Check(args) => check::run(&ctx, args),
            Commands::Validate(args) => validate::run(&ctx, args),
        }
    }
}

fn init_logging(verbose: bool) {
    let env = env_logger::Env::default().default_filter_or(constants::DEFAULT_LOG_FILTER);
    let mut builder = env_logger::Builder::from_env(env);
    if verbose {
        builder.parse_filters(constants::VERBOSE_LOG_FILTER);
    }
    // a second init (e.g. from tests) is harmless
    let _ = builder.try_init();
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check one or more paths directly
    Check(check::CheckArgs),
    /// Validate the directory attributes of a settings file
    Validate(validate::ValidateArgs),
}
