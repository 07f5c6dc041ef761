use std::path::PathBuf;

use clap::Parser;
use eyre::Result;
use routegen_core::{ConfigFile, GeneratorConfig};

use crate::{
    logging,
    ops::{self, GenerateOptions},
    reports::{Report, TerminalOutput},
};

/// Extension trait for exiting on routegen errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for routegen_core::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "routegen")]
#[command(version)]
#[command(about = "Generate route registration code from Swift page files")]
pub(crate) struct Cli {
    /// Directory containing the page files
    pub input_dir: PathBuf,

    /// Directory the routes file is written to (created if missing)
    pub output_dir: PathBuf,

    /// Path to a routegen.toml overriding the generated scaffold
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Suffix of page files, overriding the config file (default `.swift`)
    #[arg(long, value_name = "SUFFIX")]
    pub suffix: Option<String>,

    /// Print the generated file instead of writing it
    #[arg(long)]
    pub dry_run: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        logging::init(self.verbose, self.quiet)?;

        let config = self.generator_config().unwrap_or_exit();
        tracing::debug!(?config, "resolved configuration");

        let report = ops::generate(
            config,
            GenerateOptions {
                dry_run: self.dry_run,
            },
        )
        .unwrap_or_exit();

        report.render(&mut TerminalOutput::new());
        Ok(())
    }

    fn generator_config(&self) -> routegen_core::Result<GeneratorConfig> {
        let mut config = GeneratorConfig::new(&self.input_dir, &self.output_dir);
        if let Some(path) = &self.config {
            config = config.with_file(ConfigFile::open(path)?);
        }
        if let Some(suffix) = &self.suffix {
            config = config.with_source_suffix(suffix);
        }
        Ok(config)
    }
}
