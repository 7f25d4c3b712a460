use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::ConfigOverrides;

pub mod display;
pub mod shell;
pub mod ui;

pub use display::print_person_list;
pub use shell::{run_once, run_shell};

#[derive(Parser)]
#[command(name = "reachout")]
#[command(about = "Track who you have reached out to, and what to say next")]
#[command(version)]
pub struct Cli {
    /// Directory holding the address book and logs
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,
    /// Directory holding the per-status message templates
    #[arg(long, global = true)]
    pub template_dir: Option<PathBuf>,
    /// Log level: trace, debug, info, warn, error or off
    #[arg(long, global = true)]
    pub log_level: Option<String>,
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            data_dir: self.data_dir.clone(),
            template_dir: self.template_dir.clone(),
            log_level: self.log_level.clone(),
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the interactive shell (the default)
    Shell,
    /// Run one command and exit, e.g. `reachout run find n/alex`
    Run(RunArgs),
}

#[derive(Args)]
pub struct RunArgs {
    /// The command line, as typed in the shell
    #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub input: Vec<String>,
}

impl RunArgs {
    pub fn line(&self) -> String {
        self.input.join(" ")
    }
}
