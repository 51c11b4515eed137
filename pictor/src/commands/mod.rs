mod completions;
mod generate;
mod import;
mod init;
mod list;
mod optimize;
mod preview;

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use generate::GenerateCommand;
use import::ImportCommand;
use init::InitCommand;
use list::ListCommand;
use optimize::OptimizeCommand;
use pictor_manifest::PictorToml;
use preview::PreviewCommand;

use crate::reports::{Report, TerminalOutput};

/// Extension trait for exiting on manifest errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for pictor_manifest::Result<T> {
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
#[command(name = "pictor")]
#[command(version)]
#[command(about = "Import icons from Figma and generate web component, React and Vue wrappers")]
pub struct Cli {
    /// Path to pictor.toml
    #[arg(short, long, global = true, default_value = "pictor.toml")]
    pub config: PathBuf,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Init(cmd) => cmd.run(&self.config),
            Commands::Import(cmd) => cmd.run(&self.open_config()),
            Commands::Optimize(cmd) => cmd.run(&self.open_config()),
            Commands::Generate(cmd) => cmd.run(&self.open_config()),
            Commands::List(cmd) => cmd.run(&self.open_config()),
            Commands::Preview(cmd) => cmd.run(&self.open_config()),
            Commands::Completions(cmd) => cmd.run(),
        }
    }

    fn open_config(&self) -> PictorToml {
        PictorToml::open(&self.config).unwrap_or_exit()
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create a pictor.toml
    Init(InitCommand),

    /// Download icon components from the Figma file
    Import(ImportCommand),

    /// Optimize downloaded icons into the dist directory
    Optimize(OptimizeCommand),

    /// Generate wrapper modules from optimized icons
    Generate(GenerateCommand),

    /// List icons and sizes in the dist directory
    List(ListCommand),

    /// Render an HTML page showing every optimized icon
    Preview(PreviewCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

fn print_report(report: &dyn Report) {
    report.render(&mut TerminalOutput::new());
}
