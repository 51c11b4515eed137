use clap::Parser;
use eyre::Result;
use pictor::{commands::Cli, logging};

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    logging::init(cli.verbose);
    cli.run()
}
