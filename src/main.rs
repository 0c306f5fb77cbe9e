use clap::Parser;
use miette::Result;
use cards::cli::{Cli, Commands};
use cards::output::Printer;

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Commands::Render(args) => cards::cli::render::run(args, &printer)?,
        Commands::Templates(args) => cards::cli::templates::run(args, &printer)?,
        Commands::Completions(args) => cards::cli::completions::run(args)?,
    }

    Ok(())
}
