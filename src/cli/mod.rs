pub mod completions;
pub mod render;
pub mod templates;

use clap::{Parser, Subcommand};

/// cards - Shareable milestone card renderer
#[derive(Parser, Debug)]
#[command(name = "cards")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render a card from a JSON data file
    Render(render::RenderArgs),

    /// List the builtin templates
    Templates(templates::TemplatesArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
