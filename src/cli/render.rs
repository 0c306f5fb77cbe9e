//! Render command implementation.
//!
//! Reads card data from JSON, renders it and hands the PNG to the sinks.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;

use crate::config::CardsConfig;
use crate::engine::CardRenderer;
use crate::error::{CardError, Result};
use crate::export::{card_filename, copy_to_clipboard, download, SystemClipboard};
use crate::output::{display_path, Printer};
use crate::types::{BuiltinTemplates, CardGenerationData, CardTemplate, TemplateKind};

/// Render a card from a JSON data file
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Card data file (camelCase JSON)
    pub data: PathBuf,

    /// Template id (unknown ids render as celebration)
    #[arg(long, short)]
    pub template: Option<String>,

    /// Output directory
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// File name for the saved card
    #[arg(long)]
    pub name: Option<String>,

    /// Print the PNG data URI to stdout
    #[arg(long)]
    pub data_uri: bool,

    /// Also copy the card to the clipboard
    #[arg(long)]
    pub copy: bool,
}

pub fn run(args: RenderArgs, printer: &Printer) -> Result<()> {
    let config = CardsConfig::discover(Path::new("."))?;
    let data = read_data(&args.data)?;

    let template_id = args.template.as_deref().unwrap_or(&config.template);
    let template = resolve_template(template_id);
    if TemplateKind::lookup(&template.id).is_none() {
        printer.info("Using", &format!("{} layout for {:?}", template.kind(), template.id));
    }

    let dims = template.dimensions();
    printer.status(
        "Rendering",
        &format!("{} {}", template.name, printer.dim(&format!("({}x{})", dims.width, dims.height))),
    );

    let renderer = CardRenderer::new(&config.fonts);
    let image = renderer.render(&data, &template)?;
    let uri = image.data_uri();

    let dir = args.output.unwrap_or(config.output);
    let name = args
        .name
        .unwrap_or_else(|| card_filename(&data.title, &template.id));
    let path = download(&uri, &name, &dir)?;
    printer.status("Saved", &printer.cyan(&display_path(&path)));

    if args.data_uri {
        println!("{}", uri);
    }

    if args.copy {
        match futures::executor::block_on(copy_to_clipboard(&uri, &SystemClipboard)) {
            Ok(()) => printer.status("Copied", "card to clipboard"),
            Err(e) => {
                printer.error("Clipboard", &e.to_string());
                return Err(e.into());
            }
        }
    }

    Ok(())
}

fn read_data(path: &Path) -> Result<CardGenerationData> {
    let content = fs::read_to_string(path).map_err(|e| CardError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to read card data: {}", e),
    })?;
    CardGenerationData::from_json(&content)
}

/// Builtin template for `id`, or an ad-hoc template that renders with the
/// fallback layout.
fn resolve_template(id: &str) -> CardTemplate {
    BuiltinTemplates::get(id).unwrap_or_else(|| CardTemplate::new(id, id))
}
