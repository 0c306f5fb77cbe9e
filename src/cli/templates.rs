//! Templates command implementation.

use clap::Args;

use crate::error::Result;
use crate::output::Printer;
use crate::types::BuiltinTemplates;

/// List the builtin templates
#[derive(Args, Debug)]
pub struct TemplatesArgs {
    /// Only show free templates
    #[arg(long)]
    pub free: bool,
}

pub fn run(args: TemplatesArgs, printer: &Printer) -> Result<()> {
    for template in BuiltinTemplates::all() {
        if args.free && template.is_premium {
            continue;
        }
        let dims = template.dimensions();
        let tier = if template.is_premium { "premium" } else { "free" };
        printer.info(
            &template.id,
            &format!(
                "{} {}",
                template.name,
                printer.dim(&format!("{}x{} {}", dims.width, dims.height, tier))
            ),
        );
    }
    Ok(())
}
