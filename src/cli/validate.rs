use crate::cli::CliContext;
use crate::core::messages::Messages;
use crate::core::settings;
use anyhow::{bail, Context, Result};
use clap::Args;
use comfy_table::{presets::UTF8_FULL, Attribute, Cell, Table};
use serde::Serialize;

#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Output format: table|json
    #[arg(long, default_value = "table")]
    pub format: String,
}

#[derive(Debug, Serialize)]
struct ValidationItem {
    attribute: String,
    error: String,
    message: String,
}

pub fn run(ctx: &CliContext, args: ValidateArgs) -> Result<()> {
    if args.format != "table" && args.format != "json" {
        bail!("invalid format: {} (use table|json)", args.format);
    }

    let path = settings::resolve_path(ctx.config.clone());
    let file = settings::load(&path)?;
    let messages = Messages::from_symbols(&file.messages)
        .with_context(|| format!("load messages from {}", path.display()))?;
    log::info!(
        "validating {} directory attribute(s) from {}",
        file.directories.len(),
        path.display()
    );

    let errors = file.validate_with(ctx.tracer)?;
    let items: Vec<ValidationItem> = errors
        .iter()
        .zip(errors.full_messages(&messages))
        .map(|(e, message)| ValidationItem {
            attribute: e.attribute.clone(),
            error: e.kind.symbol().to_string(),
            message,
        })
        .collect();

    if args.format == "json" {
        let json = serde_json::to_string_pretty(&items).context("serialize validation report")?;
        println!("{}", json);
    } else if items.is_empty() {
        println!("All {} directory attribute(s) valid", file.directories.len());
    } else {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(vec![
            Cell::new("Attribute").add_attribute(Attribute::Bold),
            Cell::new("Error").add_attribute(Attribute::Bold),
            Cell::new("Message").add_attribute(Attribute::Bold),
        ]);
        for item in &items {
            table.add_row(vec![
                Cell::new(&item.attribute),
                Cell::new(&item.error),
                Cell::new(&item.message),
            ]);
        }
        println!("{}", table);
    }

    if !items.is_empty() {
        std::process::exit(1);
    }
    Ok(())
}
