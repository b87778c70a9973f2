use std::path::Path;

use super::load_catalog;
use crate::OutputFormat;

pub(crate) fn cmd_info(templates_path: &Path, template: &str, output: OutputFormat) {
    let catalog = load_catalog(templates_path, output);

    match catalog.get(template) {
        Some(info) => match output {
            OutputFormat::Json => {
                println!(
                    "{}",
                    serde_json::json!({
                        "template": template,
                        "name": info.name,
                        "description": info.description,
                    })
                );
            }
            OutputFormat::Text => {
                println!("{}: {}", template, info.name);
                if let Some(description) = &info.description {
                    println!("{}", description);
                }
            }
        },
        None => match output {
            OutputFormat::Json => println!("null"),
            OutputFormat::Text => {
                println!("template '{}' is not in the catalog", template)
            }
        },
    }
}
