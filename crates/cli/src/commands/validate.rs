use std::path::Path;
use std::process;

use slate_core::validate::{validate, Severity};

use super::{load_catalog, load_logic};
use crate::OutputFormat;

pub(crate) fn cmd_validate(
    logic_path: &Path,
    templates_path: Option<&Path>,
    output: OutputFormat,
) {
    let logic = load_logic(logic_path, output);
    let catalog = templates_path.map(|p| load_catalog(p, output));

    let issues = validate(&logic, catalog.as_ref());

    match output {
        OutputFormat::Json => {
            let json: Vec<_> = issues
                .iter()
                .map(|i| {
                    serde_json::json!({
                        "severity": match i.severity {
                            Severity::Error => "error",
                            Severity::Warning => "warning",
                        },
                        "context": i.context,
                        "message": i.message,
                    })
                })
                .collect();
            println!("{}", serde_json::json!({ "issues": json }));
        }
        OutputFormat::Text => {
            if issues.is_empty() {
                println!("configuration is consistent");
            } else {
                for issue in &issues {
                    println!("{}", issue);
                }
            }
        }
    }

    if issues.iter().any(|i| i.severity == Severity::Error) {
        process::exit(1);
    }
}
