use std::path::Path;
use std::process;

use slate_eval::{check_compatibility, recommended_modifications};

use super::load_logic;
use crate::{report_error, OutputFormat};

pub(crate) fn cmd_compat(
    logic_path: &Path,
    template: &str,
    scenarios: &[String],
    output: OutputFormat,
) {
    let logic = load_logic(logic_path, output);

    let report = check_compatibility(&logic.compatibility, template, scenarios);
    let modifications = recommended_modifications(&logic, template, scenarios);

    match output {
        OutputFormat::Json => {
            let json = serde_json::json!({
                "compatible": report.compatible,
                "warnings": report.warnings,
                "modifications": modifications,
            });
            match serde_json::to_string_pretty(&json) {
                Ok(s) => println!("{}", s),
                Err(e) => {
                    report_error(&format!("serialization error: {}", e), output);
                    process::exit(1);
                }
            }
        }
        OutputFormat::Text => {
            if report.compatible {
                println!("compatible: yes");
            } else {
                println!("compatible: no");
                for warning in &report.warnings {
                    println!("  warning: {}", warning);
                }
            }
            for m in &modifications {
                println!("modification [{}]: {}", m.kind, m.description);
                for item in &m.items {
                    println!("  - {}", item);
                }
            }
        }
    }
}
