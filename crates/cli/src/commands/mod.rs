pub(crate) mod ask;
pub(crate) mod compat;
pub(crate) mod info;
pub(crate) mod quick;
pub(crate) mod validate;

use std::path::Path;
use std::process;

use slate_core::{SelectionLogic, TemplateCatalog};

use crate::{report_error, OutputFormat};

/// Read and parse a JSON document, exiting with a readable error on
/// failure.
pub(crate) fn load_json(path: &Path, output: OutputFormat) -> serde_json::Value {
    let text = match std::fs::read_to_string(path) {
        Ok(s) => s,
        Err(_) => {
            report_error(
                &format!("error: file not found: {}", path.display()),
                output,
            );
            process::exit(1);
        }
    };
    match serde_json::from_str(&text) {
        Ok(v) => v,
        Err(e) => {
            report_error(
                &format!("error: invalid JSON in {}: {}", path.display(), e),
                output,
            );
            process::exit(1);
        }
    }
}

pub(crate) fn load_logic(path: &Path, output: OutputFormat) -> SelectionLogic {
    let doc = load_json(path, output);
    match SelectionLogic::from_json(&doc) {
        Ok(logic) => logic,
        Err(e) => {
            report_error(&format!("error: {}: {}", path.display(), e), output);
            process::exit(1);
        }
    }
}

pub(crate) fn load_catalog(path: &Path, output: OutputFormat) -> TemplateCatalog {
    let doc = load_json(path, output);
    match TemplateCatalog::from_json(&doc) {
        Ok(catalog) => catalog,
        Err(e) => {
            report_error(&format!("error: {}: {}", path.display(), e), output);
            process::exit(1);
        }
    }
}

/// Print a selection result in the requested format.
pub(crate) fn print_result(result: &slate_eval::SelectionResult, output: OutputFormat) {
    match output {
        OutputFormat::Json => match serde_json::to_string_pretty(result) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                report_error(&format!("serialization error: {}", e), output);
                process::exit(1);
            }
        },
        OutputFormat::Text => match result {
            slate_eval::SelectionResult::Question {
                question,
                options,
                step_id,
            } => {
                println!("question [{}]: {}", step_id, question);
                for opt in options {
                    println!("  - {} ({})", opt.label, opt.id);
                }
            }
            slate_eval::SelectionResult::Template {
                template,
                reason,
                base_template,
                override_flag,
                ..
            } => {
                println!("template: {}", template);
                println!("reason: {}", reason);
                if let Some(base) = base_template {
                    println!("base template: {}", base);
                }
                if *override_flag {
                    println!("override: true");
                }
            }
        },
    }
}
