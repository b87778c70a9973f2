use std::path::Path;
use std::process;
use std::sync::Arc;

use slate_eval::{AnswerValue, SelectionResult, TemplateSelector};

use super::{load_catalog, load_json, load_logic, print_result};
use crate::{report_error, OutputFormat};

/// Replay a scripted answer sequence through the questionnaire and
/// print the outcome. The answers file is an ordered array of
/// `{ "step": "<id>", "answer": <string or array> }` records.
pub(crate) fn cmd_ask(
    templates_path: &Path,
    logic_path: &Path,
    answers_path: &Path,
    verbose: bool,
    output: OutputFormat,
) {
    let catalog = Arc::new(load_catalog(templates_path, output));
    let logic = Arc::new(load_logic(logic_path, output));
    let answers_doc = load_json(answers_path, output);

    let entries = match answers_doc.as_array() {
        Some(arr) => arr,
        None => {
            report_error("error: answers file must be a JSON array", output);
            process::exit(1);
        }
    };

    let mut selector = TemplateSelector::new(logic, catalog);

    let mut result = match selector.next_question() {
        Ok(r) => r,
        Err(e) => {
            report_error(&format!("error: {}", e), output);
            process::exit(1);
        }
    };

    for entry in entries {
        let step = match entry.get("step").and_then(serde_json::Value::as_str) {
            Some(s) => s,
            None => {
                report_error("error: answer record missing 'step'", output);
                process::exit(1);
            }
        };
        let answer = match entry.get("answer") {
            Some(serde_json::Value::String(s)) => AnswerValue::from(s.as_str()),
            Some(serde_json::Value::Array(items)) => {
                let list: Vec<String> = items
                    .iter()
                    .filter_map(|v| v.as_str().map(str::to_string))
                    .collect();
                AnswerValue::from(list)
            }
            _ => {
                report_error(
                    &format!("error: answer for '{}' must be a string or array", step),
                    output,
                );
                process::exit(1);
            }
        };

        if verbose && output == OutputFormat::Text {
            print_result(&result, output);
        }

        result = match selector.set_answer(step, answer) {
            Ok(r) => r,
            Err(e) => {
                report_error(&format!("error: {}", e), output);
                process::exit(1);
            }
        };

        if matches!(result, SelectionResult::Template { .. }) {
            break;
        }
    }

    print_result(&result, output);

    // A leftover question means the script ended early.
    if matches!(result, SelectionResult::Question { .. }) {
        if output == OutputFormat::Text {
            eprintln!("note: answer script exhausted before the questionnaire completed");
        }
        process::exit(1);
    }
}
