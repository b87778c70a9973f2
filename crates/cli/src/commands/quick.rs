use std::path::Path;

use slate_eval::quick_select;

use super::{load_logic, print_result};
use crate::OutputFormat;

pub(crate) fn cmd_quick(logic_path: &Path, text: &str, output: OutputFormat) {
    let logic = load_logic(logic_path, output);

    match quick_select(&logic, text) {
        Some(result) => print_result(&result, output),
        None => match output {
            OutputFormat::Json => println!("null"),
            OutputFormat::Text => {
                println!("no keyword match; run the full questionnaire")
            }
        },
    }
}
