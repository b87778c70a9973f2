mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Output format for CLI responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Text,
    Json,
}

/// Slate landing-page template selection toolchain.
#[derive(Parser)]
#[command(name = "slate", version, about = "Slate template selection toolchain")]
struct Cli {
    /// Output format (text or json)
    #[arg(long, global = true, default_value = "text", value_enum)]
    output: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a scripted answer sequence through the questionnaire
    Ask {
        /// Path to the template catalog JSON document
        #[arg(long)]
        templates: PathBuf,
        /// Path to the selection-logic JSON document
        #[arg(long)]
        logic: PathBuf,
        /// Path to the answers JSON file (ordered array of {step, answer})
        #[arg(long)]
        answers: PathBuf,
        /// Print every intermediate question
        #[arg(long)]
        verbose: bool,
    },

    /// Keyword shortcut: select a template from free text
    Quick {
        /// Path to the selection-logic JSON document
        #[arg(long)]
        logic: PathBuf,
        /// Free text to match against the quick-select keywords
        text: String,
    },

    /// Check a base template against active special scenarios
    Compat {
        /// Path to the selection-logic JSON document
        #[arg(long)]
        logic: PathBuf,
        /// Base template id
        template: String,
        /// Active scenario ids
        #[arg(long, value_delimiter = ',')]
        scenarios: Vec<String>,
    },

    /// Look up a template in the catalog
    Info {
        /// Path to the template catalog JSON document
        #[arg(long)]
        templates: PathBuf,
        /// Template id
        template: String,
    },

    /// Run structural validation over the configuration documents
    Validate {
        /// Path to the selection-logic JSON document
        #[arg(long)]
        logic: PathBuf,
        /// Path to the template catalog JSON document (enables
        /// cross-checks of template references)
        #[arg(long)]
        templates: Option<PathBuf>,
    },
}

/// Print an error in the selected output format.
pub(crate) fn report_error(message: &str, output: OutputFormat) {
    match output {
        OutputFormat::Text => eprintln!("{}", message),
        OutputFormat::Json => eprintln!("{}", serde_json::json!({ "error": message })),
    }
}

fn main() {
    let cli = Cli::parse();
    match cli.command {
        Commands::Ask {
            templates,
            logic,
            answers,
            verbose,
        } => commands::ask::cmd_ask(&templates, &logic, &answers, verbose, cli.output),
        Commands::Quick { logic, text } => commands::quick::cmd_quick(&logic, &text, cli.output),
        Commands::Compat {
            logic,
            template,
            scenarios,
        } => commands::compat::cmd_compat(&logic, &template, &scenarios, cli.output),
        Commands::Info {
            templates,
            template,
        } => commands::info::cmd_info(&templates, &template, cli.output),
        Commands::Validate { logic, templates } => {
            commands::validate::cmd_validate(&logic, templates.as_deref(), cli.output)
        }
    }
}
