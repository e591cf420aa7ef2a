use clap::{Parser, Subcommand, ValueEnum};
use facturatab::{export, fields, project_with, Document, FieldDescriptor, FieldRegistry};
use std::path::Path;
use std::process;

/// facturatab CLI — project DTE invoice JSON files into tabular views
#[derive(Parser)]
#[command(name = "facturatab", version, about)]
struct Cli {
    /// Field config YAML (defaults to the built-in catalog)
    #[arg(long)]
    config: Option<String>,

    /// Output format for printed results
    #[arg(long, default_value = "yaml")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    Yaml,
    Json,
}

#[derive(Subcommand)]
enum Command {
    /// List the field catalog and current selection
    Fields {
        /// Group fields by category
        #[arg(long)]
        by_category: bool,
    },

    /// Project invoice files into formatted rows
    Project {
        /// Invoice JSON files (a file may hold one document or an array)
        files: Vec<String>,
        /// Override the selection (e.g. --select numeroControl,totalPagar)
        #[arg(long = "select", value_delimiter = ',')]
        select: Vec<String>,
    },

    /// Export invoice files to CSV or XLSX (picked from the --out extension)
    Export {
        /// Invoice JSON files
        files: Vec<String>,
        /// Output path (.csv or .xlsx)
        #[arg(long)]
        out: String,
        /// Override the selection
        #[arg(long = "select", value_delimiter = ',')]
        select: Vec<String>,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("ERROR:{e}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut registry = match &cli.config {
        Some(path) => FieldRegistry::from_config(fields::parse_config(Path::new(path))?),
        None => FieldRegistry::with_defaults(),
    };

    match cli.command {
        Command::Fields { by_category } => {
            if by_category {
                let groups: Vec<_> = registry
                    .fields_by_category()
                    .into_iter()
                    .map(|(category, fields)| {
                        serde_json::json!({ "category": category, "fields": fields })
                    })
                    .collect();
                print_output(&serde_json::json!(groups), &cli.format);
            } else {
                print_output(&serde_json::to_value(registry.to_config())?, &cli.format);
            }
        }

        Command::Project { files, select } => {
            if !select.is_empty() {
                registry.set_selected(&select);
            }
            let documents = load_documents(&files)?;
            let rows = project_rows(&documents, &registry.selected_fields());
            print_output(&serde_json::to_value(rows)?, &cli.format);
        }

        Command::Export { files, out, select } => {
            if !select.is_empty() {
                registry.set_selected(&select);
            }
            let documents = load_documents(&files)?;
            let selected = registry.selected_fields();
            let rows = project_rows(&documents, &selected);

            let path = Path::new(&out);
            if path.extension().is_some_and(|ext| ext == "xlsx") {
                export::write_xlsx(path, &selected, &rows)?;
            } else {
                export::write_csv(path, &selected, &rows)?;
            }
            log::info!("Exported {} rows to {out}", rows.len());
            print_output(
                &serde_json::json!({ "ok": true, "rows": rows.len(), "out": out }),
                &cli.format,
            );
        }
    }

    Ok(())
}

fn project_rows(documents: &[Document], selected: &[FieldDescriptor]) -> Vec<facturatab::Row> {
    project_with(documents, selected, calculated_value)
}

/// Calculated-field hook: `estado` is derived from whether Hacienda's
/// reception seal is present on the stored record.
fn calculated_value(doc: &Document, field: &FieldDescriptor) -> Option<String> {
    match field.id.as_str() {
        "estado" => {
            let sealed = doc
                .get("selloRecibido")
                .map(|v| !v.is_null())
                .unwrap_or(false);
            Some(if sealed { "PROCESADO" } else { "PENDIENTE" }.to_string())
        }
        _ => None,
    }
}

/// Load documents from JSON files. A file holding an array contributes
/// every element; anything else is one document.
fn load_documents(files: &[String]) -> Result<Vec<Document>, Box<dyn std::error::Error>> {
    let mut documents = Vec::new();
    for file in files {
        let content = std::fs::read_to_string(file)
            .map_err(|e| format!("Failed to read invoice file '{file}': {e}"))?;
        let value: Document = serde_json::from_str(&content)
            .map_err(|e| format!("Invalid JSON in '{file}': {e}"))?;
        match value {
            Document::Array(items) => documents.extend(items),
            other => documents.push(other),
        }
    }
    Ok(documents)
}

fn print_output(value: &serde_json::Value, format: &OutputFormat) {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(value).unwrap());
        }
        OutputFormat::Yaml => {
            print!("{}", serde_yaml::to_string(value).unwrap());
        }
    }
}
