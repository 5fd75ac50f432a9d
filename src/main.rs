use clap::{Parser, Subcommand};
use pokeset::{
    generate_random_instance, generate_random_set, instantiate_set, populate_set,
    redact_instance, Advisory, Catalogs, Populated, PopulateOptions,
};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "pokeset", version, about = "Validate, enrich and instantiate Pokémon set records")]
struct Cli {
    /// Directory holding the catalog RON files
    #[arg(long, default_value = "data")]
    data: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Validate raw set records from a YAML file (multi-document)
    Populate {
        file: PathBuf,
        /// Downgrade EV violations from errors to warnings
        #[arg(long)]
        skip_ev_check: bool,
        /// Emit pretty JSON instead of YAML
        #[arg(long)]
        json: bool,
    },
    /// Validate records and draw one concrete instance per set
    Instantiate {
        file: PathBuf,
        /// Downgrade EV violations from errors to warnings
        #[arg(long)]
        skip_ev_check: bool,
        /// Redact instances drawn from hidden sets
        #[arg(long)]
        redact: bool,
        /// Emit pretty JSON instead of YAML
        #[arg(long)]
        json: bool,
    },
    /// Generate random valid sets
    GenSets {
        #[arg(long, default_value_t = 1)]
        count: u32,
        /// Emit pretty JSON instead of YAML
        #[arg(long)]
        json: bool,
    },
    /// Generate random concrete Pokémon
    GenPokemon {
        #[arg(long, default_value_t = 1)]
        count: u32,
        /// Redact instances drawn from hidden sets
        #[arg(long)]
        redact: bool,
        /// Emit pretty JSON instead of YAML
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let catalogs = Catalogs::load(&cli.data)?;

    match cli.command {
        Command::Populate {
            file,
            skip_ev_check,
            json,
        } => {
            let options = PopulateOptions { skip_ev_check };
            let mut outputs = Vec::new();
            for doc in read_documents(&file)? {
                if let Some(populated) = populate_one(&catalogs, &doc, &options) {
                    outputs.push(serde_json::to_value(&populated.set)?);
                }
            }
            emit(&outputs, json)
        }
        Command::Instantiate {
            file,
            skip_ev_check,
            redact,
            json,
        } => {
            let options = PopulateOptions { skip_ev_check };
            let mut outputs = Vec::new();
            for doc in read_documents(&file)? {
                if let Some(populated) = populate_one(&catalogs, &doc, &options) {
                    let mut instance = instantiate_set(&populated.set);
                    if redact && instance.hidden {
                        redact_instance(&mut instance);
                    }
                    outputs.push(serde_json::to_value(&instance)?);
                }
            }
            emit(&outputs, json)
        }
        Command::GenSets { count, json } => {
            let mut rng = rand::rng();
            let mut outputs = Vec::new();
            for _ in 0..count {
                match generate_random_set(&catalogs, &mut rng) {
                    Ok(populated) => outputs.push(serde_json::to_value(&populated.set)?),
                    Err(err) => eprintln!("generated set was invalid: {}", err),
                }
            }
            emit(&outputs, json)
        }
        Command::GenPokemon {
            count,
            redact,
            json,
        } => {
            let mut rng = rand::rng();
            let mut outputs = Vec::new();
            for _ in 0..count {
                match generate_random_instance(&catalogs, &mut rng) {
                    Ok(mut instance) => {
                        if redact && instance.hidden {
                            redact_instance(&mut instance);
                        }
                        outputs.push(serde_json::to_value(&instance)?);
                    }
                    Err(err) => eprintln!("generated set was invalid: {}", err),
                }
            }
            emit(&outputs, json)
        }
    }
}

/// Validate one raw record, reporting warnings and errors to stderr
/// prefixed with "<species> <setname>>" so failures in a long file are
/// attributable.
fn populate_one(
    catalogs: &Catalogs,
    doc: &Map<String, Value>,
    options: &PopulateOptions,
) -> Option<Populated> {
    let label = doc_label(doc);
    match populate_set(catalogs, doc, options) {
        Ok(populated) => {
            report_warnings(&label, &populated.warnings);
            Some(populated)
        }
        Err(err) => {
            eprintln!("{}> ERROR: {}", label, err);
            None
        }
    }
}

fn doc_label(doc: &Map<String, Value>) -> String {
    let species = match doc.get("species") {
        Some(Value::String(name)) => name.clone(),
        Some(other) => other.to_string(),
        None => "?".to_owned(),
    };
    let setname = doc
        .get("setname")
        .and_then(Value::as_str)
        .unwrap_or("?");
    format!("{} {}", species, setname)
}

fn report_warnings(label: &str, warnings: &[Advisory]) {
    for warning in warnings {
        eprintln!("{}> warning: {}", label, warning);
    }
}

/// Read a multi-document YAML file into raw record mappings. JSON files
/// work too, YAML being a superset.
fn read_documents(path: &Path) -> Result<Vec<Map<String, Value>>, Box<dyn std::error::Error>> {
    let content = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
    let mut docs = Vec::new();
    for document in serde_yaml::Deserializer::from_str(&content) {
        let value = Value::deserialize(document)
            .map_err(|e| format!("Failed to parse {}: {}", path.display(), e))?;
        match value {
            Value::Object(map) => docs.push(map),
            Value::Null => continue, // empty document, e.g. trailing ---
            _ => return Err(format!("{}: each document must be a mapping", path.display()).into()),
        }
    }
    Ok(docs)
}

fn emit(outputs: &[Value], json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(outputs)?);
    } else {
        for output in outputs {
            print!("---\n{}", serde_yaml::to_string(output)?);
        }
    }
    Ok(())
}
