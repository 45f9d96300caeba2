//! pairforge CLI — build and compare anonymized prompt/response datasets.
//!
//! Usage:
//!   pairforge ingest <file> [--tag T] [--label L] [--mime M]
//!   pairforge label <filename> <label>
//!   pairforge versions
//!   pairforge compare <first> <second> --keyword K [--tag-filter T] [--out DIR]
//!   pairforge scrub <file>

use clap::{Parser, Subcommand};
use pairforge::storage::write_jsonl;
use pairforge::{
    compare, export_filename, extract_file, highlight, scrub_text, CompareError, CompareQuery,
    Config, DatasetStore, DocumentKind, FsStore, OpenStore, Pipeline, Record, Upload,
};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "pairforge",
    version,
    about = "Anonymized prompt/response datasets from raw documents"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Root directory for dataset storage (overrides config-relative paths)
    #[arg(long, global = true)]
    root: Option<PathBuf>,
    /// Path to a config file (default: ./pairforge.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract, scrub, pair and save a document as a new version
    Ingest {
        /// Document to ingest (.txt, .pdf or .docx)
        path: PathBuf,
        /// Tag for every record (default from config)
        #[arg(long)]
        tag: Option<String>,
        /// Label for the new version
        #[arg(long)]
        label: Option<String>,
        /// Declared MIME type, overriding the file extension
        #[arg(long)]
        mime: Option<String>,
    },
    /// Label a saved version
    Label {
        /// Versioned filename
        filename: String,
        /// Free-text label
        label: String,
    },
    /// List saved versions, newest first
    Versions,
    /// Search two versions for a keyword and export the matches
    Compare {
        /// First versioned filename
        first: String,
        /// Second versioned filename
        second: String,
        /// Keyword to search for (case-insensitive)
        #[arg(long, short)]
        keyword: String,
        /// Only keep records whose tag contains this (case-insensitive)
        #[arg(long)]
        tag_filter: Option<String>,
        /// Directory for the combined export
        #[arg(long, default_value = ".")]
        out: PathBuf,
    },
    /// Print the scrubbed text of a document without saving anything
    Scrub {
        /// Document to scrub
        path: PathBuf,
    },
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&Path>, root: Option<&Path>) -> Result<Config, String> {
    let config = match path {
        Some(path) => Config::from_file(path),
        None => Config::discover(),
    }
    .map_err(|e| e.to_string())?;
    Ok(match root {
        Some(root) => config.rebase(root),
        None => config,
    })
}

fn open_store(config: &Config) -> Result<FsStore, String> {
    FsStore::open(config).map_err(|e| format!("Failed to open dataset store: {}", e))
}

fn fail(message: &str) -> i32 {
    eprintln!("Error: {}", message);
    1
}

fn print_record(record: &Record, keyword: &str) {
    println!("- Prompt: {}", highlight(&record.prompt, keyword));
    println!("- Response: {}", highlight(&record.response, keyword));
    println!("- Tag: {}", record.tag);
    println!("---");
}

fn cmd_ingest(
    store: &mut FsStore,
    config: &Config,
    path: &Path,
    tag: Option<String>,
    label: Option<String>,
    mime: Option<String>,
) -> i32 {
    let kind = match mime {
        Some(mime) => DocumentKind::from_mime(&mime),
        None => DocumentKind::from_path(path),
    };
    let bytes = match std::fs::read(path) {
        Ok(b) => b,
        Err(e) => {
            eprintln!("Error: cannot read '{}': {}", path.display(), e);
            return 1;
        }
    };
    let tag = tag.unwrap_or_else(|| config.default_tag.clone());
    let mut upload = Upload::new(kind, bytes, tag);
    if let Some(label) = label {
        upload = upload.with_label(label);
    }

    match Pipeline::new().ingest(store, &upload) {
        Ok(report) => {
            println!(
                "Saved {} records to {}",
                report.records.len(),
                report.filename
            );
            if let Some(label) = &report.label {
                println!("Version labeled: {}", label);
            }
            if !report.records.is_empty() {
                println!("Preview (first {} entries):", report.preview().len());
                for record in report.preview() {
                    match serde_json::to_string_pretty(record) {
                        Ok(json) => println!("{}", json),
                        Err(e) => eprintln!("Error: {}", e),
                    }
                }
            }
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

fn cmd_label(store: &mut FsStore, filename: &str, label: &str) -> i32 {
    match store.label(filename, label) {
        Ok(()) => {
            println!("Version labeled: {}", label);
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

fn cmd_versions(store: &FsStore) -> i32 {
    let versions = match store.list_versions() {
        Ok(v) => v,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };
    if versions.is_empty() {
        println!("No versions saved.");
        return 0;
    }
    println!("{:<48}  {}", "FILENAME", "LABEL");
    println!("{}", "-".repeat(72));
    for filename in versions {
        println!("{:<48}  {}", filename, store.label_for(&filename));
    }
    0
}

fn cmd_compare(store: &FsStore, query: &CompareQuery, out: &Path) -> i32 {
    let comparison = match compare(store, query) {
        Ok(c) => c,
        Err(CompareError::NotEnoughVersions { found }) => {
            eprintln!(
                "Error: comparison needs at least two saved versions ({} found)",
                found
            );
            return 1;
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };

    let keyword = query.keyword.to_lowercase();
    println!("Summary");
    println!("- Matches in {}: {}", comparison.first.filename, comparison.first.count());
    println!("- Matches in {}: {}", comparison.second.filename, comparison.second.count());
    println!("- Total combined matches: {}", comparison.total());

    for side in [&comparison.first, &comparison.second] {
        println!();
        println!("Matches in {} - {}", side.filename, side.label);
        for record in &side.matches {
            print_record(record, &keyword);
        }
    }

    if comparison.is_empty() {
        return 0;
    }
    let filename = export_filename(
        &query.first,
        &query.second,
        chrono::Local::now().naive_local(),
    );
    let path = out.join(filename);
    match write_jsonl(&path, &comparison.combined()) {
        Ok(()) => {
            println!();
            println!("Exported {} matching entries to {}", comparison.total(), path.display());
            0
        }
        Err(e) => {
            eprintln!("Error: cannot write '{}': {}", path.display(), e);
            1
        }
    }
}

fn cmd_scrub(path: &Path) -> i32 {
    match extract_file(path) {
        Ok(text) => {
            println!("{}", scrub_text(&text));
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Only commands that touch saved datasets load config and open the store.
    let open = || -> Result<(Config, FsStore), String> {
        let config = load_config(cli.config.as_deref(), cli.root.as_deref())?;
        let store = open_store(&config)?;
        Ok((config, store))
    };

    let code = match cli.command {
        Commands::Scrub { path } => cmd_scrub(&path),
        Commands::Ingest {
            path,
            tag,
            label,
            mime,
        } => match open() {
            Ok((config, mut store)) => cmd_ingest(&mut store, &config, &path, tag, label, mime),
            Err(e) => fail(&e),
        },
        Commands::Label { filename, label } => match open() {
            Ok((_, mut store)) => cmd_label(&mut store, &filename, &label),
            Err(e) => fail(&e),
        },
        Commands::Versions => match open() {
            Ok((_, store)) => cmd_versions(&store),
            Err(e) => fail(&e),
        },
        Commands::Compare {
            first,
            second,
            keyword,
            tag_filter,
            out,
        } => match open() {
            Ok((_, store)) => {
                let mut query = CompareQuery::new(first, second, keyword);
                if let Some(tag) = tag_filter {
                    query = query.with_tag_filter(tag);
                }
                cmd_compare(&store, &query, &out)
            }
            Err(e) => fail(&e),
        },
    };
    std::process::exit(code);
}
