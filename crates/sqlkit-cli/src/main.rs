//! sqlkit CLI
//!
//! Renders JSON-encoded queries as SQL for a chosen dialect.

use std::io::Read;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::{Level, debug};
use tracing_subscriber::FmtSubscriber;

use sqlkit_cli::{DialectName, RenderError, format_rendered};

/// Render sqlkit query documents as SQL.
#[derive(Parser)]
#[command(name = "sqlkit")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// SQL dialect to render for.
    #[arg(short, long, env = "SQLKIT_DIALECT", value_enum, default_value_t = DialectName::General, global = true)]
    dialect: DialectName,

    /// Enable verbose output.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a JSON query document.
    Render {
        /// Query document (stdin if not specified).
        input: Option<PathBuf>,

        /// Print one `position name` line per bind after the SQL.
        #[arg(short, long)]
        binds: bool,
    },

    /// List available dialects.
    Dialects,
}

fn read_input(input: Option<PathBuf>) -> Result<String, RenderError> {
    match input {
        Some(path) => std::fs::read_to_string(&path).map_err(|source| RenderError::Read { path, source }),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(|source| RenderError::Read {
                    path: PathBuf::from("-"),
                    source,
                })?;
            Ok(buf)
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Render { input, binds } => {
            let json = read_input(input)?;
            let rendered = cli.dialect.render_json(&json)?;
            debug!(binds = rendered.binds.len(), "Rendered query");
            println!("{}", format_rendered(&rendered, binds));
        }

        Commands::Dialects => {
            for dialect in DialectName::ALL {
                println!("{}", dialect.describe());
            }
        }
    }

    Ok(())
}
