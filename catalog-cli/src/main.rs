//! Catalog CLI - Command-line administration of a library catalog

mod commands;

use anyhow::Result;
use catalog_core::EntityKind;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "catalog")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Backend base URL (overrides CATALOG_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage books
    Books {
        #[command(subcommand)]
        action: EntityAction,
    },

    /// Manage authors
    Authors {
        #[command(subcommand)]
        action: EntityAction,
    },

    /// Manage categories
    Categories {
        #[command(subcommand)]
        action: EntityAction,
    },

    /// Show collection counts and load state
    Overview {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
enum EntityAction {
    /// List records, filtered and paged
    List {
        /// Case-insensitive search on names
        #[arg(short, long)]
        search: Option<String>,

        /// Page number, starting at 1
        #[arg(short, long, default_value = "1")]
        page: usize,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Create a record
    Add {
        #[command(flatten)]
        fields: commands::FormArgs,
    },

    /// Edit a record; unset flags keep their current values
    Edit {
        /// Record id
        id: i64,

        #[command(flatten)]
        fields: commands::FormArgs,
    },

    /// Delete a record
    Delete {
        /// Record id
        id: i64,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing; stdout stays clean for tables and JSON
    let filter = if cli.verbose {
        "catalog_cli=debug,catalog_core=debug"
    } else {
        "catalog_cli=info"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut catalog = commands::connect(cli.api_url)?;

    let (kind, action) = match cli.command {
        Commands::Books { action } => (EntityKind::Book, action),
        Commands::Authors { action } => (EntityKind::Author, action),
        Commands::Categories { action } => (EntityKind::Category, action),
        Commands::Overview { json } => return commands::overview(&mut catalog, json).await,
    };

    match action {
        EntityAction::List { search, page, json } => {
            commands::list(&mut catalog, kind, search.as_deref(), page, json).await
        }
        EntityAction::Add { fields } => commands::add(&mut catalog, kind, &fields).await,
        EntityAction::Edit { id, fields } => commands::edit(&mut catalog, kind, id, &fields).await,
        EntityAction::Delete { id } => commands::delete(&mut catalog, kind, id).await,
    }
}
