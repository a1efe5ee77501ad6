//! CLI command implementations

mod list;
mod mutate;
mod overview;

pub use list::list;
pub use mutate::{add, delete, edit};
pub use overview::overview;

use anyhow::{bail, Context, Result};
use catalog_core::notify::drain;
use catalog_core::{Catalog, ClientConfig, EntityKind, FormValues, HttpCatalogApi, Notice};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use tokio::sync::broadcast;

/// A catalog session over HTTP
pub type Session = Catalog<HttpCatalogApi>;

/// Build a session from the environment, with `--api-url` taking precedence
pub fn connect(api_url: Option<String>) -> Result<Session> {
    let mut config = ClientConfig::from_env();
    if let Some(url) = api_url {
        config = config.with_base_url(url);
    }
    tracing::debug!("Using backend at {}", config.base_url);

    let api = HttpCatalogApi::new(config.clone()).context("Failed to build HTTP client")?;
    Ok(Catalog::new(api, config))
}

/// Load tables and selections behind a spinner
pub(crate) async fn load(catalog: &mut Session) -> Result<()> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}")?);
    spinner.set_message(format!("Loading catalog from {}", catalog.config().base_url));
    spinner.enable_steady_tick(Duration::from_millis(80));

    catalog.load().await;

    spinner.finish_and_clear();
    Ok(())
}

/// Print pending notices: errors to stderr, everything else to stdout
pub(crate) fn print_notices(rx: &mut broadcast::Receiver<Notice>) {
    for notice in drain(rx) {
        if notice.is_error() {
            eprintln!("{}", notice.message);
        } else {
            println!("{}", notice.message);
        }
    }
}

/// Form fields given on the command line
#[derive(Args, Debug, Default)]
pub struct FormArgs {
    /// Name (the title, for books)
    #[arg(short, long)]
    pub name: Option<String>,

    /// Author id (books)
    #[arg(long)]
    pub author: Option<i64>,

    /// Category ids, comma separated (books); give the flag alone to clear
    #[arg(long, value_delimiter = ',', num_args = 0..)]
    pub categories: Option<Vec<i64>>,

    /// Book ids, comma separated (categories); give the flag alone to clear
    #[arg(long, value_delimiter = ',', num_args = 0..)]
    pub books: Option<Vec<i64>>,
}

impl FormArgs {
    /// Overlay the given flags onto form values
    pub fn apply(&self, values: &mut FormValues) -> Result<()> {
        let kind = values.kind();
        match values {
            FormValues::Book(form) => {
                not_for(self.books.is_some(), "--books", kind)?;
                if let Some(name) = &self.name {
                    form.name = name.clone();
                }
                if self.author.is_some() {
                    form.author_id = self.author;
                }
                if let Some(ids) = &self.categories {
                    form.category_ids = ids.clone();
                }
            }
            FormValues::Author(form) => {
                not_for(self.author.is_some(), "--author", kind)?;
                not_for(self.categories.is_some(), "--categories", kind)?;
                not_for(self.books.is_some(), "--books", kind)?;
                if let Some(name) = &self.name {
                    form.name = name.clone();
                }
            }
            FormValues::Category(form) => {
                not_for(self.author.is_some(), "--author", kind)?;
                not_for(self.categories.is_some(), "--categories", kind)?;
                if let Some(name) = &self.name {
                    form.name = name.clone();
                }
                if let Some(ids) = &self.books {
                    form.book_ids = ids.clone();
                }
            }
        }
        Ok(())
    }
}

fn not_for(present: bool, flag: &str, kind: EntityKind) -> Result<()> {
    if present {
        bail!("{} does not apply to {}", flag, kind);
    }
    Ok(())
}
