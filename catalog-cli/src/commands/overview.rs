//! Overview command implementation

use super::{load, print_notices, Session};
use anyhow::Result;
use catalog_core::Collection;
use serde::Serialize;

#[derive(Serialize)]
struct CollectionSummary {
    count: usize,
    error: Option<String>,
    fetched_at: Option<String>,
}

impl CollectionSummary {
    fn of<T>(collection: &Collection<T>) -> Self {
        Self {
            count: collection.data().len(),
            error: collection.error().map(str::to_string),
            fetched_at: collection.fetched_at().map(|t| t.to_rfc3339()),
        }
    }

    fn status(&self) -> String {
        match &self.error {
            Some(error) => error.clone(),
            None => self.count.to_string(),
        }
    }
}

#[derive(Serialize)]
struct SelectionSummary {
    authors: usize,
    categories: usize,
    books: usize,
    error: Option<String>,
}

/// Overview output
#[derive(Serialize)]
struct Overview {
    base_url: String,
    books: CollectionSummary,
    authors: CollectionSummary,
    categories: CollectionSummary,
    selections: SelectionSummary,
}

/// Show what the cache holds after a full load
pub async fn overview(catalog: &mut Session, json: bool) -> Result<()> {
    let mut notices = catalog.subscribe();
    load(catalog).await?;
    print_notices(&mut notices);

    let cache = catalog.cache();
    let current = cache.selections.current();
    let overview = Overview {
        base_url: catalog.config().base_url.clone(),
        books: CollectionSummary::of(&cache.books),
        authors: CollectionSummary::of(&cache.authors),
        categories: CollectionSummary::of(&cache.categories),
        selections: SelectionSummary {
            authors: current.authors.len(),
            categories: current.categories.len(),
            books: current.books.len(),
            error: cache.selections.error().map(str::to_string),
        },
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&overview)?);
    } else {
        println!("Backend:     {}", overview.base_url);
        println!("Books:       {}", overview.books.status());
        println!("Authors:     {}", overview.authors.status());
        println!("Categories:  {}", overview.categories.status());
        match &overview.selections.error {
            Some(error) => println!("Selections:  {}", error),
            None => println!(
                "Selections:  {} authors, {} categories, {} books",
                overview.selections.authors,
                overview.selections.categories,
                overview.selections.books
            ),
        }
    }

    Ok(())
}
