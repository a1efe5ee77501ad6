//! List command implementation

use super::{load, print_notices, Session};
use anyhow::{bail, Result};
use catalog_core::view::{filter_rows, paginate, TableRow};
use catalog_core::{AuthorRecord, BookRecord, CategoryRecord, Collection, EntityKind};
use serde::Serialize;

/// Print one page of a collection
pub async fn list(
    catalog: &mut Session,
    kind: EntityKind,
    search: Option<&str>,
    page: usize,
    json: bool,
) -> Result<()> {
    let mut notices = catalog.subscribe();
    load(catalog).await?;
    print_notices(&mut notices);

    let per_page = catalog.config().page_size;
    let cache = catalog.cache();
    let table = Table {
        search,
        page,
        per_page,
        json,
    };
    match kind {
        EntityKind::Book => table.show(&cache.books, BOOK_HEADER, book_line),
        EntityKind::Author => table.show(&cache.authors, AUTHOR_HEADER, author_line),
        EntityKind::Category => table.show(&cache.categories, CATEGORY_HEADER, category_line),
    }
}

struct Table<'a> {
    search: Option<&'a str>,
    page: usize,
    per_page: usize,
    json: bool,
}

impl Table<'_> {
    fn show<T: TableRow + Serialize>(
        &self,
        collection: &Collection<T>,
        header: &str,
        line: fn(&T) -> String,
    ) -> Result<()> {
        if let Some(error) = collection.error() {
            bail!("{}", error);
        }

        let rows = filter_rows(collection.data(), self.search);
        let page = paginate(rows, self.page, self.per_page);

        if self.json {
            println!("{}", serde_json::to_string_pretty(&page)?);
            return Ok(());
        }

        if page.items.is_empty() {
            println!("No records found");
            return Ok(());
        }

        println!("{}", header);
        for row in &page.items {
            println!("{}", line(row));
        }
        println!(
            "\nPage {} of {} ({} total)",
            page.page,
            page.page_count().max(1),
            page.total
        );
        Ok(())
    }
}

const BOOK_HEADER: &str = "   ID  Title                  Author                 Categories";
const AUTHOR_HEADER: &str = "   ID  Name                   Books";
const CATEGORY_HEADER: &str = "   ID  Name                   Books";

fn book_line(book: &BookRecord) -> String {
    format!(
        "{:>5}  {:<22} {:<22} {}",
        book.id,
        book.book_name,
        book.author_name.as_deref().unwrap_or("-"),
        book.categories.join(", ")
    )
}

fn author_line(author: &AuthorRecord) -> String {
    format!(
        "{:>5}  {:<22} {}",
        author.id,
        author.author_name,
        author.books.join(", ")
    )
}

fn category_line(category: &CategoryRecord) -> String {
    format!(
        "{:>5}  {:<22} {}",
        category.id,
        category.name,
        category.books.join(", ")
    )
}
