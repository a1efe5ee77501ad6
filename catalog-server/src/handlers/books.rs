//! Book handlers

use super::contains_ci;
use crate::error::ApiResult;
use crate::state::AppState;
use crate::validation::{BookCreate, BookUpdate};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use catalog_core::BookRecord;
use serde::Deserialize;

/// List all books
pub async fn list_books(State(state): State<AppState>) -> Json<Vec<BookRecord>> {
    let books = state.store.read().await.books();
    Json(books)
}

pub async fn get_book(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<BookRecord>> {
    let book = state.store.read().await.book(id)?;
    Ok(Json(book))
}

pub async fn create_book(
    State(state): State<AppState>,
    Json(body): Json<BookCreate>,
) -> ApiResult<Json<BookRecord>> {
    let input = body.validate()?;
    let book = state.store.write().await.create_book(input)?;
    tracing::info!("Created book {} '{}'", book.id, book.book_name);
    Ok(Json(book))
}

pub async fn update_book(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<BookUpdate>,
) -> ApiResult<Json<BookRecord>> {
    let input = body.validate()?;
    let book = state.store.write().await.update_book(id, input)?;
    tracing::info!("Updated book {}", id);
    Ok(Json(book))
}

pub async fn delete_book(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<StatusCode> {
    state.store.write().await.delete_book(id)?;
    tracing::info!("Deleted book {}", id);
    Ok(StatusCode::NO_CONTENT)
}

/// Query parameters for book search
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookSearchQuery {
    #[serde(default)]
    pub author_name: String,
    #[serde(default)]
    pub title: String,
}

/// Books whose title or author contains either term
pub async fn search_books(
    State(state): State<AppState>,
    Query(query): Query<BookSearchQuery>,
) -> Json<Vec<BookRecord>> {
    let books = state.store.read().await.books();
    Json(
        books
            .into_iter()
            .filter(|b| {
                contains_ci(&b.book_name, &query.title)
                    || b
                        .author_name
                        .as_deref()
                        .is_some_and(|a| contains_ci(a, &query.author_name))
            })
            .collect(),
    )
}
