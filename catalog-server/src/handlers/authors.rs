//! Author handlers

use super::{contains_ci, NameQuery};
use crate::error::ApiResult;
use crate::state::AppState;
use crate::validation::{AuthorCreate, AuthorUpdate};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use catalog_core::AuthorRecord;

pub async fn list_authors(State(state): State<AppState>) -> Json<Vec<AuthorRecord>> {
    let authors = state.store.read().await.authors();
    Json(authors)
}

pub async fn get_author(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<AuthorRecord>> {
    let author = state.store.read().await.author(id)?;
    Ok(Json(author))
}

pub async fn create_author(
    State(state): State<AppState>,
    Json(body): Json<AuthorCreate>,
) -> ApiResult<Json<AuthorRecord>> {
    let name = body.validate()?;
    let author = state.store.write().await.create_author(name);
    tracing::info!("Created author {} '{}'", author.id, author.author_name);
    Ok(Json(author))
}

pub async fn update_author(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<AuthorUpdate>,
) -> ApiResult<Json<AuthorRecord>> {
    let name = body.validate()?;
    let author = state.store.write().await.update_author(id, name)?;
    tracing::info!("Updated author {}", id);
    Ok(Json(author))
}

/// Delete an author along with their books
pub async fn delete_author(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<StatusCode> {
    state.store.write().await.delete_author(id)?;
    tracing::info!("Deleted author {}", id);
    Ok(StatusCode::NO_CONTENT)
}

pub async fn search_authors(
    State(state): State<AppState>,
    Query(query): Query<NameQuery>,
) -> Json<Vec<AuthorRecord>> {
    let authors = state.store.read().await.authors();
    Json(
        authors
            .into_iter()
            .filter(|a| contains_ci(&a.author_name, &query.name))
            .collect(),
    )
}
