//! Category handlers

use super::{contains_ci, NameQuery};
use crate::error::ApiResult;
use crate::state::AppState;
use crate::validation::CategoryWrite;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use catalog_core::CategoryRecord;

pub async fn list_categories(State(state): State<AppState>) -> Json<Vec<CategoryRecord>> {
    let categories = state.store.read().await.categories();
    Json(categories)
}

pub async fn get_category(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<CategoryRecord>> {
    let category = state.store.read().await.category(id)?;
    Ok(Json(category))
}

pub async fn create_category(
    State(state): State<AppState>,
    Json(body): Json<CategoryWrite>,
) -> ApiResult<Json<CategoryRecord>> {
    let input = body.validate()?;
    let category = state.store.write().await.create_category(input)?;
    tracing::info!("Created category {} '{}'", category.id, category.name);
    Ok(Json(category))
}

pub async fn update_category(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<CategoryWrite>,
) -> ApiResult<Json<CategoryRecord>> {
    let input = body.validate()?;
    let category = state.store.write().await.update_category(id, input)?;
    tracing::info!("Updated category {}", id);
    Ok(Json(category))
}

pub async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<StatusCode> {
    state.store.write().await.delete_category(id)?;
    tracing::info!("Deleted category {}", id);
    Ok(StatusCode::NO_CONTENT)
}

pub async fn search_categories(
    State(state): State<AppState>,
    Query(query): Query<NameQuery>,
) -> Json<Vec<CategoryRecord>> {
    let categories = state.store.read().await.categories();
    Json(
        categories
            .into_iter()
            .filter(|c| contains_ci(&c.name, &query.name))
            .collect(),
    )
}
