use crate::error::{AppError, Result, GET_NOT_FOUND};
use crate::model::{ListQuery, MessageResponse};
use crate::state::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use marquee_core::{Movie, MovieId};
use serde_json::Value;

pub async fn list_movies_handler(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<Vec<Movie>>> {
    let query = ListQuery::from_pairs(pairs);
    let movies = state.catalog().list(query.genre.as_deref()).await?;
    Ok(Json(movies))
}

pub async fn get_movie_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Movie>> {
    let movie = state
        .catalog()
        .get(&MovieId::new(id))
        .await
        .map_err(|e| AppError::from_catalog(e, GET_NOT_FOUND))?;
    Ok(Json(movie))
}

pub async fn create_movie_handler(
    State(state): State<AppState>,
    body: std::result::Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Movie>)> {
    let Json(body) = body?;
    let movie = state.catalog().create(&body).await?;
    Ok((StatusCode::CREATED, Json(movie)))
}

pub async fn update_movie_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
    body: std::result::Result<Json<Value>, JsonRejection>,
) -> Result<Json<Movie>> {
    let Json(body) = body?;
    let movie = state.catalog().update(&MovieId::new(id), &body).await?;
    Ok(Json(movie))
}

pub async fn delete_movie_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>> {
    state.catalog().delete(&MovieId::new(id)).await?;
    Ok(Json(MessageResponse::new("Movie deleted")))
}
