mod extract;

use axum::Json;
use axum::http::{HeaderValue, Method, header::InvalidHeaderValue};
use axum::routing::put;
use axum::{Router, extract::State, http::StatusCode, routing::get};
use serde::Serialize;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tracing::debug;

use crate::db::repository;
use crate::error::{Action, AppError};
use crate::models::*;
use crate::state::AppState;

pub use extract::{ApiJson, ApiPath};

#[derive(Debug, Serialize)]
struct Pong {
    message: &'static str,
}

/// All routes, mounted under `/api`.
pub fn router(state: AppState) -> Router {
    let api = Router::new()
        .route("/ping", get(ping))
        .route("/todos", get(list_todos).post(create_todo).delete(delete_all_todos))
        .route("/todos/{id}", put(update_todo).delete(delete_todo));

    Router::new().nest("/api", api).with_state(state)
}

/// Any origin unless `origin` is set.
pub fn cors_layer(origin: Option<&str>) -> Result<CorsLayer, InvalidHeaderValue> {
    let allow_origin = match origin {
        Some(origin) => AllowOrigin::exact(origin.parse::<HeaderValue>()?),
        None => AllowOrigin::from(Any),
    };

    Ok(CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any))
}

async fn ping() -> Json<Pong> {
    Json(Pong { message: "pong" })
}

async fn list_todos(State(state): State<AppState>) -> Result<Json<Vec<Todo>>, AppError> {
    let todos = repository::fetch_todos(&state.db)
        .await
        .map_err(AppError::database(Action::List))?;
    Ok(Json(todos))
}

async fn create_todo(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<NewTodoRequest>
) -> Result<(StatusCode, Json<Todo>), AppError> {
    let todo = repository::insert_todo(&state.db, req)
        .await
        .map_err(AppError::database(Action::Create))?;
    Ok((StatusCode::CREATED, Json(todo)))
}

async fn update_todo(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(req): ApiJson<UpdateTodoRequest>
) -> Result<Json<Todo>, AppError> {
    let todo = repository::update_todo(&state.db, id, req)
        .await
        .map_err(AppError::database(Action::Update))?
        .ok_or(AppError::NotFound(id))?;
    Ok(Json(todo))
}

async fn delete_todo(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>
) -> Result<StatusCode, AppError> {
    let removed = repository::delete_todo(&state.db, id)
        .await
        .map_err(AppError::database(Action::Delete))?;
    debug!("deleted todo {} ({} rows)", id, removed);
    Ok(StatusCode::NO_CONTENT)
}

async fn delete_all_todos(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    let removed = repository::delete_all_todos(&state.db)
        .await
        .map_err(AppError::database(Action::DeleteAll))?;
    debug!("deleted all todos ({} rows)", removed);
    Ok(StatusCode::NO_CONTENT)
}
