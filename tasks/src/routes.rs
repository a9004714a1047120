use askama::Template;
use axum::{extract::Path, http::StatusCode, response::Html, Json};
use shared::{ApiError, ApiResult, Db, JsonBody, Task, TaskPayload};
use tracing::info;

use crate::db;
use crate::templates::IndexPage;

const NOT_FOUND: &str = "Tarefa não encontrada";

/// GET / - Task page
pub async fn index(conn: Db) -> ApiResult<Html<String>> {
    let tasks = db::list_tasks(&conn)?;
    let page = IndexPage { tasks: &tasks }.render()?;
    Ok(Html(page))
}

/// GET /tarefas - List all tasks
pub async fn list_tasks(conn: Db) -> ApiResult<Json<Vec<Task>>> {
    let tasks = db::list_tasks(&conn)?;
    Ok(Json(tasks))
}

/// POST /tarefas - Create a task with a fresh id
pub async fn create_task(
    conn: Db,
    JsonBody(payload): JsonBody<TaskPayload>,
) -> ApiResult<(StatusCode, Json<Task>)> {
    let task = Task::new(payload);
    db::insert_task(&conn, &task)?;
    info!(id = %task.id, "task created");
    Ok((StatusCode::CREATED, Json(task)))
}

/// GET /tarefas/:id
pub async fn get_task(conn: Db, Path(id): Path<String>) -> ApiResult<Json<Task>> {
    let task = db::get_task(&conn, &id)?.ok_or(ApiError::NotFound(NOT_FOUND))?;
    Ok(Json(task))
}

/// PUT /tarefas/:id - Replace every field of a task
pub async fn update_task(
    conn: Db,
    Path(id): Path<String>,
    JsonBody(payload): JsonBody<TaskPayload>,
) -> ApiResult<Json<Task>> {
    let task = db::update_task(&conn, &id, payload)?.ok_or(ApiError::NotFound(NOT_FOUND))?;
    info!(id = %task.id, "task updated");
    Ok(Json(task))
}

/// DELETE /tarefas/:id
pub async fn delete_task(conn: Db, Path(id): Path<String>) -> ApiResult<StatusCode> {
    if db::delete_task(&conn, &id)? {
        info!(%id, "task deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound(NOT_FOUND))
    }
}
