use crate::errors::AppError;
use crate::manager::TodoManager;
use crate::models::{
    SummaryResponse, Todo, TodoCriteria, TodoPatch, TodoProps, TodoQuery, TodosResponse,
};
use crate::state::AppState;
use crate::storage::persist_todos;
use crate::summary::build_summary;
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};

pub async fn list_todos(
    State(state): State<AppState>,
    Query(query): Query<TodoQuery>,
) -> Result<Json<TodosResponse>, AppError> {
    let todos = state.todos.lock().await;
    let manager = TodoManager::new(&todos);

    // An explicit completed flag narrows to that subset; omitting it keeps
    // the combined view.
    let view = match (query.month.as_deref(), query.year.as_deref()) {
        (Some(month), Some(year)) => match query.completed {
            Some(true) => manager.completed_todos_in_month_year(month, year),
            Some(false) => todos.matching_todos(&TodoCriteria {
                completed: Some(false),
                month: Some(month.to_string()),
                year: Some(year.to_string()),
                ..Default::default()
            }),
            None => manager.todos_in_month_year(month, year),
        },
        (None, None) => match query.completed {
            Some(true) => manager.completed_todos(),
            Some(false) => todos.matching_todos(&TodoCriteria {
                completed: Some(false),
                ..Default::default()
            }),
            None => manager.all_todos(),
        },
        _ => {
            return Err(AppError::bad_request(
                "month and year must be supplied together",
            ));
        }
    };

    Ok(Json(TodosResponse {
        count: view.len(),
        todos: view,
    }))
}

pub async fn create_todo(
    State(state): State<AppState>,
    Json(props): Json<TodoProps>,
) -> Result<(StatusCode, Json<Todo>), AppError> {
    let title = props.title.as_deref().map(str::trim).unwrap_or_default();
    if title.is_empty() {
        return Err(AppError::bad_request("title must not be empty"));
    }

    let mut todos = state.todos.lock().await;
    // Create ids are server-assigned; an id in the request body is ignored.
    let created = todos.add_todo(TodoProps { id: None, ..props });
    persist_todos(&state.data_path, &todos).await?;

    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_todo(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(patch): Json<TodoPatch>,
) -> Result<Json<Todo>, AppError> {
    let mut todos = state.todos.lock().await;
    let updated = todos
        .update(id, &patch)
        .ok_or_else(|| AppError::not_found(format!("no todo with id {id}")))?;
    persist_todos(&state.data_path, &todos).await?;

    Ok(Json(updated))
}

pub async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<StatusCode, AppError> {
    let mut todos = state.todos.lock().await;
    if !todos.delete_todo(id) {
        return Err(AppError::not_found(format!("no todo with id {id}")));
    }
    persist_todos(&state.data_path, &todos).await?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn toggle_todo(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<Todo>, AppError> {
    let mut todos = state.todos.lock().await;
    let completed = todos
        .find(id)
        .map(|todo| todo.completed)
        .ok_or_else(|| AppError::not_found(format!("no todo with id {id}")))?;

    let patch = TodoPatch {
        completed: Some(!completed),
        ..Default::default()
    };
    let updated = todos
        .update(id, &patch)
        .ok_or_else(|| AppError::not_found(format!("no todo with id {id}")))?;
    persist_todos(&state.data_path, &todos).await?;

    Ok(Json(updated))
}

pub async fn get_summary(State(state): State<AppState>) -> Result<Json<SummaryResponse>, AppError> {
    let todos = state.todos.lock().await;
    Ok(Json(build_summary(&todos)))
}
