use crate::errors::AppError;
use crate::list::TodoList;
use std::{env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::error;

pub fn resolve_data_path() -> Result<PathBuf, std::io::Error> {
    if let Ok(path) = env::var("TODOS_DATA_PATH") {
        return Ok(PathBuf::from(path));
    }

    Ok(PathBuf::from("data/todos.json"))
}

pub async fn load_todos(path: &Path) -> TodoList {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(todos) => todos,
            Err(err) => {
                error!("failed to parse data file: {err}");
                TodoList::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => TodoList::default(),
        Err(err) => {
            error!("failed to read data file: {err}");
            TodoList::default()
        }
    }
}

pub async fn persist_todos(path: &Path, todos: &TodoList) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(todos).map_err(AppError::internal)?;
    fs::write(path, payload).await.map_err(AppError::internal)?;
    Ok(())
}
