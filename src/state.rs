use crate::list::TodoList;
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub data_path: PathBuf,
    pub todos: Arc<Mutex<TodoList>>,
}

impl AppState {
    pub fn new(data_path: PathBuf, todos: TodoList) -> Self {
        Self {
            data_path,
            todos: Arc::new(Mutex::new(todos)),
        }
    }
}
