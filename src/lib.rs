pub mod app;
pub mod errors;
pub mod handlers;
pub mod list;
pub mod manager;
pub mod models;
pub mod state;
pub mod storage;
pub mod summary;

pub use app::router;
pub use list::TodoList;
pub use manager::TodoManager;
pub use models::Todo;
pub use state::AppState;
pub use storage::{load_todos, resolve_data_path};
