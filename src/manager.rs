use crate::list::TodoList;
use crate::models::{Todo, TodoCriteria};

/// Stateless read layer over one [`TodoList`]; every view is recomputed on
/// each call.
pub struct TodoManager<'a> {
    list: &'a TodoList,
}

impl<'a> TodoManager<'a> {
    pub fn new(list: &'a TodoList) -> Self {
        Self { list }
    }

    /// Uncompleted todos first, completed after.
    pub fn all_todos(&self) -> Vec<Todo> {
        let mut todos = self.list.matching_todos(&TodoCriteria {
            completed: Some(false),
            ..Default::default()
        });
        todos.extend(self.completed_todos());
        todos
    }

    pub fn completed_todos(&self) -> Vec<Todo> {
        self.list.matching_todos(&TodoCriteria {
            completed: Some(true),
            ..Default::default()
        })
    }

    pub fn todos_in_month_year(&self, month: &str, year: &str) -> Vec<Todo> {
        self.all_todos()
            .into_iter()
            .filter(|todo| todo.is_within_month_year(month, year))
            .collect()
    }

    pub fn completed_todos_in_month_year(&self, month: &str, year: &str) -> Vec<Todo> {
        self.completed_todos()
            .into_iter()
            .filter(|todo| todo.is_within_month_year(month, year))
            .collect()
    }
}
