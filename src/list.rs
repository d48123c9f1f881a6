use crate::models::{Todo, TodoCriteria, TodoPatch, TodoProps};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TodoList {
    todos: Vec<Todo>,
    next_id: u64,
}

impl Default for TodoList {
    fn default() -> Self {
        Self {
            todos: Vec::new(),
            next_id: 1,
        }
    }
}

impl TodoList {
    pub fn new(records: impl IntoIterator<Item = TodoProps>) -> Self {
        let mut list = Self::default();
        for props in records {
            list.add_todo(props);
        }
        list
    }

    /// Appends a todo built from `props` and returns the canonical record.
    /// Records without an id get the next sequential one; explicit ids
    /// advance the counter past themselves so assigned ids stay unique.
    pub fn add_todo(&mut self, props: TodoProps) -> Todo {
        let id = match props.id {
            Some(id) => {
                self.next_id = self.next_id.max(id + 1);
                id
            }
            None => {
                let id = self.next_id;
                self.next_id += 1;
                id
            }
        };

        let todo = Todo {
            id,
            title: props.title.unwrap_or_default(),
            description: props.description,
            day: props.day,
            month: props.month,
            year: props.year,
            completed: props.completed.unwrap_or(false),
        };
        self.todos.push(todo.clone());
        todo
    }

    /// Removes the todo with `id`. Unknown ids are a no-op, not an error.
    pub fn delete_todo(&mut self, id: u64) -> bool {
        let before = self.todos.len();
        self.todos.retain(|todo| todo.id != id);
        self.todos.len() != before
    }

    /// Overwrites only fields the record already carries: an optional field
    /// left empty at construction cannot be introduced by a later update.
    pub fn update(&mut self, id: u64, patch: &TodoPatch) -> Option<Todo> {
        let todo = self.todos.iter_mut().find(|todo| todo.id == id)?;

        if let Some(title) = &patch.title {
            todo.title = title.clone();
        }
        if let Some(description) = &patch.description {
            if todo.description.is_some() {
                todo.description = Some(description.clone());
            }
        }
        if let Some(day) = &patch.day {
            if todo.day.is_some() {
                todo.day = Some(day.clone());
            }
        }
        if let Some(month) = &patch.month {
            if todo.month.is_some() {
                todo.month = Some(month.clone());
            }
        }
        if let Some(year) = &patch.year {
            if todo.year.is_some() {
                todo.year = Some(year.clone());
            }
        }
        if let Some(completed) = patch.completed {
            todo.completed = completed;
        }

        Some(todo.clone())
    }

    pub fn find(&self, id: u64) -> Option<&Todo> {
        self.todos.iter().find(|todo| todo.id == id)
    }

    /// Clones of every stored todo satisfying all supplied criteria, in
    /// storage order. Never hands out references into the live collection.
    pub fn matching_todos(&self, criteria: &TodoCriteria) -> Vec<Todo> {
        self.todos
            .iter()
            .filter(|todo| criteria.matches(todo))
            .cloned()
            .collect()
    }

    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn titled(title: &str) -> TodoProps {
        TodoProps {
            title: Some(title.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn ids_start_at_one_and_increase() {
        let mut list = TodoList::default();
        let first = list.add_todo(titled("one"));
        let second = list.add_todo(titled("two"));
        let third = list.add_todo(titled("three"));
        assert_eq!([first.id, second.id, third.id], [1, 2, 3]);
    }

    #[test]
    fn deleted_ids_are_never_reused() {
        let mut list = TodoList::default();
        list.add_todo(titled("one"));
        let second = list.add_todo(titled("two"));
        assert!(list.delete_todo(second.id));

        let third = list.add_todo(titled("three"));
        assert_eq!(third.id, 3);
    }

    #[test]
    fn explicit_id_advances_the_counter() {
        let mut list = TodoList::default();
        let imported = list.add_todo(TodoProps {
            id: Some(10),
            title: Some("from server".to_string()),
            ..Default::default()
        });
        assert_eq!(imported.id, 10);

        let next = list.add_todo(titled("local"));
        assert_eq!(next.id, 11);
    }

    #[test]
    fn completed_and_uncompleted_partition_the_list() {
        let mut list = TodoList::default();
        list.add_todo(titled("a"));
        list.add_todo(TodoProps {
            title: Some("b".to_string()),
            completed: Some(true),
            ..Default::default()
        });
        list.add_todo(titled("c"));

        let done: BTreeSet<u64> = list
            .matching_todos(&TodoCriteria {
                completed: Some(true),
                ..Default::default()
            })
            .iter()
            .map(|todo| todo.id)
            .collect();
        let open: BTreeSet<u64> = list
            .matching_todos(&TodoCriteria {
                completed: Some(false),
                ..Default::default()
            })
            .iter()
            .map(|todo| todo.id)
            .collect();
        let all: BTreeSet<u64> = list.todos().iter().map(|todo| todo.id).collect();

        assert!(done.is_disjoint(&open));
        assert_eq!(done.union(&open).copied().collect::<BTreeSet<_>>(), all);
    }

    #[test]
    fn update_cannot_introduce_a_field_absent_at_construction() {
        let mut list = TodoList::default();
        let created = list.add_todo(titled("no due date"));

        let updated = list
            .update(
                created.id,
                &TodoPatch {
                    title: Some("renamed".to_string()),
                    day: Some("12".to_string()),
                    month: Some("5".to_string()),
                    ..Default::default()
                },
            )
            .expect("todo exists");

        assert_eq!(updated.title, "renamed");
        assert_eq!(updated.day, None);
        assert_eq!(updated.month, None);
    }

    #[test]
    fn update_overwrites_fields_present_at_construction() {
        let mut list = TodoList::default();
        let created = list.add_todo(TodoProps {
            title: Some("dated".to_string()),
            month: Some("4".to_string()),
            year: Some("2023".to_string()),
            ..Default::default()
        });

        let updated = list
            .update(
                created.id,
                &TodoPatch {
                    month: Some("6".to_string()),
                    completed: Some(true),
                    ..Default::default()
                },
            )
            .expect("todo exists");

        assert_eq!(updated.month.as_deref(), Some("6"));
        assert_eq!(updated.year.as_deref(), Some("2023"));
        assert!(updated.completed);
    }

    #[test]
    fn update_of_unknown_id_is_a_noop() {
        let mut list = TodoList::default();
        list.add_todo(titled("only"));
        assert!(
            list.update(
                99,
                &TodoPatch {
                    title: Some("ghost".to_string()),
                    ..Default::default()
                },
            )
            .is_none()
        );
        assert_eq!(list.todos()[0].title, "only");
    }

    #[test]
    fn delete_removes_exactly_the_matching_todo() {
        let mut list = TodoList::default();
        list.add_todo(titled("keep"));
        let doomed = list.add_todo(titled("drop"));

        assert!(list.delete_todo(doomed.id));
        assert!(list.find(doomed.id).is_none());
        assert_eq!(list.len(), 1);

        assert!(!list.delete_todo(doomed.id));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn matching_todos_returns_independent_copies() {
        let mut list = TodoList::default();
        let created = list.add_todo(titled("original"));

        let mut copies = list.matching_todos(&TodoCriteria::default());
        copies[0].title = "scribbled".to_string();

        assert_eq!(
            list.find(created.id).map(|todo| todo.title.as_str()),
            Some("original")
        );
    }

    #[test]
    fn snapshot_round_trips_through_json() {
        let mut list = TodoList::default();
        list.add_todo(TodoProps {
            title: Some("persisted".to_string()),
            month: Some("2".to_string()),
            year: Some("2024".to_string()),
            ..Default::default()
        });
        list.add_todo(titled("second"));

        let bytes = serde_json::to_vec(&list).expect("serialize");
        let mut restored: TodoList = serde_json::from_slice(&bytes).expect("deserialize");

        assert_eq!(restored.todos(), list.todos());
        assert_eq!(restored.add_todo(titled("third")).id, 3);
    }
}
