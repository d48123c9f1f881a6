use crate::list::TodoList;
use crate::manager::TodoManager;
use crate::models::{DateGroup, SummaryResponse, Todo};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatePolicy {
    /// The first todo seen for a (month, year) pair stands for the bucket.
    KeepFirst,
    /// A later todo displaces a completed representative, so a bucket with
    /// any unfinished work is shown as unfinished.
    PreferIncomplete,
}

pub fn uniquely_dated(todos: &[Todo]) -> Vec<Todo> {
    uniquely_dated_with(todos, DatePolicy::PreferIncomplete)
}

/// One representative todo per distinct (month, year) pair, sorted by year
/// then month, both compared numerically. Todos missing either field share
/// the undated bucket and sort before dated ones.
pub fn uniquely_dated_with(todos: &[Todo], policy: DatePolicy) -> Vec<Todo> {
    let mut reduced: Vec<Todo> = Vec::new();
    for todo in todos {
        let existing = reduced
            .iter_mut()
            .find(|entry| entry.month == todo.month && entry.year == todo.year);
        match existing {
            Some(entry) => {
                if policy == DatePolicy::PreferIncomplete && entry.completed {
                    *entry = todo.clone();
                }
            }
            None => reduced.push(todo.clone()),
        }
    }

    reduced.sort_by_key(date_sort_key);
    reduced
}

fn date_sort_key(todo: &Todo) -> (Option<i64>, Option<i64>) {
    (numeric(todo.year.as_deref()), numeric(todo.month.as_deref()))
}

fn numeric(field: Option<&str>) -> Option<i64> {
    field.and_then(|value| value.parse().ok())
}

/// Navigation payload: totals for the all/completed views plus one group per
/// date bucket, each carrying its representative's state and the bucket size.
pub fn build_summary(list: &TodoList) -> SummaryResponse {
    let manager = TodoManager::new(list);
    let all = manager.all_todos();
    let completed = manager.completed_todos();

    SummaryResponse {
        all_count: all.len(),
        completed_count: completed.len(),
        all_dates: date_groups(&all),
        completed_dates: date_groups(&completed),
    }
}

fn date_groups(todos: &[Todo]) -> Vec<DateGroup> {
    uniquely_dated(todos)
        .into_iter()
        .map(|representative| DateGroup {
            count: todos
                .iter()
                .filter(|todo| {
                    todo.month == representative.month && todo.year == representative.year
                })
                .count(),
            completed: representative.completed,
            month: representative.month,
            year: representative.year,
        })
        .collect()
}
