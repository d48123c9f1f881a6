use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    pub id: u64,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub month: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    #[serde(default)]
    pub completed: bool,
}

impl Todo {
    pub fn is_within_month_year(&self, month: &str, year: &str) -> bool {
        self.month.as_deref() == Some(month) && self.year.as_deref() == Some(year)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TodoProps {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub day: Option<String>,
    #[serde(default)]
    pub month: Option<String>,
    #[serde(default)]
    pub year: Option<String>,
    #[serde(default)]
    pub completed: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TodoPatch {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub day: Option<String>,
    #[serde(default)]
    pub month: Option<String>,
    #[serde(default)]
    pub year: Option<String>,
    #[serde(default)]
    pub completed: Option<bool>,
}

#[derive(Debug, Clone, Default)]
pub struct TodoCriteria {
    pub id: Option<u64>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub day: Option<String>,
    pub month: Option<String>,
    pub year: Option<String>,
    pub completed: Option<bool>,
}

impl TodoCriteria {
    pub fn matches(&self, todo: &Todo) -> bool {
        self.id.is_none_or(|id| todo.id == id)
            && self.title.as_deref().is_none_or(|title| todo.title == title)
            && self
                .description
                .as_deref()
                .is_none_or(|value| todo.description.as_deref() == Some(value))
            && self
                .day
                .as_deref()
                .is_none_or(|value| todo.day.as_deref() == Some(value))
            && self
                .month
                .as_deref()
                .is_none_or(|value| todo.month.as_deref() == Some(value))
            && self
                .year
                .as_deref()
                .is_none_or(|value| todo.year.as_deref() == Some(value))
            && self.completed.is_none_or(|done| todo.completed == done)
    }
}

#[derive(Debug, Deserialize)]
pub struct TodoQuery {
    #[serde(default)]
    pub completed: Option<bool>,
    #[serde(default)]
    pub month: Option<String>,
    #[serde(default)]
    pub year: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TodosResponse {
    pub count: usize,
    pub todos: Vec<Todo>,
}

#[derive(Debug, Serialize)]
pub struct DateGroup {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub month: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    pub completed: bool,
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub all_count: usize,
    pub completed_count: usize,
    pub all_dates: Vec<DateGroup>,
    pub completed_dates: Vec<DateGroup>,
}
