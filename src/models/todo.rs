use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Todo {
    pub id: i64,
    pub title: Option<String>,
    pub text: Option<String>,
    pub date: Option<String>,
    pub done: bool,
    pub archived: bool,
}

/// Body of `POST /todos`. `done` and `archived` are not accepted here;
/// every new todo starts open and unarchived.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewTodoRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
}

/// Body of `PUT /todos/{id}`. All four fields are written as given,
/// a missing field is written as NULL.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTodoRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub done: Option<bool>,
    #[serde(default)]
    pub archived: Option<bool>,
}
