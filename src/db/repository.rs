use sqlx::SqlitePool;

use crate::models::{NewTodoRequest, Todo, UpdateTodoRequest};

/// Upper bound on rows returned by [`fetch_todos`].
pub const LIST_LIMIT: i64 = 10;

pub async fn ping(db: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(db).await?;
    Ok(())
}

/// Rows come back in whatever order the store yields them.
pub async fn fetch_todos(db: &SqlitePool) -> Result<Vec<Todo>, sqlx::Error> {
    sqlx::query_as::<_, Todo>(
        "SELECT id, title, text, date, done, archived FROM todos LIMIT ?1"
    )
    .bind(LIST_LIMIT)
    .fetch_all(db)
    .await
}

pub async fn insert_todo(db: &SqlitePool, req: NewTodoRequest) -> Result<Todo, sqlx::Error> {
    sqlx::query_as::<_, Todo>(
        r#"
        INSERT INTO todos (title, text, date, done, archived)
        VALUES (?1, ?2, ?3, 0, 0)
        RETURNING id, title, text, date, done, archived
        "#
    )
    .bind(req.title)
    .bind(req.text)
    .bind(req.date)
    .fetch_one(db)
    .await
}

/// Overwrites all four mutable columns. `Ok(None)` means no row has `id`.
pub async fn update_todo(
    db: &SqlitePool,
    id: i64,
    req: UpdateTodoRequest,
) -> Result<Option<Todo>, sqlx::Error> {
    sqlx::query_as::<_, Todo>(
        r#"
        UPDATE todos
        SET title = ?1,
            text = ?2,
            done = ?3,
            archived = ?4
        WHERE id = ?5
        RETURNING id, title, text, date, done, archived
        "#
    )
    .bind(req.title)
    .bind(req.text)
    .bind(req.done)
    .bind(req.archived)
    .bind(id)
    .fetch_optional(db)
    .await
}

pub async fn delete_todo(db: &SqlitePool, id: i64) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM todos WHERE id = ?1")
        .bind(id)
        .execute(db)
        .await?
        .rows_affected();

    Ok(result)
}

pub async fn delete_all_todos(db: &SqlitePool) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM todos")
        .execute(db)
        .await?
        .rows_affected();

    Ok(result)
}
