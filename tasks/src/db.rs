//! Data access for the `tarefas` table. Each function issues one statement.

use rusqlite::{params, Connection, OptionalExtension, Row};
use shared::{Task, TaskPayload};

pub const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS tarefas (
    id        TEXT PRIMARY KEY NOT NULL,
    titulo    TEXT NOT NULL,
    descricao TEXT,
    completa  BOOLEAN NOT NULL DEFAULT 0
);
CREATE INDEX IF NOT EXISTS ix_tarefas_id ON tarefas (id);
"#;

fn task_from_row(row: &Row<'_>) -> rusqlite::Result<Task> {
    Ok(Task {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        completed: row.get(3)?,
    })
}

pub fn list_tasks(conn: &Connection) -> rusqlite::Result<Vec<Task>> {
    let mut stmt =
        conn.prepare("SELECT id, titulo, descricao, completa FROM tarefas ORDER BY rowid")?;
    let tasks = stmt
        .query_map([], task_from_row)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(tasks)
}

pub fn insert_task(conn: &Connection, task: &Task) -> rusqlite::Result<()> {
    conn.execute(
        "INSERT INTO tarefas (id, titulo, descricao, completa) VALUES (?1, ?2, ?3, ?4)",
        params![task.id, task.title, task.description, task.completed],
    )?;
    Ok(())
}

pub fn get_task(conn: &Connection, id: &str) -> rusqlite::Result<Option<Task>> {
    conn.query_row(
        "SELECT id, titulo, descricao, completa FROM tarefas WHERE id = ?1",
        [id],
        task_from_row,
    )
    .optional()
}

/// Overwrite every field of task `id`. Returns `None` when no row matched.
pub fn update_task(
    conn: &Connection,
    id: &str,
    payload: TaskPayload,
) -> rusqlite::Result<Option<Task>> {
    let changed = conn.execute(
        "UPDATE tarefas SET titulo = ?1, descricao = ?2, completa = ?3 WHERE id = ?4",
        params![payload.title, payload.description, payload.completed, id],
    )?;
    Ok((changed > 0).then(|| Task::with_id(id.to_string(), payload)))
}

/// Returns whether a row was removed.
pub fn delete_task(conn: &Connection, id: &str) -> rusqlite::Result<bool> {
    let deleted = conn.execute("DELETE FROM tarefas WHERE id = ?1", [id])?;
    Ok(deleted > 0)
}
