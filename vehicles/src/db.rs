//! Data access for the `carros` table. Each function issues one statement.

use rusqlite::{params, Connection, OptionalExtension, Row};
use shared::{Vehicle, VehiclePayload};

pub const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS carros (
    id         INTEGER PRIMARY KEY AUTOINCREMENT,
    marca      TEXT NOT NULL,
    modelo     TEXT NOT NULL,
    ano        INTEGER NOT NULL,
    imagem_url TEXT
);
"#;

fn vehicle_from_row(row: &Row<'_>) -> rusqlite::Result<Vehicle> {
    Ok(Vehicle {
        id: row.get(0)?,
        brand: row.get(1)?,
        model: row.get(2)?,
        year: row.get(3)?,
        image_url: row.get(4)?,
    })
}

/// Escape `LIKE` metacharacters so `term` only matches itself.
fn like_literal(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// All vehicles, or only those whose brand contains `brand`.
///
/// Matching uses SQLite `LIKE`, so it ignores ASCII case.
pub fn list_vehicles(conn: &Connection, brand: Option<&str>) -> rusqlite::Result<Vec<Vehicle>> {
    let mut stmt = conn.prepare(
        "SELECT id, marca, modelo, ano, imagem_url FROM carros \
         WHERE ?1 IS NULL OR marca LIKE '%' || ?1 || '%' ESCAPE '\\' \
         ORDER BY id",
    )?;
    let vehicles = stmt
        .query_map([brand.map(like_literal)], vehicle_from_row)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(vehicles)
}

pub fn insert_vehicle(conn: &Connection, payload: VehiclePayload) -> rusqlite::Result<Vehicle> {
    conn.execute(
        "INSERT INTO carros (marca, modelo, ano, imagem_url) VALUES (?1, ?2, ?3, ?4)",
        params![payload.brand, payload.model, payload.year, payload.image_url],
    )?;
    Ok(Vehicle::with_id(conn.last_insert_rowid(), payload))
}

pub fn get_vehicle(conn: &Connection, id: i64) -> rusqlite::Result<Option<Vehicle>> {
    conn.query_row(
        "SELECT id, marca, modelo, ano, imagem_url FROM carros WHERE id = ?1",
        [id],
        vehicle_from_row,
    )
    .optional()
}

/// Overwrite every field of vehicle `id`. Returns `None` when no row matched.
pub fn update_vehicle(
    conn: &Connection,
    id: i64,
    payload: VehiclePayload,
) -> rusqlite::Result<Option<Vehicle>> {
    let changed = conn.execute(
        "UPDATE carros SET marca = ?1, modelo = ?2, ano = ?3, imagem_url = ?4 WHERE id = ?5",
        params![payload.brand, payload.model, payload.year, payload.image_url, id],
    )?;
    Ok((changed > 0).then(|| Vehicle::with_id(id, payload)))
}

pub fn delete_vehicle(conn: &Connection, id: i64) -> rusqlite::Result<bool> {
    let deleted = conn.execute("DELETE FROM carros WHERE id = ?1", [id])?;
    Ok(deleted > 0)
}
