use sqlx::SqlitePool;

use crate::models::SchoolRow;

const SQL_CREATE_SCHOOLS: &str = r#"
CREATE TABLE IF NOT EXISTS schools (
  id INTEGER PRIMARY KEY AUTOINCREMENT,
  name TEXT NOT NULL,
  address TEXT NOT NULL,
  latitude REAL NOT NULL,
  longitude REAL NOT NULL
)
"#;

// Bootstrap for a fresh database file (and in-memory test databases).
pub async fn ensure_schema(pool: &SqlitePool) -> sqlx::Result<()> {
    sqlx::query(SQL_CREATE_SCHOOLS).execute(pool).await?;
    Ok(())
}

const SQL_INSERT_SCHOOL: &str = r#"
INSERT INTO schools (name, address, latitude, longitude)
VALUES (?, ?, ?, ?)
"#;

pub async fn insert_school(
    pool: &SqlitePool,
    name: &str,
    address: &str,
    latitude: f64,
    longitude: f64,
) -> sqlx::Result<i64> {
    let res = sqlx::query(SQL_INSERT_SCHOOL)
        .bind(name)
        .bind(address)
        .bind(latitude)
        .bind(longitude)
        .execute(pool)
        .await?;
    Ok(res.last_insert_rowid())
}

const SQL_LIST_SCHOOLS: &str = r#"
SELECT
  id,
  name,
  address,
  latitude,
  longitude
FROM schools
ORDER BY id ASC
"#;

pub async fn list_schools(pool: &SqlitePool) -> sqlx::Result<Vec<SchoolRow>> {
    sqlx::query_as::<_, SchoolRow>(SQL_LIST_SCHOOLS)
        .fetch_all(pool)
        .await
}
