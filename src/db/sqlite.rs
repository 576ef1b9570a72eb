use crate::db::models::{NewResponse, Response};
use crate::db::schema::SQLITE_INIT;
use crate::error::AppError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions, SqliteRow};
use sqlx::{Pool, Row, Sqlite};
use std::str::FromStr;

pub type SqlitePool = Pool<Sqlite>;

#[derive(Clone)]
pub struct ResponseStore {
    pool: SqlitePool,
}

impl ResponseStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open (creating if missing) the SQLite database behind `database_url`.
    pub async fn connect(database_url: &str) -> Result<Self, AppError> {
        let connect_opts = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new().connect_with(connect_opts).await?;
        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Initialize the schema by executing the bundled DDL. Idempotent; run
    /// once at startup before serving.
    pub async fn init_schema(&self) -> Result<(), AppError> {
        // execute multiple statements safely (SQLite supports multi-commands but sqlx::query doesn't)
        for stmt in SQLITE_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }
        Ok(())
    }

    /// Persist one submission and return the stored row, id assigned.
    /// `happiness` is bound as the raw submitted text; SQLite integer
    /// affinity decides what actually lands in the column.
    pub async fn insert(&self, new: NewResponse) -> Result<Response, AppError> {
        let result = sqlx::query(
            r#"
            INSERT INTO responses (name, hobby, education, interest, job, happiness)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(new.name)
        .bind(new.hobby)
        .bind(new.education)
        .bind(new.interest)
        .bind(new.job)
        .bind(new.happiness)
        .execute(&self.pool)
        .await?;

        self.get_by_id(result.last_insert_rowid()).await
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Response, AppError> {
        let row = sqlx::query(
            r#"SELECT id, name, hobby, education, interest, job, happiness
               FROM responses WHERE id = ?"#,
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await?;
        Self::row_to_model(row)
    }

    /// All responses in insertion order.
    pub async fn list_all(&self) -> Result<Vec<Response>, AppError> {
        let rows = sqlx::query(
            r#"SELECT id, name, hobby, education, interest, job, happiness
               FROM responses ORDER BY id"#,
        )
        .fetch_all(&self.pool)
        .await?;
        rows.into_iter().map(Self::row_to_model).collect()
    }

    /// Remove every response unconditionally. Returns the number of rows
    /// deleted; zero on an already-empty table.
    pub async fn delete_all(&self) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM responses")
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    fn row_to_model(row: SqliteRow) -> Result<Response, AppError> {
        let id: i64 = row.try_get("id")?;
        let name: Option<String> = row.try_get("name")?;
        let hobby: Option<String> = row.try_get("hobby")?;
        let education: Option<String> = row.try_get("education")?;
        let interest: Option<String> = row.try_get("interest")?;
        let job: Option<String> = row.try_get("job")?;
        // Fails on rows where non-numeric happiness text was accepted at
        // insert time; the error propagates as a server error.
        let happiness: Option<i64> = row.try_get("happiness")?;

        Ok(Response {
            id,
            name,
            hobby,
            education,
            interest,
            job,
            happiness,
        })
    }
}
