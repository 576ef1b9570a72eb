use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One stored survey submission.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct Response {
    pub id: i64,
    pub name: Option<String>,
    pub hobby: Option<String>,
    pub education: Option<String>,
    pub interest: Option<String>,
    pub job: Option<String>,
    pub happiness: Option<i64>,
}

/// Incoming form payload. Every field is optional: a missing input is
/// forwarded to the store as NULL, never rejected. `happiness` stays raw
/// text all the way to the bind (see `schema.rs`).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NewResponse {
    pub name: Option<String>,
    pub hobby: Option<String>,
    pub education: Option<String>,
    pub interest: Option<String>,
    pub job: Option<String>,
    pub happiness: Option<String>,
}
