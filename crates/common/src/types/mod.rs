use serde::Serialize;

/// Body of `GET /health`.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Health {
    pub status: &'static str,
    pub db_healthy: bool,
}

impl Health {
    pub fn new(db_healthy: bool) -> Self {
        Self { status: "ok", db_healthy }
    }
}
