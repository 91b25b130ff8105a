use sea_orm::DatabaseConnection;

/// Shared handler state. The connection is a pool handle and clones cheaply.
#[derive(Clone)]
pub struct ServerState {
    pub db: DatabaseConnection,
}

impl ServerState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}
