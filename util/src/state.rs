//! Application state container shared across Axum route handlers.
//!
//! Holds the pooled database handle. Handlers clone it into the record services they
//! construct, so every request acquires and releases connections on its own.

use sea_orm::DatabaseConnection;

/// Central application state shared across the server.
#[derive(Clone)]
pub struct AppState {
    db: DatabaseConnection,
}

impl AppState {
    /// Creates a new `AppState` around an established database connection.
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns a shared reference to the internal `DatabaseConnection`.
    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Returns a cloned copy of the database connection.
    ///
    /// Record services take ownership of their handle, so this is what handlers use.
    pub fn db_clone(&self) -> DatabaseConnection {
        self.db.clone()
    }
}
