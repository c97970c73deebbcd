//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request handler
//! through Axum's state extraction. It holds:
//! - Database connection pool for data persistence
//! - JWT service for issuing and validating bearer tokens
//! - bcrypt cost used when hashing new passwords

use sea_orm::DatabaseConnection;

use crate::server::service::jwt::JwtService;

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `JwtService` only holds the signing secret and token lifetimes
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Token issuance and validation.
    pub jwt: JwtService,

    /// bcrypt cost for hashing passwords at registration.
    pub password_cost: u32,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `jwt` - Configured JWT service
    /// - `password_cost` - bcrypt cost for new password hashes
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(db: DatabaseConnection, jwt: JwtService, password_cost: u32) -> Self {
        Self {
            db,
            jwt,
            password_cost,
        }
    }
}
