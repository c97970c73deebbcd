//! Server-side API backend and business logic.
//!
//! This module contains the complete backend for the marketplace: REST endpoints for
//! advertisements, categories, conditions and users, plus login and registration.
//! The backend uses Axum as the web framework and SeaORM for database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, access control, and validation
//! - **Service Layer** (`service/`) - Existence checks, timestamps, search and identity logic
//! - **Data Layer** (`data/`) - Generic repository over SeaORM entities plus identity queries
//! - **Model Layer** (`model/`) - Per-resource conversion and search configuration
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Bearer token guard
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB, JWT service, hashing cost)
//! - **Startup** (`startup`) - Database connection and migrations
//! - **Router** (`router`) - Axum route configuration and API documentation
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to appropriate controller
//! 2. **Middleware** guard checks the bearer token on mutating routes
//! 3. **Controller** validates the DTO and calls the service
//! 4. **Service** fetches through the repository, applies business rules
//! 5. **Data** queries the database and returns entity models
//! 6. **Controller** returns the read DTO or an `AppError` rendered as JSON

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
