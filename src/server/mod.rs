//! Server-side API backend and business logic.
//!
//! This module contains the backend of the brainstorm application: JSON endpoints,
//! business rules for sessions and ideas, persistence, and process infrastructure.
//! The backend uses Axum as the web framework and SeaORM for database operations.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Validation, orchestration, and structured logging
//! - **Data Layer** (`data/`) - The `SessionRepository` trait and its SeaORM implementation
//! - **Model Layer** (`model/`) - Domain models, parameter types, and field validation
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **Logging** (`logging/`) - Console, rolling file, and error alert sinks
//! - **State** (`state`) - Shared application state (the session repository)
//! - **Startup** (`startup`) - Database connection, migrations, and HTTP client setup
//! - **Router** (`router`) - Axum route configuration and API documentation
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to appropriate controller
//! 2. **Controller** extracts parameters and converts DTOs to params
//! 3. **Service** validates, loads the session, and applies the change
//! 4. **Data** reads or writes the database and returns domain models
//! 5. **Controller** converts the domain model to a DTO and returns the response
//!
//! Any `AppError` returned along the way is turned into its HTTP response by the
//! controller.
//!
//! # Feature Gates
//!
//! This module is only available with the `server` feature flag enabled.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod logging;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
