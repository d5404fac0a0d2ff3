//! # School Reviews Database Crate
//!
//! The data access layer for the `reviews` table on a MySQL/MariaDB server.
//!
//! ## Architectural Principles
//!
//! - **One connection per operation:** every call opens its own connection and
//!   closes it before returning, on success and on failure alike. Nothing is
//!   pooled or shared between requests.
//! - **Parameterized only:** statements are fixed strings with `?` placeholders;
//!   values are always bound, never formatted into SQL.
//! - **Failures are values:** every storage error is logged here with the
//!   statement name and then returned as `DbError`. Callers only need to tell
//!   `Ok` from `Err`.
//!
//! ## Public API
//!
//! - `Database`: connection settings plus the `fetch_all`/`execute` primitives.
//! - `run_migrations` / `check_connection`: startup utilities.
//! - `ReviewRepository`: the trait the web server talks to, with `DbRepository`
//!   as the MySQL-backed implementation.
//! - `DbError`: the specific error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod connection;
pub mod error;
pub mod executor;
pub mod repository;

// Re-export the key components to create a clean, public-facing API.
pub use connection::{Database, check_connection, connect_options, run_migrations};
pub use error::DbError;
pub use executor::{Param, Statement};
pub use repository::{DbRepository, ReviewRepository};
