//! SQLite persistence.
//!
//! Concrete implementations of domain repository traits using SQLx, plus
//! the connection pool setup shared by the server and the admin CLI.
//!
//! # Repositories
//!
//! - [`SqliteUrlRepository`] - URL record storage and retrieval

pub mod pool;
pub mod sqlite_url_repository;

pub use pool::connect;
pub use sqlite_url_repository::SqliteUrlRepository;
