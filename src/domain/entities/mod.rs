//! Core domain entities.
//!
//! - [`UrlRecord`] - A stored short code → URL mapping
//! - [`NewUrlRecord`] - Input for inserting a record

pub mod url_record;

pub use url_record::{NewUrlRecord, UrlRecord};
