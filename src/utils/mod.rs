//! Utility functions shared across layers.
//!
//! - [`code_generator`] - Random short code generation
//! - [`url_validator`] - Candidate-based URL validation and normalization
//! - [`db_error`] - Classification of SQLite constraint failures
//! - [`timestamp`] - Second-precision UTC timestamps and their text form

pub mod code_generator;
pub mod db_error;
pub mod timestamp;
pub mod url_validator;
