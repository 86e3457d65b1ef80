//! avalia-core
//!
//! Pure domain types for the pedagogical evaluation form: the record model,
//! the fixed option catalogs, the form schema and the per-session form state.
//! No I/O — this is the shared vocabulary of the Avalia system.

pub mod catalog;
pub mod dates;
pub mod error;
pub mod form;
pub mod models;
pub mod schema;
