//! avalia-export
//!
//! Turns a completed evaluation record into a DOCX document: the record is
//! first laid out as an ordered list of blocks, then serialized with docx-rs.

pub mod docx;
pub mod error;
pub mod layout;
pub mod legal;
pub mod render;
pub mod styles;
