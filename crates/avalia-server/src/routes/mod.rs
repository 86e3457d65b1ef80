pub mod document;
pub mod fields;
pub mod health;
pub mod page;
pub mod schema;
pub mod sessions;
