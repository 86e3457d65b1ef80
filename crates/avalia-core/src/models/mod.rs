pub mod conclusion;
pub mod item;
pub mod record;
