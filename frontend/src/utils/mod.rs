pub mod format;
pub mod id;
pub mod time;
