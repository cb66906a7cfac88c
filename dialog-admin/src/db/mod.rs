//! Database access for dialog-admin

pub mod sessions;
pub mod settings;
