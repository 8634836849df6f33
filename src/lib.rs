pub mod areas;
pub mod commands;
pub mod domain;
