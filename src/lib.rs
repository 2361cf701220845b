pub mod config;
pub mod error;
pub mod loader;
pub mod model;
pub mod text;
