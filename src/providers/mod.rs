pub mod configs;
pub mod error;
pub mod github;
pub mod types;
pub mod utils;
