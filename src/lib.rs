pub mod api;
pub mod api_docs;
pub mod domain;
pub mod infrastructure;
pub mod models;

pub use infrastructure::config;
pub use infrastructure::db;
pub use infrastructure::seed;
pub use infrastructure::server;
