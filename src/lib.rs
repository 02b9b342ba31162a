pub mod api;
pub mod config;
pub mod export;
pub mod loader;
pub mod render;
pub mod search;
pub mod session;
pub mod types;

pub use config::Config;
pub use loader::CatalogLoader;
pub use session::Session;
pub use types::*;
