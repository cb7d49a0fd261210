//! Configuration module

mod app;

pub use app::AppConfig;
pub use app::ServerConfig;
pub use app::SiteConfig;
pub use app::StoreConfig;
