mod main_config;
mod server_config;

pub use main_config::{ClientConfigManager, Config, get_config_manager};
pub use server_config::ServerConfig;
