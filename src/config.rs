mod config_loader;
pub mod types;

pub use config_loader::{config_path, load_config, load_config_from_path, parse_config_toml};
pub use types::{ClipboardBackend, Config};
