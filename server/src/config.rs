use std::env;
use std::path::PathBuf;

/// Runtime configuration, read from the environment once at startup and
/// handed into the constructors that need it.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub bind_addr: String,
    pub media_root: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");
        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let media_root = env::var("MEDIA_ROOT")
            .unwrap_or_else(|_| "uploaded_images".to_string())
            .into();

        Self {
            database_url,
            bind_addr,
            media_root,
        }
    }
}
