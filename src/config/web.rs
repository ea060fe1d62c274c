use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Static asset and single-page-app settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WebConfig {
    /// Directory served for every non-API path.
    /// TOML: `web.public_dir`. Default: `public`.
    #[serde(default = "default_public_dir")]
    pub public_dir: PathBuf,

    /// SPA root document, relative to `public_dir`. Served in place of any
    /// static lookup that comes back 404.
    /// TOML: `web.index_file`. Default: `index.html`.
    #[serde(default = "default_index_file")]
    pub index_file: PathBuf,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            public_dir: default_public_dir(),
            index_file: default_index_file(),
        }
    }
}

impl WebConfig {
    pub fn index_path(&self) -> PathBuf {
        self.public_dir.join(&self.index_file)
    }
}

fn default_public_dir() -> PathBuf {
    PathBuf::from("public")
}

fn default_index_file() -> PathBuf {
    PathBuf::from("index.html")
}
