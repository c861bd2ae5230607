//! Build output configuration.

use serde::{Deserialize, Serialize};

fn default_path() -> String {
    String::from("public/archive/index.html")
}

const fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Output file, relative to the project root unless absolute.
    #[serde(default = "default_path")]
    pub path: String,

    /// Embed the row toggle and reveal bootstrap script.
    #[serde(default = "default_true")]
    pub client_script: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            client_script: default_true(),
        }
    }
}
