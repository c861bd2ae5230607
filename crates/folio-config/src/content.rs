//! Content discovery configuration.

use serde::{Deserialize, Serialize};

fn default_root() -> String {
    String::from("content")
}

fn default_collection() -> String {
    String::from("certifications")
}

fn default_extensions() -> Vec<String> {
    vec![String::from("md")]
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ContentConfig {
    /// Content root, relative to the project root unless absolute.
    #[serde(default = "default_root")]
    pub root: String,

    /// Directory name that selects entries for the archive page.
    #[serde(default = "default_collection")]
    pub collection: String,

    /// File extensions treated as content files.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            collection: default_collection(),
            extensions: default_extensions(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = ContentConfig::default();
        assert_eq!(config.root, "content");
        assert_eq!(config.collection, "certifications");
        assert_eq!(config.extensions, vec!["md".to_string()]);
    }
}
