//! Page text and site chrome configuration.

use serde::{Deserialize, Serialize};

fn default_title() -> String {
    String::from("Archive")
}

fn default_heading() -> String {
    String::from("Certifications")
}

fn default_subtitle() -> String {
    String::from("A big list of Certifications I’ve done")
}

fn default_lang() -> String {
    String::from("en")
}

fn default_nav() -> Vec<NavLink> {
    [
        ("About", "/#about"),
        ("Experience", "/#jobs"),
        ("Work", "/#projects"),
        ("Archive", "/archive"),
        ("Contact", "/#contact"),
    ]
    .into_iter()
    .map(|(name, url)| NavLink {
        name: name.to_string(),
        url: url.to_string(),
    })
    .collect()
}

/// A navigation entry rendered by the site layout.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct NavLink {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SiteConfig {
    /// Document `<title>`.
    #[serde(default = "default_title")]
    pub title: String,

    /// Page heading shown above the table.
    #[serde(default = "default_heading")]
    pub heading: String,

    #[serde(default = "default_subtitle")]
    pub subtitle: String,

    /// `lang` attribute of the document.
    #[serde(default = "default_lang")]
    pub lang: String,

    #[serde(default = "default_nav")]
    pub nav: Vec<NavLink>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            heading: default_heading(),
            subtitle: default_subtitle(),
            lang: default_lang(),
            nav: default_nav(),
        }
    }
}
