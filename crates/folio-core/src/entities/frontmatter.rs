use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The YAML header of a content file, exactly as written.
///
/// Every field is optional at this layer; [`crate::Entry::from_frontmatter`]
/// decides what is required. Unknown keys are ignored so content files can
/// carry fields other pages use.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Frontmatter {
    /// Calendar date, `YYYY-MM-DD` or an RFC 3339 timestamp.
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    /// Issuing organization.
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub external: Option<String>,
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub folder: Option<String>,
    #[serde(default)]
    pub bookmark: Option<String>,
    /// Apple App Store URL.
    #[serde(default)]
    pub ios: Option<String>,
    /// Google Play Store URL.
    #[serde(default)]
    pub android: Option<String>,
}
