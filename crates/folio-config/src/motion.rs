//! Motion preference configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize)]
pub struct MotionConfig {
    /// Skip every reveal animation.
    #[serde(default)]
    pub prefers_reduced_motion: bool,
}
