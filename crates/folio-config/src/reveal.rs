//! Scroll-reveal animation configuration.
//!
//! Field names follow the ScrollReveal option set; the renderer translates
//! them to camelCase when it writes the bootstrap script.

use serde::{Deserialize, Serialize};

fn default_origin() -> String {
    String::from("bottom")
}

fn default_distance() -> String {
    String::from("20px")
}

const fn default_duration() -> u32 {
    500
}

const fn default_delay() -> u32 {
    200
}

const fn default_scale() -> f64 {
    1.0
}

fn default_easing() -> String {
    String::from("cubic-bezier(0.645, 0.045, 0.355, 1)")
}

const fn default_true() -> bool {
    true
}

fn default_use_delay() -> String {
    String::from("always")
}

const fn default_view_factor() -> f64 {
    0.25
}

const fn default_row_stagger() -> u32 {
    10
}

/// Rotation applied at the start of the reveal, in degrees.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize, Serialize)]
pub struct Rotate {
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(default)]
    pub z: f64,
}

/// Viewport inset, in pixels, used to decide when an element is visible.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize, Serialize)]
pub struct ViewOffset {
    #[serde(default)]
    pub top: f64,
    #[serde(default)]
    pub right: f64,
    #[serde(default)]
    pub bottom: f64,
    #[serde(default)]
    pub left: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RevealConfig {
    #[serde(default = "default_origin")]
    pub origin: String,

    #[serde(default = "default_distance")]
    pub distance: String,

    /// Milliseconds.
    #[serde(default = "default_duration")]
    pub duration: u32,

    /// Base delay in milliseconds, used for the page header.
    #[serde(default = "default_delay")]
    pub delay: u32,

    #[serde(default)]
    pub rotate: Rotate,

    #[serde(default)]
    pub opacity: f64,

    #[serde(default = "default_scale")]
    pub scale: f64,

    #[serde(default = "default_easing")]
    pub easing: String,

    #[serde(default = "default_true")]
    pub mobile: bool,

    #[serde(default)]
    pub reset: bool,

    #[serde(default = "default_use_delay")]
    pub use_delay: String,

    /// Fraction of the element that must be visible, `0.0..=1.0`.
    #[serde(default = "default_view_factor")]
    pub view_factor: f64,

    #[serde(default)]
    pub view_offset: ViewOffset,

    /// Delay for the table container, in milliseconds.
    #[serde(default = "default_delay")]
    pub table_delay: u32,

    /// Per-row delay step, in milliseconds.
    #[serde(default = "default_row_stagger")]
    pub row_stagger: u32,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            origin: default_origin(),
            distance: default_distance(),
            duration: default_duration(),
            delay: default_delay(),
            rotate: Rotate::default(),
            opacity: 0.0,
            scale: default_scale(),
            easing: default_easing(),
            mobile: default_true(),
            reset: false,
            use_delay: default_use_delay(),
            view_factor: default_view_factor(),
            view_offset: ViewOffset::default(),
            table_delay: default_delay(),
            row_stagger: default_row_stagger(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = RevealConfig::default();
        assert_eq!(config.origin, "bottom");
        assert_eq!(config.distance, "20px");
        assert_eq!(config.duration, 500);
        assert_eq!(config.delay, 200);
        assert_eq!(config.table_delay, 200);
        assert_eq!(config.row_stagger, 10);
        assert!((config.view_factor - 0.25).abs() < f64::EPSILON);
        assert!(config.mobile);
        assert!(!config.reset);
    }
}
