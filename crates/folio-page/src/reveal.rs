//! Entrance reveal: options, targets, and the run-once hook.
//!
//! The animation library is reached through [`Revealer`]; the user's motion
//! preference through [`MotionPreference`]. [`RevealHook`] is the "after
//! commit, run when the dependency changed" gate. Its only dependency is the
//! motion preference, so ordinary re-renders never re-fire it.

use folio_config::{MotionConfig, RevealConfig, Rotate, ViewOffset};
use folio_core::EntryId;
use serde::Serialize;

use crate::error::PageError;

/// Options for a single reveal call, serialized in ScrollReveal's shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RevealOptions {
    pub origin: String,
    pub distance: String,
    pub duration: u32,
    pub delay: u32,
    pub rotate: Rotate,
    pub opacity: f64,
    pub scale: f64,
    pub easing: String,
    pub mobile: bool,
    pub reset: bool,
    pub use_delay: String,
    pub view_factor: f64,
    pub view_offset: ViewOffset,
}

impl RevealOptions {
    /// Base options with the configured default delay and view factor.
    #[must_use]
    pub fn from_config(config: &RevealConfig) -> Self {
        Self {
            origin: config.origin.clone(),
            distance: config.distance.clone(),
            duration: config.duration,
            delay: config.delay,
            rotate: config.rotate,
            opacity: config.opacity,
            scale: config.scale,
            easing: config.easing.clone(),
            mobile: config.mobile,
            reset: config.reset,
            use_delay: config.use_delay.clone(),
            view_factor: config.view_factor,
            view_offset: config.view_offset,
        }
    }

    #[must_use]
    pub const fn with_delay(mut self, delay: u32) -> Self {
        self.delay = delay;
        self
    }

    #[must_use]
    pub const fn with_view_factor(mut self, view_factor: f64) -> Self {
        self.view_factor = view_factor;
        self
    }
}

/// An element of the archive page that can be revealed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RevealTarget {
    Header,
    Table,
    Row(EntryId),
}

impl RevealTarget {
    /// CSS selector for the element in the rendered document.
    #[must_use]
    pub fn selector(&self) -> String {
        match self {
            Self::Header => String::from("#archive-header"),
            Self::Table => String::from("#archive-table"),
            Self::Row(id) => format!("tr[data-entry=\"{id}\"]"),
        }
    }
}

/// The animation utility: fire-and-forget, one call per element.
pub trait Revealer {
    fn reveal(&mut self, target: &RevealTarget, options: &RevealOptions);
}

/// The user's reduced-motion signal.
pub trait MotionPreference {
    fn prefers_reduced_motion(&self) -> bool;
}

impl MotionPreference for bool {
    fn prefers_reduced_motion(&self) -> bool {
        *self
    }
}

impl MotionPreference for MotionConfig {
    fn prefers_reduced_motion(&self) -> bool {
        self.prefers_reduced_motion
    }
}

/// Gate for a post-commit effect with a single boolean dependency.
///
/// Opens on the first commit and afterwards only when the dependency value
/// differs from the one seen at the previous run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RevealHook {
    last: Option<bool>,
}

impl RevealHook {
    #[must_use]
    pub const fn new() -> Self {
        Self { last: None }
    }

    /// Record a commit with `dependency` and report whether the effect runs.
    pub fn arm(&mut self, dependency: bool) -> bool {
        if self.last == Some(dependency) {
            return false;
        }
        self.last = Some(dependency);
        true
    }

    /// Whether the effect has run at least once this mount.
    #[must_use]
    pub const fn has_run(&self) -> bool {
        self.last.is_some()
    }
}

/// Collects reveal calls and writes them out as a ScrollReveal bootstrap.
#[derive(Debug, Clone, Default)]
pub struct ScriptRevealer {
    calls: Vec<(String, RevealOptions)>,
}

impl ScriptRevealer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.calls.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }

    /// The bootstrap script body, or `None` when nothing was revealed.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::Script`] if options fail to serialize.
    pub fn render_script(&self) -> Result<Option<String>, PageError> {
        if self.calls.is_empty() {
            return Ok(None);
        }

        let mut script = String::from(
            "(function () {\n  if (typeof ScrollReveal !== 'function') return;\n  var sr = ScrollReveal();\n",
        );
        for (selector, options) in &self.calls {
            let selector = script_safe(&serde_json::to_string(selector)?);
            let options = script_safe(&serde_json::to_string(options)?);
            script.push_str(&format!(
                "  sr.reveal(document.querySelector({selector}), {options});\n"
            ));
        }
        script.push_str("})();\n");
        Ok(Some(script))
    }
}

impl Revealer for ScriptRevealer {
    fn reveal(&mut self, target: &RevealTarget, options: &RevealOptions) {
        self.calls.push((target.selector(), options.clone()));
    }
}

// JSON is valid JS, but "</" would close the surrounding <script> element.
fn script_safe(json: &str) -> String {
    json.replace("</", "<\\/")
}
