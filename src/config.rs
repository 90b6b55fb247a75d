//! Panel options, loadable from a YAML theme configuration block

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Drag-distance threshold past which a released drag commits to the
/// opposite open/closed state instead of snapping back.
///
/// Either a fixed pixel distance or a fraction of the open-travel
/// distance (the upstream default is a third of the padding).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Tolerance {
    /// Fixed distance in pixels
    Fixed(f64),
    /// Fraction of the padding
    Ratio { ratio: f64 },
}

impl Default for Tolerance {
    fn default() -> Self {
        Tolerance::Ratio { ratio: 1.0 / 3.0 }
    }
}

impl Tolerance {
    /// Resolve to a concrete pixel distance for the given padding
    pub fn resolve(&self, padding: f64) -> f64 {
        match self {
            Tolerance::Fixed(px) => *px,
            Tolerance::Ratio { ratio } => padding * ratio,
        }
    }
}

/// Configuration for one panel controller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelOptions {
    /// CSS transition easing function name
    #[serde(default = "default_effect")]
    pub effect: String,
    /// Transition length in milliseconds
    #[serde(default = "default_duration_ms")]
    pub duration_ms: u64,
    /// Commit threshold for released drags
    #[serde(default)]
    pub tolerance: Tolerance,
    /// Open-travel distance in pixels; 0 means measure the content width
    #[serde(default)]
    pub padding: f64,
    /// Enables touch gesture handling when the host supports it
    #[serde(default = "default_touch")]
    pub touch: bool,
    /// Marker class toggled on the root element while open
    #[serde(default = "default_open_class")]
    pub open_class: String,
    /// Class applied to the generated overlay element
    #[serde(default = "default_overlay_class")]
    pub overlay_class: String,
}

fn default_effect() -> String {
    "ease".to_string()
}

fn default_duration_ms() -> u64 {
    300
}

fn default_touch() -> bool {
    true
}

fn default_open_class() -> String {
    "offcanvas-open".to_string()
}

fn default_overlay_class() -> String {
    "offcanvas-overlay".to_string()
}

impl Default for PanelOptions {
    fn default() -> Self {
        Self {
            effect: default_effect(),
            duration_ms: default_duration_ms(),
            tolerance: Tolerance::default(),
            padding: 0.0,
            touch: default_touch(),
            open_class: default_open_class(),
            overlay_class: default_overlay_class(),
        }
    }
}

impl PanelOptions {
    /// Parse options from a YAML document (e.g., a theme configuration block)
    pub fn from_yaml(content: &str) -> anyhow::Result<Self> {
        let options: Self =
            serde_yaml::from_str(content).context("Failed to parse panel options")?;
        options
            .validate()
            .map_err(anyhow::Error::msg)
            .context("Invalid panel options")?;
        Ok(options)
    }

    /// Serialize options back to YAML
    pub fn to_yaml(&self) -> anyhow::Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize panel options")
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<(), String> {
        if self.padding < 0.0 || !self.padding.is_finite() {
            return Err(format!("padding must be a finite value >= 0, got {}", self.padding));
        }
        match self.tolerance {
            Tolerance::Fixed(px) if px < 0.0 || !px.is_finite() => {
                return Err(format!("tolerance must be a finite value >= 0, got {}px", px));
            }
            Tolerance::Ratio { ratio } if ratio < 0.0 || !ratio.is_finite() => {
                return Err(format!("tolerance ratio must be a finite value >= 0, got {}", ratio));
            }
            _ => {}
        }
        if self.effect.is_empty() {
            return Err("effect must name an easing function".to_string());
        }
        if self.open_class.is_empty() || self.overlay_class.is_empty() {
            return Err("marker classes must be non-empty".to_string());
        }
        Ok(())
    }
}
