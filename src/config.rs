//! Widget configuration.
//!
//! A widget can be described in YAML and built with
//! [`HistogramWidget::from_config`](crate::widget::HistogramWidget::from_config):
//!
//! ```yaml
//! bins: [A, B, C]
//! width: 400
//! height: 400
//! series_label: Emotivist beliefs
//! anchor_id: elements
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Error, Result};
use crate::page::DEFAULT_ANCHOR_ID;

/// Construction parameters for a histogram widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetConfig {
    /// Bin labels, in display order.
    #[serde(default = "default_bins")]
    pub bins: Vec<String>,

    /// Canvas width in pixels.
    #[serde(default = "default_size")]
    pub width: u32,

    /// Canvas height in pixels.
    #[serde(default = "default_size")]
    pub height: u32,

    /// Series display label.
    #[serde(default = "default_series_label")]
    pub series_label: String,

    /// Id of the page element the canvas is mounted after.
    #[serde(default = "default_anchor_id")]
    pub anchor_id: String,
}

fn default_bins() -> Vec<String> {
    ["A", "B", "C"].map(String::from).to_vec()
}
fn default_size() -> u32 {
    400
}
fn default_series_label() -> String {
    "Beliefs".to_string()
}
fn default_anchor_id() -> String {
    DEFAULT_ANCHOR_ID.to_string()
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            bins: default_bins(),
            width: default_size(),
            height: default_size(),
            series_label: default_series_label(),
            anchor_id: default_anchor_id(),
        }
    }
}

impl WidgetConfig {
    /// Parse a YAML document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] on malformed YAML and the validation errors
    /// of [`WidgetConfig::validate`].
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml_ng::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Serialize to YAML.
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml_ng::to_string(self)?)
    }

    /// Check that the widget can be built from this configuration.
    pub fn validate(&self) -> Result<()> {
        if self.bins.is_empty() {
            return Err(Error::EmptyBins);
        }
        if self.width == 0 || self.height == 0 {
            return Err(Error::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}
