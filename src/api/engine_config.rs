use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::{KundaliError, KundaliResult};
use crate::layout::GridStyle;

/// Public engine bootstrap configuration.
///
/// This type is serializable so host applications can persist/load chart
/// setup without inventing their own ad-hoc format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KundaliEngineConfig {
    pub viewport: Viewport,
    #[serde(default = "default_grid_style")]
    pub grid_style: GridStyle,
}

impl KundaliEngineConfig {
    /// Creates a config with the default north-diamond grid.
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            grid_style: default_grid_style(),
        }
    }

    #[must_use]
    pub fn with_grid_style(mut self, grid_style: GridStyle) -> Self {
        self.grid_style = grid_style;
        self
    }

    pub fn to_json_pretty(&self) -> KundaliResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| KundaliError::InvalidData(format!("failed to serialize config: {e}")))
    }

    pub fn from_json_str(raw: &str) -> KundaliResult<Self> {
        serde_json::from_str(raw)
            .map_err(|e| KundaliError::InvalidPayload(format!("failed to parse config: {e}")))
    }
}

fn default_grid_style() -> GridStyle {
    GridStyle::NorthDiamond
}

#[cfg(test)]
mod tests {
    use super::KundaliEngineConfig;
    use crate::core::Viewport;
    use crate::layout::GridStyle;

    #[test]
    fn grid_style_defaults_to_north_diamond_in_json() {
        let raw = r#"{"viewport":{"width":400,"height":400}}"#;
        let config: KundaliEngineConfig = serde_json::from_str(raw).expect("config parses");
        assert_eq!(config.grid_style, GridStyle::NorthDiamond);
        assert_eq!(config.viewport, Viewport::new(400, 400));
    }

    #[test]
    fn builder_sets_the_south_grid() {
        let config =
            KundaliEngineConfig::new(Viewport::new(300, 300)).with_grid_style(GridStyle::SouthGrid);
        assert_eq!(config.grid_style, GridStyle::SouthGrid);
    }
}
