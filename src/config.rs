use serde::Deserialize;
use tracing::warn;

/// Viewer tunables, loaded from an optional `viewer.toml` next to the
/// binary. Any missing field keeps its default; a malformed file falls
/// back to defaults entirely.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct ViewerConfig {
    /// Base URL of the external simulator.
    pub gateway_url: String,
    /// Visual cell edge length in pixels. The drawing surface is
    /// `board_size * cell_size` pixels on each side.
    pub cell_size: f32,
    /// Auto-cycle advance period.
    pub autocycle_period_ms: u64,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            gateway_url: "http://localhost:8080".to_owned(),
            cell_size: 40.0,
            autocycle_period_ms: 200,
        }
    }
}

impl ViewerConfig {
    pub fn load() -> Self {
        match std::fs::read_to_string("viewer.toml") {
            Ok(raw) => Self::parse(&raw),
            Err(_) => Self::default(),
        }
    }

    fn parse(raw: &str) -> Self {
        match toml::from_str(raw) {
            Ok(config) => config,
            Err(err) => {
                warn!(%err, "viewer.toml is malformed, using defaults");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ViewerConfig::default();
        assert_eq!(config.cell_size, 40.0);
        assert_eq!(config.autocycle_period_ms, 200);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let config = ViewerConfig::parse("autocycle_period_ms = 500\n");
        assert_eq!(config.autocycle_period_ms, 500);
        assert_eq!(config.cell_size, 40.0);
        assert_eq!(config.gateway_url, "http://localhost:8080");
    }

    #[test]
    fn test_malformed_file_falls_back_to_defaults() {
        assert_eq!(ViewerConfig::parse("cell_size = \"wide\""), ViewerConfig::default());
    }
}
