use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use julia_fractal_core::{Complex, GenerateRequest, Scale};
use julia_fractal_render::Tint;

/// Environment variable holding an optional JSON demo configuration.
pub const CONFIG_ENV: &str = "JULIA_DEMO_CONFIG";

/// What the demo renders and how it is tinted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemoConfig {
    #[serde(flatten)]
    pub request: GenerateRequest,
    /// RGB channel weights, see [`Tint`].
    #[serde(default = "default_tint")]
    pub tint: [f64; 3],
}

fn default_tint() -> [f64; 3] {
    let Tint { r, g, b } = Tint::OCEAN;
    [r, g, b]
}

impl Default for DemoConfig {
    /// A tall 1000×2000 frame, shorter side spanning 2 units, 1000 iterations.
    fn default() -> Self {
        Self {
            request: GenerateRequest {
                width: 1000,
                height: 2000,
                c: Complex::new(-0.74543, 0.11301),
                max_iterations: 1000,
                scale: Scale::Extent { extent: 2.0 },
                escape_radius: 2.0,
                periodicity_check: false,
                center: Complex::ZERO,
            },
            tint: default_tint(),
        }
    }
}

impl DemoConfig {
    pub fn tint(&self) -> Tint {
        let [r, g, b] = self.tint;
        Tint::new(r, g, b)
    }

    /// Load from [`CONFIG_ENV`], falling back to defaults when unset or invalid.
    pub fn load() -> Self {
        match std::env::var(CONFIG_ENV) {
            Ok(json) => Self::from_json(&json).unwrap_or_default(),
            Err(_) => {
                debug!("{CONFIG_ENV} not set, using defaults");
                Self::default()
            }
        }
    }

    fn from_json(json: &str) -> Option<Self> {
        match serde_json::from_str::<DemoConfig>(json) {
            Ok(config) => {
                info!("Loaded demo configuration from {CONFIG_ENV}");
                Some(config)
            }
            Err(e) => {
                error!("Failed to parse {CONFIG_ENV}: {e}");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_fills_defaults() {
        let json = r#"{
            "width": 64,
            "height": 32,
            "c": { "re": -0.8, "im": 0.156 },
            "max_iterations": 50,
            "scale": { "mode": "zoom", "zoom": 20.0 }
        }"#;
        let config = DemoConfig::from_json(json).unwrap();
        assert_eq!(config.request.width, 64);
        assert_eq!(config.request.escape_radius, 2.0);
        assert_eq!(config.tint(), Tint::OCEAN);
    }

    #[test]
    fn custom_tint() {
        let json = r#"{
            "width": 8,
            "height": 8,
            "c": { "re": 0.0, "im": 0.0 },
            "max_iterations": 5,
            "scale": { "mode": "extent", "extent": 3.0 },
            "tint": [1.0, 0.5, 0.0]
        }"#;
        let config = DemoConfig::from_json(json).unwrap();
        assert_eq!(config.tint(), Tint::new(1.0, 0.5, 0.0));
    }

    #[test]
    fn invalid_json_is_rejected() {
        assert!(DemoConfig::from_json("{ not json").is_none());
        assert!(DemoConfig::from_json(r#"{"width": 4}"#).is_none());
    }

    #[test]
    fn default_round_trips() {
        let json = serde_json::to_string(&DemoConfig::default()).unwrap();
        assert_eq!(DemoConfig::from_json(&json), Some(DemoConfig::default()));
    }
}
