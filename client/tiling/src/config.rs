use crate::layout::Geometry;
use serde::{Deserialize, Serialize};

pub const DEFAULT_OCTAGON_WIDTH: f64 = 180.;

pub const DEFAULT_CONFIG: Config = Config {
    octagon_width: DEFAULT_OCTAGON_WIDTH,
};

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_octagon_width")]
    pub octagon_width: f64,
}

fn default_octagon_width() -> f64 {
    DEFAULT_OCTAGON_WIDTH
}

impl Default for Config {
    fn default() -> Config {
        DEFAULT_CONFIG
    }
}

impl Config {
    // from_json parses a config object; blank input falls back to the default config
    pub fn from_json(json: &str) -> Result<Config, String> {
        if json.trim().is_empty() {
            return Ok(Config::default());
        }
        let config = serde_json::from_str::<Config>(json).map_err(|e| format!("invalid config: {}", e))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), String> {
        if !self.octagon_width.is_finite() || self.octagon_width <= 0. {
            return Err(format!("octagonWidth must be a positive number, got {}", self.octagon_width));
        }
        Ok(())
    }

    pub fn geometry(&self) -> Geometry {
        Geometry::new(self.octagon_width)
    }
}
