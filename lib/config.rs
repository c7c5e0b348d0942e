//! Run configuration for the field-sweep driver binaries.

use std::{ fs, path::Path };
use thiserror::Error;

/// Errors arising from reading and parsing a sweep configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Couldn't read a config file.
    #[error("couldn't read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Couldn't parse config file contents.
    #[error("couldn't parse config file: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Bad value type or range for a key.
    #[error("invalid value for key '{0}'")]
    InvalidValue(String),
}

fn get_float(table: &toml::Table, key: &str) -> Result<Option<f64>, ConfigError> {
    table.get(key)
        .map(|value| {
            value.as_float()
                .or_else(|| value.as_integer().map(|n| n as f64))
                .ok_or_else(|| ConfigError::InvalidValue(key.into()))
        })
        .transpose()
}

/// Magnetic field sweep settings for the driver binaries.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SweepConfig {
    /// [T] maximum field magnitude
    pub b_max: f64,
    /// number of field steps
    pub steps: usize,
    /// [rad] field angle relative to the defect symmetry axis
    pub theta: f64,
}

impl Default for SweepConfig {
    fn default() -> Self { Self { b_max: 0.5, steps: 200, theta: 0.0 } }
}

impl SweepConfig {
    /// Parse from TOML text; missing keys fall back to defaults.
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let table: toml::Table = text.parse()?;
        let mut config = Self::default();
        if let Some(b_max) = get_float(&table, "b_max")? {
            if b_max < 0.0 {
                return Err(ConfigError::InvalidValue("b_max".into()));
            }
            config.b_max = b_max;
        }
        if let Some(value) = table.get("steps") {
            config.steps
                = value.as_integer()
                .filter(|n| *n > 0)
                .map(|n| n as usize)
                .ok_or_else(|| ConfigError::InvalidValue("steps".into()))?;
        }
        if let Some(theta) = get_float(&table, "theta")? {
            config.theta = theta;
        }
        Ok(config)
    }

    /// Read from a TOML file, falling back to defaults if the file doesn't
    /// exist.
    pub fn load_or_default<P>(path: P) -> Result<Self, ConfigError>
    where P: AsRef<Path>
    {
        let path = path.as_ref();
        if !path.exists() { return Ok(Self::default()); }
        let text = fs::read_to_string(path)?;
        Self::from_toml(&text)
    }

    /// Return the sweep field direction as a unit vector `[sin θ, 0, cos θ]`.
    pub fn direction(&self) -> [f64; 3] {
        [self.theta.sin(), 0.0, self.theta.cos()]
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn defaults() {
        let config = SweepConfig::from_toml("").unwrap();
        assert_eq!(config, SweepConfig::default());
    }

    #[test]
    fn full_table() {
        let config
            = SweepConfig::from_toml(
                "b_max = 1.25\nsteps = 50\ntheta = 0.1\n")
            .unwrap();
        assert_eq!(config.b_max, 1.25);
        assert_eq!(config.steps, 50);
        assert_eq!(config.theta, 0.1);
    }

    #[test]
    fn integer_fields_accepted() {
        let config = SweepConfig::from_toml("b_max = 1\n").unwrap();
        assert_eq!(config.b_max, 1.0);
    }

    #[test]
    fn bad_values_rejected() {
        assert!(SweepConfig::from_toml("b_max = -1.0\n").is_err());
        assert!(SweepConfig::from_toml("steps = 0\n").is_err());
        assert!(SweepConfig::from_toml("steps = \"many\"\n").is_err());
        assert!(SweepConfig::from_toml("b_max = [1.0]\n").is_err());
    }

    #[test]
    fn axial_direction() {
        let direction = SweepConfig::default().direction();
        assert!((direction[0] - 0.0).abs() < 1e-15);
        assert!((direction[2] - 1.0).abs() < 1e-15);
    }
}
