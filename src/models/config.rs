use lut_grid::{Rgb16, COLOR_CHECKER};
use serde::Deserialize;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::error::ConfigError;

/// Application configuration loaded from a YAML file
#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
pub struct LutConfig {
    /// Grid axis sizes
    #[serde(default)]
    pub grid: GridSize,

    /// Samples to count references for (defaults to the color checker)
    #[serde(default)]
    pub samples: Option<Vec<SampleConfig>>,
}

/// Number of grid points along each axis
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct GridSize {
    pub x: usize,
    pub y: usize,
    pub z: usize,
}

impl Default for GridSize {
    fn default() -> Self {
        Self { x: 4, y: 3, z: 3 }
    }
}

/// A named sample color
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct SampleConfig {
    pub name: String,

    /// 16-bit channels, `[r, g, b]`
    pub rgb: [u16; 3],
}

impl SampleConfig {
    pub fn color(&self) -> Rgb16 {
        Rgb16::from(self.rgb)
    }
}

impl LutConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&content)?;
        tracing::info!(
            path = %path.display(),
            grid = %config.grid,
            samples = config.samples.as_ref().map_or(0, Vec::len),
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Configured samples, or the 24 color-checker patches
    pub fn samples(&self) -> Vec<SampleConfig> {
        match &self.samples {
            Some(samples) => samples.clone(),
            None => COLOR_CHECKER
                .iter()
                .map(|s| SampleConfig {
                    name: s.name.to_string(),
                    rgb: s.color.channels(),
                })
                .collect(),
        }
    }
}

impl fmt::Display for GridSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}x{}", self.x, self.y, self.z)
    }
}

impl FromStr for GridSize {
    type Err = ConfigError;

    /// Parse `NXxNYxNZ`, e.g. `4x3x3`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ConfigError::InvalidSize(s.to_string());
        let parts: Vec<usize> = s
            .split(['x', 'X'])
            .map(|p| p.trim().parse::<usize>().map_err(|_| invalid()))
            .collect::<Result<_, _>>()?;
        match parts.as_slice() {
            &[x, y, z] => Ok(Self { x, y, z }),
            _ => Err(invalid()),
        }
    }
}

/// Parse a color given as `rrrr,gggg,bbbb` (16-bit hex channels, optional
/// `0x` prefix) or `#rrggbb` (8-bit, widened to the high byte).
pub fn parse_color(s: &str) -> Result<Rgb16, ConfigError> {
    let invalid = || ConfigError::InvalidColor(s.to_string());
    let trimmed = s.trim();

    if let Some(hex) = trimmed.strip_prefix('#') {
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(invalid());
        }
        let byte = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map(|v| u16::from(v) << 8)
                .map_err(|_| invalid())
        };
        return Ok(Rgb16::new(byte(0)?, byte(2)?, byte(4)?));
    }

    let channels: Vec<u16> = trimmed
        .split(',')
        .map(|p| {
            let p = p.trim();
            let p = p
                .strip_prefix("0x")
                .or_else(|| p.strip_prefix("0X"))
                .unwrap_or(p);
            if p.is_empty() || p.len() > 4 {
                return Err(invalid());
            }
            u16::from_str_radix(p, 16).map_err(|_| invalid())
        })
        .collect::<Result<_, _>>()?;

    match channels.as_slice() {
        &[r, g, b] => Ok(Rgb16::new(r, g, b)),
        _ => Err(invalid()),
    }
}
